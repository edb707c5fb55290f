//! Slice helpers: formatting, equality, hashing and filling.
//!
//! Absent slices are modelled as `None`. All routines are generic over the element type, a
//! single `to_string_by` covers every element kind given an element-to-text function.

use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Display, Write};
use std::hash::{Hash, Hasher};

use crate::ListView;

/// Hash of an absent slice.
const NULL_ARRAY_HASH: i32 = 9023;
/// Initial value of the hash accumulator.
const HASH_SEED: i32 = 823347;
/// Hash contributed by an absent element.
const NULL_ELEMENT_HASH: i32 = 54267;

/// Renders `a` as `"[e0, e1, ...]"`, or `"null"` if `a` is absent.
///
/// ```
/// use hybrid_sort::arrays;
///
/// assert_eq!(arrays::to_string(Some(&[1, 2, 3][..])), "[1, 2, 3]");
/// assert_eq!(arrays::to_string::<u8>(None), "null");
/// ```
pub fn to_string<T>(a: Option<&[T]>) -> String
where
    T: Display,
{
    to_string_by(a, |e| e.to_string())
}

/// Same as [`to_string`], with the textual form of each element produced by `f`.
pub fn to_string_by<T, F>(a: Option<&[T]>, mut f: F) -> String
where
    F: FnMut(&T) -> String,
{
    let Some(a) = a else {
        return "null".into();
    };

    let mut out = String::with_capacity(2 + a.len() * 4);
    out.push('[');
    for (i, elem) in a.iter().enumerate() {
        if i != 0 {
            out.push_str(", ");
        }
        out.push_str(&f(elem));
    }
    out.push(']');

    out
}

pub(crate) fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, a: &[T]) -> fmt::Result {
    f.write_char('[')?;
    for (i, elem) in a.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{elem}")?;
    }
    f.write_char(']')
}

/// Returns `true` if both slices are absent, or both are present with the same length and
/// pairwise equal elements.
///
/// Slices of `Option<U>` compare absent elements as equal to each other and unequal to any
/// present element.
pub fn equals<T>(a: Option<&[T]>, b: Option<&[T]>) -> bool
where
    T: PartialEq,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            if core::ptr::eq(a, b) {
                return true;
            }

            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
        }
        _ => false,
    }
}

/// Hash code of `a`, combining the per element hashes produced by `f`.
///
/// An absent slice hashes to a fixed value. Otherwise the accumulator starts at a fixed seed and
/// for every element adds its hash, or a fixed value if `f` returns `None`, then triples.
/// Arithmetic wraps on overflow.
pub fn hash_code_by<T, F>(a: Option<&[T]>, mut f: F) -> i32
where
    F: FnMut(&T) -> Option<i32>,
{
    let Some(a) = a else {
        return NULL_ARRAY_HASH;
    };

    a.iter().fold(HASH_SEED, |hc, elem| {
        hc.wrapping_add(f(elem).unwrap_or(NULL_ELEMENT_HASH))
            .wrapping_mul(3)
    })
}

/// Hash code of `a`, using the element's [`Hash`] implementation folded to 32 bits.
///
/// The result is deterministic across processes.
pub fn hash_code<T>(a: Option<&[T]>) -> i32
where
    T: Hash,
{
    hash_code_by(a, |elem| Some(element_hash(elem)))
}

fn element_hash<T: Hash>(elem: &T) -> i32 {
    let mut hasher = DefaultHasher::new();
    elem.hash(&mut hasher);
    let h = hasher.finish();

    (h ^ (h >> 32)) as i32
}

/// Assigns `value` to every slot of `a`.
pub fn fill<T>(a: &mut [T], value: T)
where
    T: Clone,
{
    a.fill(value);
}

/// Fixed-size, read-only list view over `a`.
pub fn as_list<T>(a: &[T]) -> ListView<'_, T> {
    ListView::new(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format() {
        assert_eq!(to_string::<i32>(Some(&[])), "[]");
        assert_eq!(to_string(Some(&[7][..])), "[7]");
        assert_eq!(to_string(Some(&[true, false][..])), "[true, false]");
        assert_eq!(to_string(Some(&[1.5f64, -0.25][..])), "[1.5, -0.25]");
        assert_eq!(to_string(Some(&['a', 'b'][..])), "[a, b]");
        assert_eq!(to_string::<i64>(None), "null");
    }

    #[test]
    fn format_by() {
        let v = [Some(1), None, Some(3)];
        let text = to_string_by(Some(&v[..]), |e| match e {
            Some(x) => x.to_string(),
            None => "null".into(),
        });
        assert_eq!(text, "[1, null, 3]");
    }

    #[test]
    fn equality() {
        let a = [1, 2, 3];
        let b = vec![1, 2, 3];
        let c = [1, 2];

        assert!(equals::<i32>(None, None));
        assert!(equals(Some(&a[..]), Some(&a[..])));
        assert!(equals(Some(&a[..]), Some(&b[..])));
        assert!(!equals(Some(&a[..]), Some(&c[..])));
        assert!(!equals(Some(&a[..]), None));
        assert!(!equals(None, Some(&a[..])));

        let x = [Some("a"), None];
        let y = [Some("a"), None];
        let z = [None, Some("a")];
        assert!(equals(Some(&x[..]), Some(&y[..])));
        assert!(!equals(Some(&x[..]), Some(&z[..])));
    }

    #[test]
    fn hash() {
        assert_eq!(hash_code::<i32>(None), NULL_ARRAY_HASH);
        assert_eq!(hash_code::<i32>(Some(&[])), HASH_SEED);

        // (823347 + 1) * 3 = 2470044, (2470044 + 54267) * 3 = 7572933
        let v = [Some(1), None];
        assert_eq!(hash_code_by(Some(&v[..]), |e| *e), 7572933);

        // Wraps instead of overflowing.
        let big = [i32::MAX; 4];
        let _ = hash_code_by(Some(&big[..]), |e| Some(*e));

        let a = ["x".to_string(), "y".to_string()];
        let b = ["x".to_string(), "y".to_string()];
        assert_eq!(hash_code(Some(&a[..])), hash_code(Some(&b[..])));
        assert!(equals(Some(&a[..]), Some(&b[..])));
    }

    #[test]
    fn fill_all() {
        let mut v = vec![0u8; 5];
        fill(&mut v, 9);
        assert_eq!(v, [9; 5]);

        let mut s: [String; 3] = Default::default();
        fill(&mut s, "z".to_string());
        assert_eq!(s, ["z", "z", "z"]);

        let mut empty: [i32; 0] = [];
        fill(&mut empty, 1);
    }
}
