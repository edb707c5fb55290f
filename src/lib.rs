//! Hybrid unstable sort: bounded quicksort, heapsort fallback, insertion-sort finisher.
//!
//! Alongside the sort this crate carries a handful of slice helpers (formatting, equality,
//! hashing, filling and a fixed-size list view), see [`arrays`].

use core::cmp::Ordering;
use core::convert::Infallible;

pub mod arrays;

mod heapsort;
mod insertion;
mod introsort;
mod list_view;

pub use introsort::SORT_SIZE_THRESHOLD;
pub use list_view::{ListView, UnsupportedOperation};

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Introsort with a median-of-three pivot, that stops subdividing once a range holds at most
/// [`SORT_SIZE_THRESHOLD`] elements and falls back to heapsort once its recursion budget is
/// spent. A single insertion sort pass over the whole slice then fixes up the small unsorted
/// windows left behind by the quicksort stage.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 3, 1, 4];
///
/// hybrid_sort::sort(&mut v);
/// assert_eq!(v, [1, 3, 3, 4, 5]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    into_ok(hybrid_sort(v, &mut |a: &T, b: &T| Ok(a.lt(b))));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified. An order is a
/// total order if it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
///
/// Regardless of the comparator, and even if it panics, `v` always ends up holding a permutation
/// of its original elements.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// hybrid_sort::sort_by(&mut v, |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// hybrid_sort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    into_ok(hybrid_sort(v, &mut |a: &T, b: &T| {
        Ok(compare(a, b) == Ordering::Less)
    }));
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called once per comparison side, so expensive keys are recomputed.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    into_ok(hybrid_sort(v, &mut |a: &T, b: &T| Ok(f(a).lt(&f(b)))));
}

/// Sorts the slice with a fallible comparator function.
///
/// The first `Err` returned by `compare` aborts the sort and is handed back unchanged. At that
/// point `v` holds a permutation of its original elements, in no particular order.
///
/// # Examples
///
/// ```
/// let mut v = ["10", "7", "x", "3"];
/// let res = hybrid_sort::try_sort_by(&mut v, |a, b| {
///     Ok::<_, std::num::ParseIntError>(a.parse::<i32>()?.cmp(&b.parse::<i32>()?))
/// });
/// assert!(res.is_err());
///
/// let mut v = ["10", "7", "3"];
/// let res = hybrid_sort::try_sort_by(&mut v, |a, b| {
///     Ok::<_, std::num::ParseIntError>(a.parse::<i32>()?.cmp(&b.parse::<i32>()?))
/// });
/// assert!(res.is_ok());
/// assert_eq!(v, ["3", "7", "10"]);
/// ```
pub fn try_sort_by<T, E, F>(v: &mut [T], mut compare: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    hybrid_sort(v, &mut |a: &T, b: &T| {
        compare(a, b).map(|ord| ord == Ordering::Less)
    })
}

// --- IMPL ---

/// Runs the three stages. The recursion budget starts out as the length of `v`.
#[inline]
fn hybrid_sort<T, E, F>(v: &mut [T], is_less: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = v.len();

    if len < 2 {
        return Ok(());
    }

    introsort::introsort(v, is_less, len)?;
    insertion::insertion_sort(v, is_less)
}

fn into_ok(res: Result<(), Infallible>) {
    match res {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
