//! Bounded quicksort stage.

/// Ranges of at most this many elements are not subdivided any further by the quicksort stage,
/// they are left for the final insertion sort pass.
pub const SORT_SIZE_THRESHOLD: usize = 16;

/// Partitions `v` until every remaining range holds at most [`SORT_SIZE_THRESHOLD`] elements.
///
/// `limit` is the recursion budget. It is halved on every subdivision and once it reaches zero
/// the current range is handed to heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// On return every element of `v` is inside the window of at most `SORT_SIZE_THRESHOLD` slots it
/// would occupy in sorted order. The windows themselves are in no particular order internally.
///
/// Only the right part of a partition is recursed into, the left part is handled by the loop.
/// Together with the halving budget this bounds the native recursion depth by the bit length of
/// `limit`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn introsort<T, E, F>(mut v: &mut [T], is_less: &mut F, mut limit: usize) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    while v.len() > SORT_SIZE_THRESHOLD {
        // Recursion budget spent, switch to the guaranteed bound.
        if limit == 0 {
            return crate::heapsort::heapsort(v, is_less);
        }
        limit >>= 1;

        let median = median_of_three(v, is_less)?;
        let mid = partition(v, median, is_less)?;

        let (left, right) = v.split_at_mut(mid);

        introsort(right, is_less, limit)?;

        v = left;
    }

    Ok(())
}

/// Picks the median of the first element, the element one past the midpoint, and the last
/// element. Returns its index.
///
/// Ties are resolved exactly as follows, with `a`, `b` and `c` the three candidates:
///
/// * `a < b`: `b` if `b < c`, else `c` if `a < c`, else `a`.
/// * otherwise: `b` if `b > c`, else `c` if `a > c`, else `a`.
///
/// The caller has to guarantee `v.len() > SORT_SIZE_THRESHOLD`.
fn median_of_three<T, E, F>(v: &[T], is_less: &mut F) -> Result<usize, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = v.len();
    debug_assert!(len > SORT_SIZE_THRESHOLD);

    let a = 0;
    let b = len / 2 + 1;
    let c = len - 1;

    let median = if is_less(&v[a], &v[b])? {
        if is_less(&v[b], &v[c])? {
            b
        } else if is_less(&v[a], &v[c])? {
            c
        } else {
            a
        }
    } else if is_less(&v[c], &v[b])? {
        b
    } else if is_less(&v[c], &v[a])? {
        c
    } else {
        a
    };

    Ok(median)
}

/// Hoare partition around the element at index `median`.
///
/// Two scans converge from both ends: the left one skips elements less than the median, the right
/// one skips elements greater than the median, mismatched pairs are swapped. The median element
/// itself may be swapped too, its index is tracked so that every comparison is made against the
/// same element.
///
/// Returns the index `mid` at which the scans met. When the comparator implements a total order,
/// every element of `v[..mid]` is less than or equal to every element of `v[mid..]`, and
/// `mid < v.len()`.
///
/// Both scans are clamped to the bounds of `v`. With a total order they stop on their own before
/// reaching the clamp, without one they would otherwise run off the slice.
fn partition<T, E, F>(v: &mut [T], mut median: usize, is_less: &mut F) -> Result<usize, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = v.len();
    debug_assert!(median < len);

    let mut i = 0;
    let mut j = len;

    loop {
        while i < len - 1 && is_less(&v[i], &v[median])? {
            i += 1;
        }

        j -= 1;
        while j > 0 && is_less(&v[median], &v[j])? {
            j -= 1;
        }

        if i >= j {
            return Ok(i);
        }

        v.swap(i, j);
        if median == i {
            median = j;
        } else if median == j {
            median = i;
        }

        i += 1;
    }
}
