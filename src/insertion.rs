/// Sorts `v` with a single insertion sort pass.
///
/// Runs over the whole slice after the quicksort stage. At that point every element sits within
/// a small window around its final position, so the inner loop stays short and the pass is close
/// to linear. On arbitrary input this is *O*(*n*^2).
///
/// Elements are moved with adjacent swaps, so the slice holds a permutation of its original
/// elements even if `is_less` fails midway.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn insertion_sort<T, E, F>(v: &mut [T], is_less: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    for tail in 1..v.len() {
        let mut i = tail;
        while i > 0 && is_less(&v[i], &v[i - 1])? {
            v.swap(i - 1, i);
            i -= 1;
        }
    }

    Ok(())
}
