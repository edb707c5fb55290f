/// Implementation under test. Implemented by a zero-sized marker type per sort, the shared
/// suite in [`tests`] is instantiated for it with [`instantiate_sort_tests!`].
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
pub mod test_types;
