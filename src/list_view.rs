use std::fmt;
use std::slice;

/// Error returned by the mutating operations of [`ListView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedOperation {
    #[error("cannot set an element of a fixed-size list view")]
    Set,
    #[error("cannot add an element to a fixed-size list view")]
    Add,
    #[error("cannot remove an element from a fixed-size list view")]
    Remove,
}

/// Fixed-size list view over a slice, see [`crate::arrays::as_list`].
///
/// Supports lookups, forward and backward index search and iteration. The size never changes
/// and elements can't be replaced, every mutating operation fails with [`UnsupportedOperation`].
#[derive(Debug, Clone, Copy)]
pub struct ListView<'a, T> {
    data: &'a [T],
}

impl<'a, T> ListView<'a, T> {
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.data.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn set(&mut self, _index: usize, _value: T) -> Result<T, UnsupportedOperation> {
        Err(UnsupportedOperation::Set)
    }

    pub fn add(&mut self, _index: usize, _value: T) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::Add)
    }

    pub fn remove(&mut self, _index: usize) -> Result<T, UnsupportedOperation> {
        Err(UnsupportedOperation::Remove)
    }
}

impl<'a, T: PartialEq> ListView<'a, T> {
    /// Index of the first element equal to `elem`.
    pub fn index_of(&self, elem: &T) -> Option<usize> {
        self.data.iter().position(|x| x == elem)
    }

    /// Index of the last element equal to `elem`.
    pub fn last_index_of(&self, elem: &T) -> Option<usize> {
        self.data.iter().rposition(|x| x == elem)
    }

    pub fn contains(&self, elem: &T) -> bool {
        self.index_of(elem).is_some()
    }
}

impl<'a, T> IntoIterator for ListView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T: fmt::Display> fmt::Display for ListView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::arrays::write_list(f, self.data)
    }
}

#[cfg(test)]
mod tests {
    use crate::arrays::{self, as_list};

    use super::*;

    #[test]
    fn lookup() {
        let v = [4, 8, 4, 1];
        let list = as_list(&v);

        assert_eq!(list.len(), 4);
        assert!(!list.is_empty());
        assert_eq!(list.get(1), Some(&8));
        assert_eq!(list.get(4), None);
        assert_eq!(list.index_of(&4), Some(0));
        assert_eq!(list.last_index_of(&4), Some(2));
        assert_eq!(list.index_of(&5), None);
        assert_eq!(list.last_index_of(&5), None);
        assert!(list.contains(&1));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), v);
        assert_eq!(list.into_iter().count(), 4);
    }

    #[test]
    fn absent_elements() {
        let v = [None, Some("a"), None];
        let list = as_list(&v);

        assert_eq!(list.index_of(&None), Some(0));
        assert_eq!(list.last_index_of(&None), Some(2));
        assert_eq!(list.index_of(&Some("a")), Some(1));
    }

    #[test]
    fn mutation_unsupported() {
        let v = vec![1, 2, 3];
        let mut list = as_list(&v);

        assert_eq!(list.set(0, 5), Err(UnsupportedOperation::Set));
        assert_eq!(list.add(0, 5), Err(UnsupportedOperation::Add));
        assert_eq!(list.remove(0), Err(UnsupportedOperation::Remove));
        assert_eq!(v, [1, 2, 3]);

        assert_eq!(
            UnsupportedOperation::Add.to_string(),
            "cannot add an element to a fixed-size list view"
        );
    }

    #[test]
    fn display_matches_to_string() {
        let v = [1, 22, 333];
        assert_eq!(as_list(&v).to_string(), "[1, 22, 333]");
        assert_eq!(as_list(&v).to_string(), arrays::to_string(Some(&v[..])));

        let empty: [u8; 0] = [];
        assert_eq!(as_list(&empty).to_string(), "[]");
    }
}
