//! Opt-in helpers for plain vectors and slices.
//!
//! Nothing here changes `Vec<T>` unless [`ArrayExt`] is imported at the call site.

use crate::record::{Fields, Record};

/// Extension trait for `Vec<T>` with index-based mutation helpers.
pub trait ArrayExt<T>: AsRef<Vec<T>> + AsMut<Vec<T>> {
    /// The last element, or `None` for an empty vector.
    fn last_value(&self) -> Option<&T> {
        self.as_ref().last()
    }

    /// Overwrite the last element. A no-op returning `false` when the vector
    /// is empty or `value` is `None`.
    fn set_last(&mut self, value: Option<T>) -> bool {
        match (self.as_mut().last_mut(), value) {
            (Some(slot), Some(value)) => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    /// Swap in `value` at `index`, returning the old element, or `None` when
    /// `index` is out of range.
    fn replace_at(&mut self, index: usize, value: T) -> Option<T> {
        let slot = self.as_mut().get_mut(index)?;
        Some(std::mem::replace(slot, value))
    }

    /// Take out the element at `index`, moving everything after it down one
    /// slot. Past the end nothing is removed and the result is `None`.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        let items = self.as_mut();
        (index < items.len()).then(|| items.remove(index))
    }
}

impl<T> ArrayExt<T> for Vec<T> {}

/// Creates one record per element containing only the keys specified.
pub fn extract_map<T: Fields, K: AsRef<str>>(items: &[T], keys: &[K]) -> Vec<Record> {
    items.iter().map(|item| item.project(keys)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_last_value_on_vec() {
        let v = vec![4, 5, 6];
        assert_eq!(v.last_value(), Some(&6));
        let empty: Vec<u8> = Vec::new();
        assert_eq!(empty.last_value(), None);
    }

    #[test]
    fn test_set_last_on_vec() {
        let mut v = vec![1, 2, 3];
        assert!(v.set_last(Some(9)));
        assert_eq!(v, [1, 2, 9]);
        assert!(!v.set_last(None));
        assert_eq!(v, [1, 2, 9]);

        let mut empty: Vec<i32> = Vec::new();
        assert!(!empty.set_last(Some(1)));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_replace_and_remove_on_vec() {
        let mut v = vec!['a', 'b', 'c'];
        assert_eq!(v.replace_at(1, 'x'), Some('b'));
        assert_eq!(v.replace_at(3, 'z'), None);
        assert_eq!(v.remove_at(0), Some('a'));
        assert_eq!(v.remove_at(5), None);
        assert_eq!(v, ['x', 'c']);
    }

    #[test]
    fn test_extract_map_on_slice() {
        let rows = [
            record! { "a" => 1i64, "b" => 2i64, "c" => 3i64 },
            record! { "a" => 4i64 },
        ];
        let projected = extract_map(&rows, &["a", "b"]);
        assert_eq!(
            projected,
            vec![record! { "a" => 1i64, "b" => 2i64 }, record! { "a" => 4i64 }]
        );
        assert_eq!(rows[0].len(), 3);
    }
}
