use serde::Serialize;
use std::ops::Deref;

// ─── UtilityArray ───────────────────────────────────────────────────────────

/// An owned, ordered sequence with index-based mutation helpers.
///
/// Key and pattern queries are added when `T` implements
/// [`Fields`](crate::record::Fields).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UtilityArray<T> {
    pub(crate) items: Vec<T>,
}

impl<T> UtilityArray<T> {
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the wrapper and hand back the backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for UtilityArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for UtilityArray<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for UtilityArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<UtilityArray<T>> for Vec<T> {
    fn from(array: UtilityArray<T>) -> Self {
        array.items
    }
}

impl<T> FromIterator<T> for UtilityArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for UtilityArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for UtilityArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UtilityArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
