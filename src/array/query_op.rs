use tracing::trace;

use super::UtilityArray;
use crate::ext;
use crate::record::{Fields, Record};
use crate::value::Value;

impl<T: Fields> UtilityArray<T> {
    // ════════════════════════════════════════════════════════════════════════
    // Single-key lookup
    // ════════════════════════════════════════════════════════════════════════

    /// First element whose `key` field strictly equals `value`.
    ///
    /// ```
    /// use utility_array::{record, UtilityArray};
    ///
    /// let users: UtilityArray<_> = vec![record! { "id" => 1i64 }, record! { "id" => 2i64 }].into();
    /// let find_user_by_id = |id: i64| users.find_by("id", id);
    /// assert!(find_user_by_id(2).is_some());
    /// assert!(find_user_by_id(3).is_none());
    /// ```
    pub fn find_by(&self, key: &str, value: impl Into<Value>) -> Option<&T> {
        let index = self.find_index_by(key, value)?;
        self.items.get(index)
    }

    /// Position of the first element whose `key` field strictly equals `value`.
    pub fn find_index_by(&self, key: &str, value: impl Into<Value>) -> Option<usize> {
        let needle = value.into();
        let found = self
            .items
            .iter()
            .position(|item| item.field(key).is_some_and(|field| field.strict_eq(&needle)));
        if found.is_none() {
            trace!(key, "find_index_by: no match");
        }
        found
    }

    // ════════════════════════════════════════════════════════════════════════
    // Pattern lookup
    // ════════════════════════════════════════════════════════════════════════

    /// First element matching every field of `pattern`.
    pub fn find_where(&self, pattern: &Record) -> Option<&T> {
        let index = self.find_index_where(pattern)?;
        self.items.get(index)
    }

    pub fn find_index_where(&self, pattern: &Record) -> Option<usize> {
        let found = self.items.iter().position(|item| item.matches(pattern));
        if found.is_none() {
            trace!(fields = pattern.len(), "find_index_where: no match");
        }
        found
    }

    /// Remove and return the first element matching `pattern`.
    pub fn remove_where(&mut self, pattern: &Record) -> Option<T> {
        let index = self.find_index_where(pattern)?;
        self.remove_at(index)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Projection
    // ════════════════════════════════════════════════════════════════════════

    /// One record per element, holding only the listed fields.
    pub fn extract_map<K: AsRef<str>>(&self, keys: &[K]) -> UtilityArray<Record> {
        ext::extract_map(&self.items, keys).into()
    }
}
