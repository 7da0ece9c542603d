use tracing::{debug, trace};

use super::UtilityArray;
use crate::ext::ArrayExt;

impl<T> UtilityArray<T> {
    // ════════════════════════════════════════════════════════════════════════
    // Last element
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last_value()
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Overwrite the final slot.
    ///
    /// Writing `None`, or writing into an empty array, does nothing and
    /// returns `false`. The length never changes.
    pub fn set_last(&mut self, value: Option<T>) -> bool {
        let written = self.items.set_last(value);
        if !written {
            trace!(len = self.items.len(), "set_last ignored");
        }
        written
    }

    // ════════════════════════════════════════════════════════════════════════
    // Index mutation
    // ════════════════════════════════════════════════════════════════════════

    /// Swap in `value` at `index` and return what was there.
    /// Out-of-range indices leave the array untouched and return `None`.
    pub fn replace_at(&mut self, index: usize, value: T) -> Option<T> {
        let replaced = self.items.replace_at(index, value);
        match replaced {
            Some(_) => debug!(index, "replace_at"),
            None => trace!(index, len = self.items.len(), "replace_at out of range"),
        }
        replaced
    }

    /// Remove the element at `index`, shifting the tail left.
    /// Out-of-range indices leave the array untouched and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let removed = self.items.remove_at(index);
        match removed {
            Some(_) => debug!(index, "remove_at"),
            None => trace!(index, len = self.items.len(), "remove_at out of range"),
        }
        removed
    }
}
