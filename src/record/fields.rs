use std::rc::Rc;
use std::sync::Arc;

use super::record::Record;
use crate::value::Value;

/// Element types that expose named fields.
///
/// Key and pattern queries on [`UtilityArray`](crate::array::UtilityArray)
/// are only available when the element type implements this trait.
pub trait Fields {
    fn field(&self, key: &str) -> Option<&Value>;

    /// True when every field of `pattern` is present and strictly equal.
    #[inline]
    fn matches(&self, pattern: &Record) -> bool {
        pattern
            .iter()
            .all(|(key, expected)| self.field(key).is_some_and(|actual| actual.strict_eq(expected)))
    }

    /// A new record holding only the listed fields that are present.
    fn project<K: AsRef<str>>(&self, keys: &[K]) -> Record {
        let mut out = Record::new();
        for key in keys {
            if let Some(value) = self.field(key.as_ref()) {
                out.insert(key.as_ref(), value.clone());
            }
        }
        out
    }
}

impl Fields for Record {
    #[inline]
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    #[inline]
    fn project<K: AsRef<str>>(&self, keys: &[K]) -> Record {
        self.pick(keys)
    }
}

/// Non-object values have no fields.
impl Fields for Value {
    #[inline]
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    #[inline]
    fn field(&self, key: &str) -> Option<&Value> {
        (**self).field(key)
    }
}

impl<T: Fields + ?Sized> Fields for Arc<T> {
    #[inline]
    fn field(&self, key: &str) -> Option<&Value> {
        (**self).field(key)
    }
}

impl<T: Fields + ?Sized> Fields for Rc<T> {
    #[inline]
    fn field(&self, key: &str) -> Option<&Value> {
        (**self).field(key)
    }
}

impl<T: Fields + ?Sized> Fields for Box<T> {
    #[inline]
    fn field(&self, key: &str) -> Option<&Value> {
        (**self).field(key)
    }
}
