use serde::ser::{Serialize, SerializeMap, Serializer};
use smol_str::SmolStr;
use std::collections::BTreeMap;

use super::fields::Fields;
use crate::error::ArrayError;
use crate::value::Value;

pub type FastMap<K, V> = BTreeMap<K, V>;

// ─── Record ─────────────────────────────────────────────────────────────────

/// A field-name to value mapping. Fields iterate in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: FastMap<SmolStr, Value>,
}

impl Record {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    /// Set a field, returning the value it previously held.
    pub fn insert(&mut self, key: impl Into<SmolStr>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &Value)> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(SmolStr::as_str)
    }

    /// Copy out only the listed fields. Keys absent from this record are skipped.
    pub fn pick<K: AsRef<str>>(&self, keys: &[K]) -> Record {
        keys.iter()
            .filter_map(|key| {
                let (name, value) = self.fields.get_key_value(key.as_ref())?;
                Some((name.clone(), value.clone()))
            })
            .collect()
    }

    /// True when every field of `pattern` is present here and strictly equal.
    /// An empty pattern matches any record.
    #[inline]
    pub fn matches(&self, pattern: &Record) -> bool {
        Fields::matches(self, pattern)
    }
}

impl FromIterator<(SmolStr, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (SmolStr, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (SmolStr, Value);
    type IntoIter = std::collections::btree_map::IntoIter<SmolStr, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl From<FastMap<SmolStr, Value>> for Record {
    fn from(fields: FastMap<SmolStr, Value>) -> Self {
        Self { fields }
    }
}

// ─── Serialize ──────────────────────────────────────────────────────────────

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            m.serialize_entry(k.as_str(), v)?;
        }
        m.end()
    }
}

// ─── From serde_json::Value ─────────────────────────────────────────────────

impl TryFrom<serde_json::Value> for Record {
    type Error = ArrayError;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        match v {
            serde_json::Value::Object(obj) => Ok(obj
                .into_iter()
                .map(|(k, v)| (SmolStr::from(k), Value::from(v)))
                .collect()),
            _ => Err(ArrayError::NotAnObject),
        }
    }
}

impl From<Record> for serde_json::Value {
    fn from(record: Record) -> Self {
        serde_json::Value::Object(
            record
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        )
    }
}

/// Build a [`Record`] from `key => value` pairs.
///
/// ```
/// use utility_array::record;
///
/// let user = record! { "id" => 1i64, "name" => "Ada" };
/// assert_eq!(user.get("name").and_then(|v| v.as_str()), Some("Ada"));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::record::Record::new()
    };
    ($($key:expr => $val:expr),+ $(,)?) => {{
        let mut record = $crate::record::Record::new();
        $(
            record.insert($key, $val);
        )+
        record
    }};
}
