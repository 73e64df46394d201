use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Any JSON value: tables carry nested arrays, images carry float widths,
/// unset fields arrive as `null`.
pub type PropertyValue = serde_json::Value;

/// Open key-value bag for type-specific block data (quote author, alignment, ...).
///
/// The store never looks inside it. A block update replaces the whole bag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    inner: BTreeMap<String, PropertyValue>,
}

impl Properties {
    pub fn new() -> Self {
        Properties {
            inner: BTreeMap::new(),
        }
    }

    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_string(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), PropertyValue::String(value.into()));
    }

    pub fn insert_number(&mut self, key: impl Into<String>, value: i64) {
        self.inner.insert(key.into(), PropertyValue::from(value));
    }

    pub fn insert_bool(&mut self, key: impl Into<String>, value: bool) {
        self.inner.insert(key.into(), PropertyValue::Bool(value));
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.inner.get(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.inner.iter()
    }
}
