//! Form records and multi-value reduction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::field::FieldValue;

/// The record assembled from a form's fields, keyed by field name.
///
/// Keys keep discovery order. A name shared by two or more fields maps to
/// an array of their values; a name seen once maps to its plain value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(Map<String, FieldValue>);

impl FormData {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON object; anything else yields `None`.
    pub fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Get the value recorded for `name`
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Check if `name` is recorded
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Record a value, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Remove `name`, keeping the order of the remaining keys
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.0.shift_remove(name)
    }

    /// Number of recorded names
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over names and values in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    /// Convert into a JSON object value
    pub fn to_value(&self) -> FieldValue {
        FieldValue::Object(self.0.clone())
    }

    /// Take the underlying map
    pub fn into_map(self) -> Map<String, FieldValue> {
        self.0
    }
}

impl From<Map<String, FieldValue>> for FormData {
    fn from(map: Map<String, FieldValue>) -> Self {
        Self(map)
    }
}

impl From<FormData> for FieldValue {
    fn from(data: FormData) -> Self {
        FieldValue::Object(data.0)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Folds `(name, value)` pairs into a [`FormData`].
///
/// A name is scalar until its second occurrence. At that point the first
/// value is wrapped into a one-element array and every later value is
/// appended.
#[derive(Debug, Default)]
pub(crate) struct Reducer {
    /// The record so far; its keys are the names seen, in discovery order
    data: Map<String, FieldValue>,
    /// Names already promoted to arrays
    promoted: HashSet<String>,
}

impl Reducer {
    pub(crate) fn push(&mut self, name: &str, value: FieldValue) {
        let Some(first) = self.data.get_mut(name) else {
            self.data.insert(name.to_string(), value);
            return;
        };
        if !self.promoted.contains(name) {
            self.promoted.insert(name.to_string());
            *first = FieldValue::Array(vec![first.take()]);
        }
        if let FieldValue::Array(values) = first {
            values.push(value);
        }
    }

    pub(crate) fn finish(self) -> FormData {
        FormData(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reduce(pairs: &[(&str, FieldValue)]) -> FieldValue {
        let mut reducer = Reducer::default();
        for (name, value) in pairs {
            reducer.push(name, value.clone());
        }
        reducer.finish().to_value()
    }

    #[test]
    fn test_array_valued_first_occurrence_is_wrapped() {
        let record = reduce(&[("tags", json!(["a", "b"])), ("tags", json!("c"))]);
        assert_eq!(record, json!({ "tags": [["a", "b"], "c"] }));
    }

    #[test]
    fn test_lone_array_value_stays_as_is() {
        let record = reduce(&[("tags", json!(["a", "b"]))]);
        assert_eq!(record, json!({ "tags": ["a", "b"] }));
    }
}
