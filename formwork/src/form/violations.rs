use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::validation::ViolationSet;

/// Violations keyed by field name.
///
/// Names keep insertion order. Sets are stored as given, so a name mapped to
/// a valid set still counts as an entry.
#[derive(Debug, Clone, Default)]
pub struct FormViolations {
    entries: Vec<(String, ViolationSet)>,
}

impl FormViolations {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `violations` for `name`, replacing any previous entry in place.
    pub fn insert(&mut self, name: impl Into<String>, violations: impl Into<ViolationSet>) {
        let name = name.into();
        let violations = violations.into();
        match self.position(&name) {
            Some(index) => self.entries[index].1 = violations,
            None => self.entries.push((name, violations)),
        }
    }

    /// Get the violations recorded for `name`
    pub fn get(&self, name: &str) -> Option<&ViolationSet> {
        self.position(name).map(|index| &self.entries[index].1)
    }

    /// Get the violations for `name`, or the canonical valid set
    pub fn resolve(&self, name: &str) -> ViolationSet {
        self.get(name).cloned().unwrap_or_default()
    }

    /// Check if `name` has an entry
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over names and their violations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ViolationSet)> {
        self.entries.iter().map(|(name, set)| (name, set))
    }

    /// Merge form-level violations onto these field-level ones.
    ///
    /// A name present in both maps gets the form-level messages first,
    /// followed by the field-level ones, and keeps its field-level position.
    /// Names present in one map keep their set unchanged; form-level only
    /// names are appended in their own order.
    pub fn combine(mut self, form_level: FormViolations) -> FormViolations {
        for (name, form_set) in form_level.entries {
            match self.position(&name) {
                Some(index) => {
                    let merged = self.entries[index].1.combine(&form_set);
                    self.entries[index].1 = merged;
                }
                None => self.entries.push((name, form_set)),
            }
        }
        self
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(entry, _)| entry == name)
    }
}

/// Two maps are equal when they hold the same names with equal sets,
/// regardless of order.
impl PartialEq for FormViolations {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, set)| other.get(name) == Some(set))
    }
}

impl Eq for FormViolations {}

impl<K: Into<String>, V: Into<ViolationSet>> FromIterator<(K, V)> for FormViolations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut violations = Self::new();
        for (name, set) in iter {
            violations.insert(name, set);
        }
        violations
    }
}

impl IntoIterator for FormViolations {
    type Item = (String, ViolationSet);
    type IntoIter = std::vec::IntoIter<(String, ViolationSet)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for FormViolations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for FormViolations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ViolationsVisitor;

        impl<'de> Visitor<'de> for ViolationsVisitor {
            type Value = FormViolations;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to violation lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut violations = FormViolations::new();
                while let Some((name, set)) = map.next_entry::<String, ViolationSet>()? {
                    violations.insert(name, set);
                }
                Ok(violations)
            }
        }

        deserializer.deserialize_map(ViolationsVisitor)
    }
}
