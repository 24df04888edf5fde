//! Ordered collections of constraint violations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The messages produced by one validation run.
///
/// An empty set is valid; a set holding one or more messages is invalid.
/// Sets are never mutated once built. [`ViolationSet::combine`] and friends
/// always return a new set.
///
/// Messages are `String`s unless a host picks its own message type. Fields
/// and forms carry string sets; [`ViolationSet::to_strings`] renders any
/// displayable message type into one.
///
/// # Example
///
/// ```
/// use formwork::validation::ViolationSet;
///
/// let field = ViolationSet::single("required");
/// let form = ViolationSet::single("must match confirmation");
///
/// let combined = field.combine(&form);
/// assert_eq!(combined.violations(), ["must match confirmation", "required"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationSet<M = String> {
    violations: Vec<M>,
}

impl ViolationSet<String> {
    /// The canonical valid set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A set holding a single message.
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            violations: vec![message.into()],
        }
    }

    /// A set holding `messages` in iteration order.
    pub fn from_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            violations: messages.into_iter().map(Into::into).collect(),
        }
    }
}

impl<M> ViolationSet<M> {
    /// True when the set holds no messages.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// True when the set holds at least one message.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Same as [`ViolationSet::is_valid`].
    pub fn is_empty(&self) -> bool {
        self.is_valid()
    }

    /// The messages in order.
    pub fn violations(&self) -> &[M] {
        &self.violations
    }

    /// Iterate over the messages in order.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.violations.iter()
    }

    /// Build a new set whose messages are `other`'s followed by this set's.
    ///
    /// Form-level violations are combined onto field-level ones with this,
    /// so whatever is passed as `other` renders first.
    pub fn combine(&self, other: &ViolationSet<M>) -> ViolationSet<M>
    where
        M: Clone,
    {
        let mut violations = Vec::with_capacity(other.len() + self.len());
        violations.extend(other.violations.iter().cloned());
        violations.extend(self.violations.iter().cloned());
        ViolationSet { violations }
    }

    /// Derive one value per message.
    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&M) -> T,
    {
        self.violations.iter().map(f).collect()
    }

    /// Visit each message in order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&M),
    {
        self.violations.iter().for_each(f)
    }

    /// Render every message to text, keeping the order.
    pub fn to_strings(&self) -> ViolationSet
    where
        M: fmt::Display,
    {
        ViolationSet {
            violations: self.map(ToString::to_string),
        }
    }

    /// Take the messages out of the set.
    pub fn into_violations(self) -> Vec<M> {
        self.violations
    }
}

impl<M> Default for ViolationSet<M> {
    fn default() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl<M> From<Vec<M>> for ViolationSet<M> {
    fn from(violations: Vec<M>) -> Self {
        Self { violations }
    }
}

impl From<&str> for ViolationSet {
    fn from(message: &str) -> Self {
        Self::single(message)
    }
}

impl From<String> for ViolationSet {
    fn from(message: String) -> Self {
        Self::single(message)
    }
}

impl<M> FromIterator<M> for ViolationSet<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl<'a, M> IntoIterator for &'a ViolationSet<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl<M> IntoIterator for ViolationSet<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<M: fmt::Display> fmt::Display for ViolationSet<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, message) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", message)?;
        }
        Ok(())
    }
}
