use super::{FieldId, FieldValue};

/// Emitted when a user commit changes a field's normalized value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// Field that changed
    pub field: FieldId,
    /// Name of the field that changed
    pub name: String,
    /// The newly committed value
    pub value: FieldValue,
}

impl ChangeEvent {
    /// Create a new change event.
    pub fn new(field: FieldId, name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            field,
            name: name.into(),
            value,
        }
    }
}
