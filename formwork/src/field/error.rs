use thiserror::Error;

use super::FieldValue;

/// Errors raised when a value cannot be assigned to a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The value's shape does not fit the field kind.
    #[error("field '{field}' expects {expected}, got {found}")]
    TypeMismatch {
        /// Name of the field.
        field: String,
        /// What the field kind accepts.
        expected: &'static str,
        /// The shape that was offered.
        found: &'static str,
    },

    /// Text offered to a numeric field did not parse.
    #[error("field '{field}' cannot parse '{value}' as a number")]
    Unparsable {
        /// Name of the field.
        field: String,
        /// The rejected text.
        value: String,
    },
}

impl AssignmentError {
    pub(crate) fn mismatch(field: &str, expected: &'static str, found: &FieldValue) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            expected,
            found: shape(found),
        }
    }
}

fn shape(value: &FieldValue) -> &'static str {
    match value {
        FieldValue::Null => "null",
        FieldValue::Bool(_) => "a boolean",
        FieldValue::Number(_) => "a number",
        FieldValue::String(_) => "text",
        FieldValue::Array(_) => "an array",
        FieldValue::Object(_) => "an object",
    }
}
