//! Text and numeric input kinds.

use super::{AssignmentError, FieldKind, FieldValue, InputControl};
use crate::render::InputView;

/// A single-line text input.
///
/// # Example
///
/// ```ignore
/// let name = Field::new("name", TextInput::new(), renderer.clone())
///     .with_label("Name")
///     .with_validator(rules::required("Name is required"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    control: InputControl,
    /// Strip surrounding whitespace from committed values
    trim: bool,
}

impl TextInput {
    /// Create a text input that commits exactly what was typed
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input that trims committed values
    pub fn trimmed() -> Self {
        Self {
            trim: true,
            ..Self::default()
        }
    }
}

impl FieldKind for TextInput {
    fn render_input(&self, name: &str, value: &FieldValue) -> InputView {
        InputView::new(&self.control, "text", name).value(display(value))
    }

    fn input_control(&self) -> &InputControl {
        &self.control
    }

    fn normalize_value(&self, value: FieldValue) -> FieldValue {
        match value {
            FieldValue::String(s) if self.trim => FieldValue::String(s.trim().to_string()),
            other => other,
        }
    }

    fn clear(&self) -> FieldValue {
        FieldValue::String(String::new())
    }

    fn coerce(&self, name: &str, value: FieldValue) -> Result<FieldValue, AssignmentError> {
        match value {
            FieldValue::String(_) => Ok(value),
            FieldValue::Null => Ok(self.clear()),
            FieldValue::Bool(_) | FieldValue::Number(_) => Ok(FieldValue::String(value.to_string())),
            FieldValue::Array(_) | FieldValue::Object(_) => {
                Err(AssignmentError::mismatch(name, "text", &value))
            }
        }
    }
}

/// A numeric input.
///
/// Users type text; values that pass validation are committed as numbers.
/// A cleared numeric input holds `null`.
#[derive(Debug, Clone, Default)]
pub struct NumberInput {
    control: InputControl,
}

impl NumberInput {
    /// Create a numeric input
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldKind for NumberInput {
    fn render_input(&self, name: &str, value: &FieldValue) -> InputView {
        InputView::new(&self.control, "number", name).value(display(value))
    }

    fn input_control(&self) -> &InputControl {
        &self.control
    }

    fn normalize_value(&self, value: FieldValue) -> FieldValue {
        match &value {
            FieldValue::String(s) => parse_number(s).unwrap_or(value),
            _ => value,
        }
    }

    fn clear(&self) -> FieldValue {
        FieldValue::Null
    }

    fn coerce(&self, name: &str, value: FieldValue) -> Result<FieldValue, AssignmentError> {
        match &value {
            FieldValue::Number(_) | FieldValue::Null => Ok(value),
            FieldValue::String(s) => parse_number(s).ok_or_else(|| AssignmentError::Unparsable {
                field: name.to_string(),
                value: s.clone(),
            }),
            _ => Err(AssignmentError::mismatch(name, "a number", &value)),
        }
    }
}

/// Parse text into a number value; blank text becomes `null`.
fn parse_number(text: &str) -> Option<FieldValue> {
    let text = text.trim();
    if text.is_empty() {
        return Some(FieldValue::Null);
    }
    if let Ok(int) = text.parse::<i64>() {
        return Some(FieldValue::from(int));
    }
    text.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(FieldValue::Number)
}

pub(super) fn display(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => String::new(),
        FieldValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
