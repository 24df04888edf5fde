//! Checkbox and switch kinds.
//!
//! Both hold a boolean. A [`Checkbox`] is a choice control: it carries an
//! option value and contributes that value to the form record while checked,
//! and its plain `false` state otherwise. Several checkboxes sharing a name
//! fold into an array with one entry per checkbox. A [`Switch`] is a toggle
//! control: it always contributes its checked state.

use super::input::display;
use super::{AssignmentError, FieldKind, FieldValue, InputControl};
use crate::render::InputView;

/// A checkbox carrying an option value.
///
/// # Example
///
/// ```ignore
/// for color in ["red", "green", "blue"] {
///     Field::new("color", Checkbox::new(color), renderer.clone()).attach(&form);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Checkbox {
    control: InputControl,
    /// Value submitted while checked
    option: String,
}

impl Checkbox {
    /// Create a checkbox submitting `option` when checked
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            control: InputControl::new(),
            option: option.into(),
        }
    }

    /// Get the option value
    pub fn option(&self) -> &str {
        &self.option
    }
}

impl FieldKind for Checkbox {
    fn render_input(&self, name: &str, value: &FieldValue) -> InputView {
        InputView::new(&self.control, "checkbox", name)
            .value(self.option.clone())
            .checked(is_checked(value))
    }

    fn input_control(&self) -> &InputControl {
        &self.control
    }

    fn normalize_value(&self, value: FieldValue) -> FieldValue {
        value
    }

    fn clear(&self) -> FieldValue {
        FieldValue::Bool(false)
    }

    fn extract(&self, value: &FieldValue) -> FieldValue {
        if is_checked(value) {
            FieldValue::String(self.option.clone())
        } else {
            value.clone()
        }
    }

    /// Accepts a boolean, this checkbox's option, or an array of options.
    fn coerce(&self, name: &str, value: FieldValue) -> Result<FieldValue, AssignmentError> {
        match &value {
            FieldValue::Bool(_) => Ok(value),
            FieldValue::Null => Ok(self.clear()),
            FieldValue::String(s) => Ok(FieldValue::Bool(*s == self.option)),
            FieldValue::Array(items) => Ok(FieldValue::Bool(
                items.iter().any(|item| display(item) == self.option),
            )),
            _ => Err(AssignmentError::mismatch(
                name,
                "a boolean or option value",
                &value,
            )),
        }
    }
}

/// An on/off switch.
#[derive(Debug, Clone, Default)]
pub struct Switch {
    control: InputControl,
}

impl Switch {
    /// Create a switch
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldKind for Switch {
    fn render_input(&self, name: &str, value: &FieldValue) -> InputView {
        InputView::new(&self.control, "switch", name).checked(is_checked(value))
    }

    fn input_control(&self) -> &InputControl {
        &self.control
    }

    fn normalize_value(&self, value: FieldValue) -> FieldValue {
        value
    }

    fn clear(&self) -> FieldValue {
        FieldValue::Bool(false)
    }

    fn extract(&self, value: &FieldValue) -> FieldValue {
        FieldValue::Bool(is_checked(value))
    }

    fn coerce(&self, name: &str, value: FieldValue) -> Result<FieldValue, AssignmentError> {
        match value {
            FieldValue::Bool(_) => Ok(value),
            FieldValue::Null => Ok(self.clear()),
            _ => Err(AssignmentError::mismatch(name, "a boolean", &value)),
        }
    }
}

fn is_checked(value: &FieldValue) -> bool {
    value.as_bool().unwrap_or(false)
}
