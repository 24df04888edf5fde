//! The extension point for concrete field kinds.

use super::{AssignmentError, FieldValue, InputControl};
use crate::render::InputView;

/// What makes a text box differ from a checkbox.
///
/// [`Field`](super::Field) owns the value, validator and error state and
/// defers to its kind for everything that depends on the control: how it is
/// rendered, which control takes focus, how committed values are normalized
/// and what a cleared field holds.
///
/// # Example
///
/// ```ignore
/// struct Slider {
///     control: InputControl,
/// }
///
/// impl FieldKind for Slider {
///     fn render_input(&self, name: &str, value: &FieldValue) -> InputView {
///         InputView::new(&self.control, "range", name).value(value.to_string())
///     }
///
///     fn input_control(&self) -> &InputControl {
///         &self.control
///     }
///
///     fn normalize_value(&self, value: FieldValue) -> FieldValue {
///         value
///     }
///
///     fn clear(&self) -> FieldValue {
///         FieldValue::from(0)
///     }
/// }
/// ```
pub trait FieldKind: Send + Sync + 'static {
    /// Build the view of the input control showing `value`.
    fn render_input(&self, name: &str, value: &FieldValue) -> InputView;

    /// Locate the control that takes focus and carries the error flag.
    fn input_control(&self) -> &InputControl;

    /// Normalize a value that passed validation before it is committed.
    fn normalize_value(&self, value: FieldValue) -> FieldValue;

    /// The value a cleared field resets to.
    fn clear(&self) -> FieldValue;

    /// Decide whether a commit changed the value.
    fn is_changed(&self, new: &FieldValue, old: &FieldValue) -> bool {
        new != old
    }

    /// The value this field contributes to a form record.
    fn extract(&self, value: &FieldValue) -> FieldValue {
        value.clone()
    }

    /// Convert a programmatically assigned value into one this kind holds.
    fn coerce(&self, name: &str, value: FieldValue) -> Result<FieldValue, AssignmentError> {
        let _ = name;
        Ok(value)
    }
}
