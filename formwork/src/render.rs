//! What the engine hands to the host rendering surface.
//!
//! Fields render into a plain [`FieldView`] (label, annotation, input and
//! error regions) and push their error messages through an explicit
//! [`ErrorRenderer`] supplied at construction.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::field::{ControlId, FieldId, InputControl};

/// Identifies the field whose error region is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTarget<'a> {
    /// Field the messages belong to
    pub field: FieldId,
    /// Name of that field
    pub name: &'a str,
}

/// Paints error messages into a field's error region.
///
/// Called with an empty slice to clear the region. Implementations must be
/// idempotent: painting the same messages twice leaves the same output.
pub trait ErrorRenderer: Send + Sync {
    /// Replace the contents of `target`'s error region with `messages`.
    fn render(&self, target: RenderTarget<'_>, messages: &[String]);
}

/// In-memory renderer writing each message followed by a line separator.
#[derive(Debug)]
pub struct LineRenderer {
    separator: String,
    regions: RwLock<HashMap<FieldId, String>>,
}

impl LineRenderer {
    /// Create a renderer separating messages with `"\n"`.
    pub fn new() -> Self {
        Self::with_separator("\n")
    }

    /// Create a renderer with a custom line separator.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            regions: RwLock::new(HashMap::new()),
        }
    }

    /// The rendered contents of a field's error region.
    pub fn region(&self, field: FieldId) -> String {
        self.regions
            .read()
            .ok()
            .and_then(|guard| guard.get(&field).cloned())
            .unwrap_or_default()
    }
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorRenderer for LineRenderer {
    fn render(&self, target: RenderTarget<'_>, messages: &[String]) {
        let text: String = messages
            .iter()
            .map(|message| format!("{}{}", message, self.separator))
            .collect();
        if let Ok(mut guard) = self.regions.write() {
            guard.insert(target.field, text);
        }
    }
}

/// The input control region of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    /// Control this view belongs to
    pub control: ControlId,
    /// Control type, e.g. `"text"` or `"checkbox"`
    pub control_type: &'static str,
    /// Name attribute of the control
    pub name: String,
    /// Displayed value
    pub value: String,
    /// Checked state, for toggle and choice controls
    pub checked: Option<bool>,
    /// Whether the control is marked as erroneous
    pub error: bool,
}

impl InputView {
    /// Start a view of `control`.
    pub fn new(control: &InputControl, control_type: &'static str, name: impl Into<String>) -> Self {
        Self {
            control: control.id(),
            control_type,
            name: name.into(),
            value: String::new(),
            checked: None,
            error: control.has_error(),
        }
    }

    /// Set the displayed value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the checked state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}

/// Everything a host needs to paint one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Label text, tied to the field name
    pub label: LabelView,
    /// Annotation shown under the label; omitted when empty
    pub annotation: Option<String>,
    /// The input control
    pub input: InputView,
    /// The error region
    pub error: ErrorView,
}

/// Label region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    /// Name of the field the label is for
    pub target: String,
    /// Label text
    pub text: String,
}

/// Error region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorView {
    /// Whether the region is marked as erroneous
    pub flagged: bool,
    /// The messages currently shown
    pub messages: Vec<String>,
}
