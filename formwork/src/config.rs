//! Form configuration types.

/// Per-form configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Display name used in log output.
    pub name: String,

    /// Move focus to the first invalid field when errors are bound.
    pub focus_first_invalid: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name: "form".to_string(),
            focus_first_invalid: true,
        }
    }
}

impl FormConfig {
    /// Create a new config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable focusing the first invalid field.
    pub fn focus_first_invalid(mut self, focus: bool) -> Self {
        self.focus_first_invalid = focus;
        self
    }
}
