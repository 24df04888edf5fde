//! Form fields - one input's value, validator and error state.

mod checkbox;
mod control;
mod error;
mod events;
mod input;
mod kind;
mod state;

pub use checkbox::{Checkbox, Switch};
pub use control::{ControlId, InputControl};
pub use error::AssignmentError;
pub use events::ChangeEvent;
pub use input::{NumberInput, TextInput};
pub use kind::FieldKind;
pub use state::{Field, FieldId};

/// The semantic value of a field.
///
/// Text fields hold strings, toggles hold booleans, numeric fields hold
/// numbers and grouped values in a form record become arrays.
pub type FieldValue = serde_json::Value;
