//! Prelude module for convenient imports.
//!
//! ```ignore
//! use formwork::prelude::*;
//! ```

pub use crate::config::FormConfig;
pub use crate::field::{
    AssignmentError, ChangeEvent, Checkbox, Field, FieldKind, FieldValue, InputControl,
    NumberInput, Switch, TextInput,
};
pub use crate::form::{Form, FormData, FormViolations, SubmitOutcome, SubmitPhase, Submission};
pub use crate::render::{ErrorRenderer, FieldView, InputView, LineRenderer};
pub use crate::validation::{Validator, ViolationSet, rules, sync_validator, validator};
