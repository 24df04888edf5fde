//! Forms - an ordered registry of fields plus submit orchestration.
//!
//! Fields register themselves with [`Field::attach`]; the form keeps them in
//! attach order, which is the discovery order every operation here uses.
//!
//! # Example
//!
//! ```ignore
//! let form = Form::new();
//! let renderer = Arc::new(LineRenderer::new());
//!
//! Field::new("name", TextInput::new(), renderer.clone())
//!     .with_validator(rules::required("Name is required"))
//!     .attach(&form);
//!
//! match form.submit(Submission::new()).await {
//!     SubmitOutcome::Valid(data) => println!("{}", data.to_value()),
//!     SubmitOutcome::Invalid(violations) => println!("{:?}", violations),
//! }
//! ```

mod data;
mod submit;
mod violations;

use std::sync::{Arc, RwLock, Weak};

use log::{debug, error};
use uuid::Uuid;

use crate::config::FormConfig;
use crate::field::{Field, FieldId, FieldValue};
use crate::validation::ViolationSet;

use data::Reducer;

pub use data::FormData;
pub use submit::{SubmitOutcome, SubmitPhase, Submission};
pub use violations::FormViolations;

/// Unique identifier for a form instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FormId(Uuid);

impl FormId {
    /// Create a new unique form ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) struct FormInner {
    id: FormId,
    config: FormConfig,
    /// Registered fields in discovery order
    fields: RwLock<Vec<Field>>,
    phase: RwLock<SubmitPhase>,
}

/// A form: the fields attached to it and the operations over all of them.
///
/// `Form` is a cheap handle; clones share the same registry.
#[derive(Clone)]
pub struct Form {
    inner: Arc<FormInner>,
}

impl Form {
    /// Create a form with the default configuration
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create a form with a custom configuration
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            inner: Arc::new(FormInner {
                id: FormId::new(),
                config,
                fields: RwLock::new(Vec::new()),
                phase: RwLock::new(SubmitPhase::Idle),
            }),
        }
    }

    /// Get the unique ID for this form
    pub fn id(&self) -> FormId {
        self.inner.id
    }

    /// Get the configuration
    pub fn config(&self) -> &FormConfig {
        &self.inner.config
    }

    /// Get where the form is in its submit cycle
    pub fn phase(&self) -> SubmitPhase {
        self.inner
            .phase
            .read()
            .map(|guard| *guard)
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------

    /// Get the registered fields in discovery order
    pub fn fields(&self) -> Vec<Field> {
        self.inner
            .fields
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Get the registered fields named `name`
    pub fn fields_named(&self, name: &str) -> Vec<Field> {
        self.fields()
            .into_iter()
            .filter(|field| field.name() == name)
            .collect()
    }

    /// Number of registered fields
    pub fn len(&self) -> usize {
        self.inner
            .fields
            .read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Check if no field is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn register(&self, field: &Field) {
        if let Ok(mut guard) = self.inner.fields.write()
            && !guard.iter().any(|registered| registered.id() == field.id())
        {
            guard.push(field.clone());
        }
    }

    pub(crate) fn deregister(&self, id: FieldId) {
        if let Ok(mut guard) = self.inner.fields.write() {
            guard.retain(|field| field.id() != id);
        }
    }

    pub(crate) fn downgrade(&self) -> Weak<FormInner> {
        Arc::downgrade(&self.inner)
    }

    pub(crate) fn upgrade(weak: &Weak<FormInner>) -> Option<Form> {
        weak.upgrade().map(|inner| Form { inner })
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Assemble the record of every field's extracted value.
    pub fn form_data(&self) -> FormData {
        let mut reducer = Reducer::default();
        for field in self.fields() {
            reducer.push(field.name(), field.extracted_value());
        }
        reducer.finish()
    }

    /// Distribute `record` over the fields by name.
    ///
    /// Fields whose name is missing from the record are left untouched. A
    /// field rejecting its value is logged and skipped.
    pub fn set_form_data(&self, record: &FormData) {
        for field in self.fields() {
            if let Some(value) = record.get(field.name()) {
                self.assign(&field, value.clone());
            }
        }
    }

    /// Assign `value` to every field named `name`.
    pub fn put_form_value(&self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        for field in self.fields_named(name) {
            self.assign(&field, value.clone());
        }
    }

    /// Reset every field named `name`.
    pub fn clear_form_input(&self, name: &str) {
        for field in self.fields_named(name) {
            field.clear();
        }
    }

    fn assign(&self, field: &Field, value: FieldValue) {
        if let Err(e) = field.set_value(value.clone()) {
            error!(
                "{}: failed setting input '{}' / {} with value {}: {}",
                self.inner.config.name,
                field.name(),
                field.id(),
                value,
                e
            );
        }
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    /// Show `errors` on every field named `name`.
    pub fn put_field_error(&self, name: &str, errors: &[String]) {
        for field in self.fields_named(name) {
            field.show_errors(errors);
        }
    }

    /// Show the violations `resolve` returns for each field's name.
    ///
    /// Focuses the first field, in discovery order, whose violations are
    /// invalid and returns it.
    pub fn bind_errors<F>(&self, resolve: F) -> Option<Field>
    where
        F: Fn(&str) -> ViolationSet,
    {
        let mut first_invalid: Option<Field> = None;
        for field in self.fields() {
            let violations = resolve(field.name());
            if first_invalid.is_none() && violations.is_invalid() {
                first_invalid = Some(field.clone());
            }
            field.show_errors(violations.violations());
        }
        if self.inner.config.focus_first_invalid
            && let Some(field) = &first_invalid
        {
            field.focus();
        }
        first_invalid
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Check every field in discovery order, one at a time.
    ///
    /// Only invalid results are recorded. When several fields share a name
    /// the last invalid one wins.
    pub async fn check_form_validity(&self) -> FormViolations {
        let mut violations = FormViolations::new();
        for field in self.fields() {
            let result = field.check_validity().await;
            if result.is_invalid() {
                violations.insert(field.name(), result);
            }
        }
        violations
    }

    /// Validate the whole form and report the outcome.
    ///
    /// Fields flagged `no_submit` are checked but left out of the record.
    /// On success the valid callback receives the record and no errors are
    /// bound. On failure every field's error region is refreshed, the first
    /// invalid field is focused and the invalid callback receives the
    /// combined violations.
    pub async fn submit(&self, submission: Submission) -> SubmitOutcome {
        let name = &self.inner.config.name;
        self.set_phase(SubmitPhase::Validating);
        debug!("{}: submit started", name);

        let mut data = self.form_data();
        for field in self.fields() {
            if field.no_submit() {
                data.remove(field.name());
            }
        }

        let field_level = self.check_form_validity().await;
        let form_level = match submission.validator {
            Some(validator) => validator(data.clone()).await,
            None => FormViolations::new(),
        };
        let violations = field_level.combine(form_level);

        let outcome = if violations.is_empty() {
            self.set_phase(SubmitPhase::Succeeded);
            debug!("{}: submit valid", name);
            if let Some(valid) = submission.valid {
                valid(data.clone()).await;
            }
            SubmitOutcome::Valid(data)
        } else {
            self.set_phase(SubmitPhase::Failed);
            debug!("{}: submit invalid for {} field(s)", name, violations.len());
            self.bind_errors(|field_name| violations.resolve(field_name));
            if let Some(invalid) = submission.invalid {
                invalid(violations.clone()).await;
            }
            SubmitOutcome::Invalid(violations)
        };

        self.set_phase(SubmitPhase::Idle);
        outcome
    }

    fn set_phase(&self, phase: SubmitPhase) {
        if let Ok(mut guard) = self.inner.phase.write() {
            *guard = phase;
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("id", &self.inner.id)
            .field("name", &self.inner.config.name)
            .field("fields", &self.len())
            .finish()
    }
}
