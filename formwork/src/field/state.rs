//! Field state and the validate-and-commit flow.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use log::{debug, trace};
use tokio::sync::broadcast;

use super::{AssignmentError, ChangeEvent, FieldKind, FieldValue, InputControl};
use crate::form::{Form, FormInner};
use crate::render::{ErrorRenderer, ErrorView, FieldView, LabelView, RenderTarget};
use crate::validation::{Validator, ViolationSet};

/// Buffered change events per field before slow subscribers start lagging
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Unique identifier for a Field instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Mutable state for a Field
#[derive(Default)]
struct FieldState {
    /// Current committed value
    value: FieldValue,
    /// Label text
    label: String,
    /// Annotation text
    annotation: String,
    /// Exclude this field's value from submitted records
    no_submit: bool,
    /// Async check run on commit and on form-wide checks
    validator: Option<Validator>,
    /// Messages currently shown in the error region
    errors: Vec<String>,
    /// Owning form, set while attached
    form: Weak<FormInner>,
}

struct FieldInner {
    id: FieldId,
    name: String,
    kind: Box<dyn FieldKind>,
    renderer: Arc<dyn ErrorRenderer>,
    changes: broadcast::Sender<ChangeEvent>,
    state: RwLock<FieldState>,
}

/// One input of a form.
///
/// `Field` is a cheap handle; clones share the same state. Several fields
/// may share a name to model checkbox groups. The field kind decides how
/// the control looks and how values are normalized; the field itself runs
/// the validator and keeps the error state in step with what was last
/// shown.
///
/// # Example
///
/// ```ignore
/// let renderer = Arc::new(LineRenderer::new());
/// let email = Field::new("email", TextInput::new(), renderer.clone())
///     .with_label("Email")
///     .with_validator(rules::email("Please enter a valid email"));
/// email.attach(&form);
///
/// // On user input
/// let violations = email.validate("jos@example.com".into()).await;
/// assert!(violations.is_valid());
/// ```
#[derive(Clone)]
pub struct Field {
    inner: Arc<FieldInner>,
}

impl Field {
    /// Create a field holding the kind's cleared value.
    pub fn new(
        name: impl Into<String>,
        kind: impl FieldKind,
        renderer: Arc<dyn ErrorRenderer>,
    ) -> Self {
        let value = kind.clear();
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(FieldInner {
                id: FieldId::new(),
                name: name.into(),
                kind: Box::new(kind),
                renderer,
                changes,
                state: RwLock::new(FieldState {
                    value,
                    ..Default::default()
                }),
            }),
        }
    }

    /// Set the label text
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Set the annotation text
    pub fn with_annotation(self, annotation: impl Into<String>) -> Self {
        self.set_annotation(annotation);
        self
    }

    /// Set the validator
    pub fn with_validator(self, validator: Validator) -> Self {
        self.set_validator(Some(validator));
        self
    }

    /// Exclude this field from submitted records
    pub fn with_no_submit(self) -> Self {
        self.set_no_submit(true);
        self
    }

    /// Assign an initial value
    pub fn with_value(self, value: impl Into<FieldValue>) -> Result<Self, AssignmentError> {
        self.set_value(value)?;
        Ok(self)
    }

    /// Get the unique ID for this field
    pub fn id(&self) -> FieldId {
        self.inner.id
    }

    /// Get the field name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the field kind
    pub fn kind(&self) -> &dyn FieldKind {
        self.inner.kind.as_ref()
    }

    /// Get the input control located by the field kind
    pub fn input_control(&self) -> &InputControl {
        self.inner.kind.input_control()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current value
    pub fn value(&self) -> FieldValue {
        self.read(|state| state.value.clone())
    }

    /// Get the value this field contributes to a form record
    pub fn extracted_value(&self) -> FieldValue {
        self.inner.kind.extract(&self.value())
    }

    /// Get the label text
    pub fn label(&self) -> String {
        self.read(|state| state.label.clone())
    }

    /// Get the annotation text
    pub fn annotation(&self) -> String {
        self.read(|state| state.annotation.clone())
    }

    /// Check if this field is excluded from submitted records
    pub fn no_submit(&self) -> bool {
        self.read(|state| state.no_submit)
    }

    /// Check if a validator is configured
    pub fn has_validator(&self) -> bool {
        self.read(|state| state.validator.is_some())
    }

    /// Get the messages currently shown
    pub fn errors(&self) -> Vec<String> {
        self.read(|state| state.errors.clone())
    }

    /// Check if the field is marked as erroneous
    pub fn has_error(&self) -> bool {
        self.read(|state| !state.errors.is_empty())
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Assign a value programmatically.
    ///
    /// The value goes through the kind's conversion; no validation runs and
    /// no change event is emitted.
    pub fn set_value(&self, value: impl Into<FieldValue>) -> Result<(), AssignmentError> {
        let value = self.inner.kind.coerce(self.name(), value.into())?;
        self.store_value(value);
        Ok(())
    }

    /// Set the label text
    pub fn set_label(&self, label: impl Into<String>) {
        self.write(|state| state.label = label.into());
    }

    /// Set the annotation text
    pub fn set_annotation(&self, annotation: impl Into<String>) {
        self.write(|state| state.annotation = annotation.into());
    }

    /// Set or remove the validator
    pub fn set_validator(&self, validator: Option<Validator>) {
        self.write(|state| state.validator = validator);
    }

    /// Include or exclude this field from submitted records
    pub fn set_no_submit(&self, no_submit: bool) {
        self.write(|state| state.no_submit = no_submit);
    }

    /// Reset the value to the kind's cleared value
    pub fn clear(&self) {
        self.store_value(self.inner.kind.clear());
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Run the validator against the current value without side effects.
    pub async fn check_validity(&self) -> ViolationSet {
        self.run_validator(self.value()).await
    }

    /// Validate user input and commit it.
    ///
    /// Valid input is normalized, committed and clears the error region; a
    /// change event is emitted only when the normalized value differs from
    /// the previous one. Invalid input is committed as typed and every
    /// message is shown.
    pub async fn validate(&self, input: FieldValue) -> ViolationSet {
        let violations = self.run_validator(input.clone()).await;
        if violations.is_valid() {
            let value = self.inner.kind.normalize_value(input);
            let previous = self.value();
            if self.inner.kind.is_changed(&value, &previous) {
                self.emit_change(value.clone());
            }
            self.store_value(value);
            self.show_errors(&[]);
        } else {
            self.store_value(input);
            self.show_errors(violations.violations());
        }
        violations
    }

    /// Show `messages` in the error region and flag the field accordingly.
    ///
    /// An empty slice clears the region and the flag.
    pub fn show_errors(&self, messages: &[String]) {
        let invalid = !messages.is_empty();
        self.inner.kind.input_control().set_error(invalid);
        self.write(|state| state.errors = messages.to_vec());
        self.inner.renderer.render(
            RenderTarget {
                field: self.id(),
                name: self.name(),
            },
            messages,
        );
    }

    /// Request focus on the input control
    pub fn focus(&self) {
        self.inner.kind.input_control().focus();
    }

    async fn run_validator(&self, value: FieldValue) -> ViolationSet {
        let validator = self.read(|state| state.validator.clone());
        match validator {
            Some(validator) => {
                trace!("validating field '{}'", self.name());
                validator(value).await
            }
            None => ViolationSet::empty(),
        }
    }

    // -------------------------------------------------------------------------
    // Change notification
    // -------------------------------------------------------------------------

    /// Subscribe to change events emitted by [`Field::validate`].
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.inner.changes.subscribe()
    }

    fn emit_change(&self, value: FieldValue) {
        // No receivers is not an error
        let _ = self
            .inner
            .changes
            .send(ChangeEvent::new(self.id(), self.name(), value));
    }

    // -------------------------------------------------------------------------
    // Form membership
    // -------------------------------------------------------------------------

    /// Register this field with `form`, leaving any previous form.
    pub fn attach(&self, form: &Form) {
        self.detach();
        form.register(self);
        self.write(|state| state.form = form.downgrade());
        debug!("field '{}' ({}) attached to form {}", self.name(), self.id(), form.id());
    }

    /// Deregister this field from its form.
    pub fn detach(&self) {
        let previous = self
            .inner
            .state
            .write()
            .map(|mut guard| std::mem::take(&mut guard.form))
            .unwrap_or_default();
        if let Some(form) = Form::upgrade(&previous) {
            form.deregister(self.id());
            debug!("field '{}' ({}) detached from form {}", self.name(), self.id(), form.id());
        }
    }

    /// Check if this field is registered as a form input
    pub fn is_form_input(&self) -> bool {
        self.form().is_some()
    }

    /// Get the owning form
    pub fn form(&self) -> Option<Form> {
        self.inner
            .state
            .read()
            .ok()
            .and_then(|guard| Form::upgrade(&guard.form))
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the view model for the host.
    pub fn render(&self) -> FieldView {
        let (value, label, annotation, errors) = self.read(|state| {
            (
                state.value.clone(),
                state.label.clone(),
                state.annotation.clone(),
                state.errors.clone(),
            )
        });
        FieldView {
            label: LabelView {
                target: self.name().to_string(),
                text: label,
            },
            annotation: (!annotation.is_empty()).then_some(annotation),
            input: self.inner.kind.render_input(self.name(), &value),
            error: ErrorView {
                flagged: !errors.is_empty(),
                messages: errors,
            },
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn store_value(&self, value: FieldValue) {
        self.write(|state| state.value = value);
    }

    fn read<T: Default>(&self, f: impl FnOnce(&FieldState) -> T) -> T {
        self.inner
            .state
            .read()
            .map(|guard| f(&guard))
            .unwrap_or_default()
    }

    fn write(&self, f: impl FnOnce(&mut FieldState)) {
        if let Ok(mut guard) = self.inner.state.write() {
            f(&mut guard);
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Field {}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("value", &self.value())
            .field("errors", &self.errors())
            .finish()
    }
}
