//! Submission handlers and outcomes.

use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{FormData, FormViolations};

type ValidHandler = Box<dyn FnOnce(FormData) -> BoxFuture<'static, ()> + Send>;
type InvalidHandler = Box<dyn FnOnce(FormViolations) -> BoxFuture<'static, ()> + Send>;
type FormValidator = Box<dyn FnOnce(FormData) -> BoxFuture<'static, FormViolations> + Send>;

/// Callbacks and cross-field validator for one [`Form::submit`](super::Form::submit) call.
///
/// # Example
///
/// ```ignore
/// let outcome = form
///     .submit(
///         Submission::new()
///             .validator(|data| async move {
///                 let mut violations = FormViolations::new();
///                 if data.get("password") != data.get("confirmation") {
///                     violations.insert("confirmation", "Passwords do not match");
///                 }
///                 violations
///             })
///             .on_valid(|data| async move { save(data).await })
///             .on_invalid(|violations| async move { log::warn!("{:?}", violations) }),
///     )
///     .await;
/// ```
#[derive(Default)]
pub struct Submission {
    pub(super) valid: Option<ValidHandler>,
    pub(super) invalid: Option<InvalidHandler>,
    pub(super) validator: Option<FormValidator>,
}

impl Submission {
    /// Create a submission without callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the submitted record when nothing is invalid.
    pub fn on_valid<F, Fut>(mut self, f: F) -> Self
    where
        F: FnOnce(FormData) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.valid = Some(Box::new(move |data| f(data).boxed()));
        self
    }

    /// Called with the combined violations after they were bound to fields.
    pub fn on_invalid<F, Fut>(mut self, f: F) -> Self
    where
        F: FnOnce(FormViolations) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.invalid = Some(Box::new(move |violations| f(violations).boxed()));
        self
    }

    /// Cross-field check run over the submitted record.
    pub fn validator<F, Fut>(mut self, f: F) -> Self
    where
        F: FnOnce(FormData) -> Fut + Send + 'static,
        Fut: Future<Output = FormViolations> + Send + 'static,
    {
        self.validator = Some(Box::new(move |data| f(data).boxed()));
        self
    }
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("valid", &self.valid.is_some())
            .field("invalid", &self.invalid.is_some())
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Result of a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every check passed; carries the submitted record.
    Valid(FormData),
    /// Some checks failed; carries the combined violations.
    Invalid(FormViolations),
}

impl SubmitOutcome {
    /// Check if the submit succeeded
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Check if the submit failed
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the submitted record, if the submit succeeded
    pub fn data(&self) -> Option<&FormData> {
        match self {
            Self::Valid(data) => Some(data),
            Self::Invalid(_) => None,
        }
    }

    /// Get the combined violations, if the submit failed
    pub fn violations(&self) -> Option<&FormViolations> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(violations) => Some(violations),
        }
    }
}

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// No submit in flight.
    #[default]
    Idle,
    /// Field and cross-field checks are running.
    Validating,
    /// Checks passed; the valid callback is running.
    Succeeded,
    /// Checks failed; errors are bound and the invalid callback is running.
    Failed,
}
