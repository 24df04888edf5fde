//! Input control handles.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Unique identifier for an input control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(usize);

impl ControlId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__control_{}", self.0)
    }
}

/// The focusable element a field kind renders.
///
/// Carries the control's error flag and a latched focus request. The host
/// event loop drains focus requests with [`InputControl::take_focus_request`]
/// and moves real focus accordingly.
#[derive(Debug, Clone)]
pub struct InputControl {
    id: ControlId,
    /// Error flag painted on the control
    error: Arc<AtomicBool>,
    /// Focus request flag (checked by the host)
    focus_requested: Arc<AtomicBool>,
}

impl InputControl {
    /// Create a control with a fresh id
    pub fn new() -> Self {
        Self {
            id: ControlId::new(),
            error: Arc::new(AtomicBool::new(false)),
            focus_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this control
    pub fn id(&self) -> ControlId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Focus control
    // -------------------------------------------------------------------------

    /// Request focus for this control
    pub fn focus(&self) {
        self.focus_requested.store(true, Ordering::SeqCst);
    }

    /// Check whether focus was requested without clearing the request
    pub fn has_focus_request(&self) -> bool {
        self.focus_requested.load(Ordering::SeqCst)
    }

    /// Check and clear the focus request (called by the host)
    pub fn take_focus_request(&self) -> bool {
        self.focus_requested.swap(false, Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Error flag
    // -------------------------------------------------------------------------

    /// Mark the control as erroneous or valid
    pub fn set_error(&self, error: bool) {
        self.error.store(error, Ordering::SeqCst);
    }

    /// Check if the control is marked as erroneous
    pub fn has_error(&self) -> bool {
        self.error.load(Ordering::SeqCst)
    }
}

impl Default for InputControl {
    fn default() -> Self {
        Self::new()
    }
}
