//! Form validation and data aggregation for widget toolkits.
//!
//! A [`Field`](field::Field) validates its own value and keeps its error
//! region in step with the last violations it was shown. A
//! [`Form`](form::Form) collects the fields attached to it, assembles their
//! values into a [`FormData`](form::FormData) record, combines field-level
//! and cross-field violations on submit and focuses the first offender.

pub mod config;
pub mod field;
pub mod form;
pub mod prelude;
pub mod render;
pub mod validation;
