//! Field validation primitives.
//!
//! A [`Validator`] is an async function from a field's value to a
//! [`ViolationSet`]. Fields run their validator on every user commit and on
//! every form-wide check; the [`rules`] module provides the common ones.
//!
//! # Example
//!
//! ```ignore
//! use formwork::validation::{rules, validator, ViolationSet};
//!
//! let username = rules::all(vec![
//!     rules::required("Username is required"),
//!     rules::min_length(3, "Username must be at least 3 characters"),
//! ]);
//!
//! let available = validator(|value| async move {
//!     match value.as_str() {
//!         Some("admin") => ViolationSet::single("Username is taken"),
//!         _ => ViolationSet::empty(),
//!     }
//! });
//! ```

pub mod rules;
mod violations;

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::field::FieldValue;

pub use violations::ViolationSet;

/// Async check run against a single field value.
pub type Validator = Arc<dyn Fn(FieldValue) -> BoxFuture<'static, ViolationSet> + Send + Sync>;

/// Wrap an async closure as a [`Validator`].
pub fn validator<F, Fut>(f: F) -> Validator
where
    F: Fn(FieldValue) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ViolationSet> + Send + 'static,
{
    Arc::new(move |value| f(value).boxed())
}

/// Wrap a synchronous check as a [`Validator`].
pub fn sync_validator<F>(f: F) -> Validator
where
    F: Fn(&FieldValue) -> ViolationSet + Send + Sync + 'static,
{
    Arc::new(move |value| {
        let violations = f(&value);
        async move { violations }.boxed()
    })
}
