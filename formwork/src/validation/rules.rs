//! Built-in validation rules.
//!
//! Every rule yields a [`Validator`] producing at most one message. Use
//! [`all`] to stack several rules on one field.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;

use super::{Validator, ViolationSet, sync_validator, validator};
use crate::field::FieldValue;

/// Pass when `f` holds, otherwise report `msg`.
pub fn rule<F>(f: F, msg: impl Into<String>) -> Validator
where
    F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
{
    let msg = msg.into();
    sync_validator(move |value| {
        if f(value) {
            ViolationSet::empty()
        } else {
            ViolationSet::single(msg.clone())
        }
    })
}

/// Async variant of [`rule`].
pub fn rule_async<F, Fut>(f: F, msg: impl Into<String>) -> Validator
where
    F: Fn(FieldValue) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    let msg = msg.into();
    validator(move |value| {
        let fut = f(value);
        let msg = msg.clone();
        async move {
            if fut.await {
                ViolationSet::empty()
            } else {
                ViolationSet::single(msg)
            }
        }
    })
}

/// Run `validators` in order and combine their results in that order.
pub fn all(validators: Vec<Validator>) -> Validator {
    let validators = Arc::new(validators);
    Arc::new(move |value: FieldValue| {
        let validators = Arc::clone(&validators);
        async move {
            let mut violations = ViolationSet::empty();
            for check in validators.iter() {
                let next = check(value.clone()).await;
                violations = next.combine(&violations);
            }
            violations
        }
        .boxed()
    })
}

/// Require a non-blank value.
///
/// Strings must contain something besides whitespace, arrays must be
/// non-empty and `null` always fails. Numbers and booleans pass.
pub fn required(msg: impl Into<String>) -> Validator {
    rule(
        |value| match value {
            FieldValue::Null => false,
            FieldValue::String(s) => !s.trim().is_empty(),
            FieldValue::Array(items) => !items.is_empty(),
            FieldValue::Object(map) => !map.is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => true,
        },
        msg,
    )
}

/// Require at least `min` characters. Non-text values pass.
pub fn min_length(min: usize, msg: impl Into<String>) -> Validator {
    rule(
        move |value| text(value).is_none_or(|s| s.chars().count() >= min),
        msg,
    )
}

/// Require at most `max` characters. Non-text values pass.
pub fn max_length(max: usize, msg: impl Into<String>) -> Validator {
    rule(
        move |value| text(value).is_none_or(|s| s.chars().count() <= max),
        msg,
    )
}

/// Require text matching `pattern`.
pub fn pattern(pattern: &str, msg: impl Into<String>) -> Result<Validator, regex::Error> {
    let re = regex::Regex::new(pattern)?;
    Ok(rule(
        move |value| text(value).is_none_or(|s| re.is_match(s)),
        msg,
    ))
}

/// Require a valid email address. Empty text passes; pair with [`required`].
pub fn email(msg: impl Into<String>) -> Validator {
    rule(
        |value| match text(value) {
            Some("") | None => true,
            Some(s) => email_address::EmailAddress::is_valid(s),
        },
        msg,
    )
}

/// Require the value to equal `other`.
pub fn equals(other: impl Into<FieldValue>, msg: impl Into<String>) -> Validator {
    let other = other.into();
    rule(move |value| value == &other, msg)
}

/// Require a checked toggle.
pub fn checked(msg: impl Into<String>) -> Validator {
    rule(|value| value.as_bool().unwrap_or(false), msg)
}

fn text(value: &FieldValue) -> Option<&str> {
    value.as_str()
}
