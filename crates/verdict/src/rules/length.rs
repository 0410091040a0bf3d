//! Magnitude and length predicates: `min`, `max`, `size`, `between`.
//!
//! Numbers compare by magnitude, strings and arrays by length; every other
//! kind has no usable measure and fails. Parameters arrive pre-coerced to
//! `f64` (the engine skips the rule when coercion fails).

use tracing::warn;

use crate::value::Value;

pub(crate) fn is_min(value: &Value, min: f64) -> bool {
    match value.as_number() {
        Some(n) => n >= min,
        None => value.len().is_some_and(|len| len as f64 >= min),
    }
}

pub(crate) fn is_max(value: &Value, max: f64) -> bool {
    match value.as_number() {
        Some(n) => n <= max,
        None => value.len().is_some_and(|len| len as f64 <= max),
    }
}

/// `size` — exact length equality. Not meaningful for numbers, which fail.
pub(crate) fn is_size(value: &Value, size: f64) -> bool {
    value.len().is_some_and(|len| len as f64 == size)
}

/// `between` — inclusive on both bounds. Kinds other than string, array and
/// number fail closed with a diagnostic warning; the caller still renders
/// the ordinary `between` message.
pub(crate) fn is_between(value: &Value, min: f64, max: f64) -> bool {
    match value {
        Value::Str(_) | Value::Array(_) => {
            let len = value.len().unwrap_or(0) as f64;
            len >= min && len <= max
        }
        Value::Int(_) | Value::Float(_) => {
            let n = value.as_number().unwrap_or(f64::NAN);
            n >= min && n <= max
        }
        other => {
            warn!(
                kind = %other.kind(),
                "the `between` rule should only be used with strings, arrays and numbers"
            );
            false
        }
    }
}
