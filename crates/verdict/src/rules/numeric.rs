//! Number-form predicates: `integer`, `decimal`, `numeric`, `is_natural`,
//! `is_natural_no_zero`.
//!
//! These test the *written form* of a number. String values go through the
//! patterns directly; numeric values are judged on their canonical string
//! form — an integral float prints without a fraction and so counts as an
//! integer, never as a decimal.

use crate::rules::patterns;
use crate::value::Value;

fn integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0
}

pub(crate) fn is_integer(value: &Value) -> bool {
    match value {
        Value::Str(s) => patterns::INTEGER.is_match(s),
        Value::Int(_) => true,
        Value::Float(f) => integral(*f),
        _ => false,
    }
}

/// `decimal` must carry a fractional part; integral values fail.
pub(crate) fn is_decimal(value: &Value) -> bool {
    match value {
        Value::Str(s) => patterns::DECIMAL.is_match(s),
        Value::Float(f) => f.is_finite() && f.fract() != 0.0,
        _ => false,
    }
}

/// `numeric` — digits only, so no sign and no fraction.
pub(crate) fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Str(s) => patterns::NUMERIC.is_match(s),
        Value::Int(n) => *n >= 0,
        Value::Float(f) => integral(*f) && *f >= 0.0,
        _ => false,
    }
}

pub(crate) fn is_natural(value: &Value) -> bool {
    // Same written form as `numeric`: unsigned digits.
    is_numeric(value)
}

pub(crate) fn is_natural_no_zero(value: &Value) -> bool {
    match value {
        Value::Str(s) => patterns::NATURAL_NO_ZERO.is_match(s),
        Value::Int(n) => *n > 0,
        Value::Float(f) => integral(*f) && *f > 0.0,
        _ => false,
    }
}
