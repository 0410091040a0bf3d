//! Presence and kind predicates: `required`, `nullable`, `accepted`,
//! `boolean`, `array`, `string`.

use crate::value::Value;

/// `required` — three-way semantics over the value's kind:
/// arrays and plain objects must be non-empty; dates are neither a plain
/// record nor one of the scalar escapes and always fail; scalars fail for
/// null, numeric zero and the empty string. Booleans always pass (`false`
/// is none of the scalar escapes).
pub(crate) fn is_required(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Date(_) | Value::Null => false,
        Value::Int(n) => *n != 0,
        Value::Float(f) => *f != 0.0,
        Value::Str(s) => !s.is_empty(),
        Value::Bool(_) => true,
    }
}

/// `nullable` — the narrow falsy check: null, numeric zero, the empty
/// string and `false` pass. Empty arrays and objects do *not* pass; this
/// asymmetry with `required` is deliberate.
pub(crate) fn is_nullable(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Int(n) => *n == 0,
        Value::Float(f) => *f == 0.0 || f.is_nan(),
        Value::Str(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) | Value::Date(_) => false,
    }
}

/// `accepted` — exactly `1`, `true`, `"yes"` or `"on"`; no other truthy
/// coercion.
pub(crate) fn is_accepted(value: &Value) -> bool {
    match value {
        Value::Int(n) => *n == 1,
        Value::Float(f) => *f == 1.0,
        Value::Bool(b) => *b,
        Value::Str(s) => s == "yes" || s == "on",
        _ => false,
    }
}

pub(crate) fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub(crate) fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub(crate) fn is_string(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}
