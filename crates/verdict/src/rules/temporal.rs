//! Temporal predicates: `date`, the four date-comparison rules and
//! `timezone`.
//!
//! Date comparisons take their bound from the rule parameter, parsed as
//! RFC 3339 or as a bare `YYYY-MM-DD` (midnight UTC). The value side must
//! be an actual date value; string-formatted dates fail even when they
//! would parse — the same no-coercion contract as the `date` rule itself.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::value::Value;

pub(crate) fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// Parses a rule parameter into a UTC instant.
pub(crate) fn parse_date_param(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
}

pub(crate) fn is_after(value: &Value, bound: DateTime<Utc>) -> bool {
    matches!(value, Value::Date(d) if *d > bound)
}

pub(crate) fn is_before(value: &Value, bound: DateTime<Utc>) -> bool {
    matches!(value, Value::Date(d) if *d < bound)
}

pub(crate) fn is_after_or_equal(value: &Value, bound: DateTime<Utc>) -> bool {
    matches!(value, Value::Date(d) if *d >= bound)
}

pub(crate) fn is_before_or_equal(value: &Value, bound: DateTime<Utc>) -> bool {
    matches!(value, Value::Date(d) if *d <= bound)
}

/// `timezone` — the candidate must name an IANA zone.
pub(crate) fn is_timezone(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.parse::<chrono_tz::Tz>().is_ok())
}
