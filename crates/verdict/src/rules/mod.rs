//! The predicate library and its dispatch table.
//!
//! Every rule name maps to one [`RuleKind`] variant; [`evaluate`] matches
//! exhaustively over the variants so each rule's semantics live in exactly
//! one arm. Unknown rule names resolve to no variant at all and are ignored
//! by the engine — a deliberately permissive default.
//!
//! # Categories
//!
//! - `logical` — `required`, `nullable`, `accepted`, `boolean`, `array`,
//!   `string`
//! - `length` — `min`, `max`, `size`, `between`
//! - `numeric` — `integer`, `decimal`, `numeric`, naturals
//! - `format` — `email`, `url`, `ip`, `ipv6`, alpha family, `base64`,
//!   `regex`
//! - `temporal` — `date`, date comparisons, `timezone`

mod format;
mod length;
mod logical;
mod numeric;
pub(crate) mod patterns;
mod temporal;

use chrono::{DateTime, Utc};

use crate::value::Value;

// ============================================================================
// RULE KIND
// ============================================================================

/// The closed set of rules the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    Min,
    Max,
    Email,
    Url,
    Ip,
    Ipv6,
    Alpha,
    AlphaDash,
    AlphanumDash,
    AlphaNum,
    Integer,
    Decimal,
    Numeric,
    Natural,
    NaturalNoZero,
    Base64,
    Array,
    Accepted,
    Boolean,
    Date,
    Nullable,
    Size,
    Between,
    Regex,
    Str,
    Timezone,
    After,
    Before,
    AfterOrEqual,
    BeforeOrEqual,
}

impl RuleKind {
    /// Resolves a rule name from a parsed spec.
    ///
    /// `None` for unknown names; the engine skips those silently.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "required" => Self::Required,
            "min" => Self::Min,
            "max" => Self::Max,
            "email" => Self::Email,
            "url" => Self::Url,
            "ip" => Self::Ip,
            "ipv6" => Self::Ipv6,
            "alpha" => Self::Alpha,
            "alpha_dash" => Self::AlphaDash,
            "alphanum_dash" => Self::AlphanumDash,
            "alpha_num" => Self::AlphaNum,
            "integer" => Self::Integer,
            "decimal" => Self::Decimal,
            "numeric" => Self::Numeric,
            "is_natural" => Self::Natural,
            "is_natural_no_zero" => Self::NaturalNoZero,
            "base64" => Self::Base64,
            "array" => Self::Array,
            "accepted" => Self::Accepted,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "nullable" => Self::Nullable,
            "size" => Self::Size,
            "between" => Self::Between,
            "regex" => Self::Regex,
            "string" => Self::Str,
            "timezone" => Self::Timezone,
            "after" => Self::After,
            "before" => Self::Before,
            "after_or_equal" => Self::AfterOrEqual,
            "before_or_equal" => Self::BeforeOrEqual,
            _ => return None,
        };
        Some(kind)
    }

    /// The message-template key rendered when this rule fails.
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min_length",
            Self::Max => "max_length",
            Self::Email => "valid_email",
            Self::Url => "valid_url",
            Self::Ip => "valid_ip",
            Self::Ipv6 => "valid_ipv6",
            Self::Alpha => "alpha",
            Self::AlphaDash => "alpha_dash",
            Self::AlphanumDash => "alphanum_dash",
            Self::AlphaNum => "alpha_numeric",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
            Self::Natural => "is_natural",
            Self::NaturalNoZero => "is_natural_no_zero",
            Self::Base64 => "valid_base64",
            Self::Array => "array",
            Self::Accepted => "accepted",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Nullable => "nullable",
            Self::Size => "size",
            Self::Between => "between",
            Self::Regex => "regex",
            Self::Str => "string",
            Self::Timezone => "timezone",
            Self::After => "greater_than_date",
            Self::Before => "less_than_date",
            Self::AfterOrEqual => "greater_than_or_equal_date",
            Self::BeforeOrEqual => "less_than_or_equal_date",
        }
    }

    /// How many parameters of the spec feed the failure message, after the
    /// field name.
    pub(crate) const fn message_params(self) -> usize {
        match self {
            Self::Min
            | Self::Max
            | Self::Size
            | Self::After
            | Self::Before
            | Self::AfterOrEqual
            | Self::BeforeOrEqual => 1,
            Self::Between => 2,
            _ => 0,
        }
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of evaluating one rule against one value.
#[derive(Debug)]
pub enum Outcome {
    /// The value satisfies the rule.
    Pass,
    /// The value violates the rule; one message is rendered.
    Fail,
    /// The rule could not be applied (malformed usage); nothing is
    /// reported, a diagnostic is logged.
    Skip(RuleUsageError),
}

/// Why a rule could not be applied to a value.
///
/// Malformed declarations degrade to "rule not applied" — never a panic,
/// never a field error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleUsageError {
    #[error("rule `{rule}` needs {expected} parameter(s), got {got}")]
    MissingParams {
        rule: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("rule `{rule}` has a non-numeric parameter `{param}`")]
    NonNumericParam { rule: &'static str, param: String },
    #[error("rule `{rule}` has an unparseable date parameter `{param}`")]
    NonDateParam { rule: &'static str, param: String },
}

// ============================================================================
// PARAMETER COERCION
// ============================================================================

fn numeric_param(
    rule: &'static str,
    params: &[String],
    index: usize,
) -> Result<f64, RuleUsageError> {
    let raw = params.get(index).ok_or(RuleUsageError::MissingParams {
        rule,
        expected: index + 1,
        got: params.len(),
    })?;
    raw.parse::<f64>()
        .map_err(|_| RuleUsageError::NonNumericParam {
            rule,
            param: raw.clone(),
        })
}

fn date_param(rule: &'static str, params: &[String]) -> Result<DateTime<Utc>, RuleUsageError> {
    let raw = params.first().ok_or(RuleUsageError::MissingParams {
        rule,
        expected: 1,
        got: 0,
    })?;
    temporal::parse_date_param(raw).ok_or_else(|| RuleUsageError::NonDateParam {
        rule,
        param: raw.clone(),
    })
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Evaluates one rule against one value.
///
/// Parameters arrive as the raw strings the parser produced; numeric and
/// date coercion happens here.
pub fn evaluate(kind: RuleKind, value: &Value, params: &[String]) -> Outcome {
    macro_rules! coerced {
        ($coercion:expr) => {
            match $coercion {
                Ok(v) => v,
                Err(reason) => return Outcome::Skip(reason),
            }
        };
    }

    let pass = match kind {
        RuleKind::Required => logical::is_required(value),
        RuleKind::Nullable => logical::is_nullable(value),
        RuleKind::Accepted => logical::is_accepted(value),
        RuleKind::Boolean => logical::is_boolean(value),
        RuleKind::Array => logical::is_array(value),
        RuleKind::Str => logical::is_string(value),

        RuleKind::Min => length::is_min(value, coerced!(numeric_param("min", params, 0))),
        RuleKind::Max => length::is_max(value, coerced!(numeric_param("max", params, 0))),
        RuleKind::Size => length::is_size(value, coerced!(numeric_param("size", params, 0))),
        RuleKind::Between => {
            let min = coerced!(numeric_param("between", params, 0));
            let max = coerced!(numeric_param("between", params, 1));
            length::is_between(value, min, max)
        }

        RuleKind::Email => format::is_email(value),
        RuleKind::Url => format::is_url(value),
        RuleKind::Ip => format::is_ip(value),
        RuleKind::Ipv6 => format::is_ipv6(value),
        RuleKind::Alpha => format::is_alpha(value),
        RuleKind::AlphaDash => format::is_alpha_dash(value),
        RuleKind::AlphanumDash => format::is_alphanum_dash(value),
        RuleKind::AlphaNum => format::is_alpha_num(value),
        RuleKind::Base64 => format::is_base64(value),
        RuleKind::Regex => format::is_rule_pattern(value),

        RuleKind::Integer => numeric::is_integer(value),
        RuleKind::Decimal => numeric::is_decimal(value),
        RuleKind::Numeric => numeric::is_numeric(value),
        RuleKind::Natural => numeric::is_natural(value),
        RuleKind::NaturalNoZero => numeric::is_natural_no_zero(value),

        RuleKind::Date => temporal::is_date(value),
        RuleKind::Timezone => temporal::is_timezone(value),
        RuleKind::After => temporal::is_after(value, coerced!(date_param("after", params))),
        RuleKind::Before => temporal::is_before(value, coerced!(date_param("before", params))),
        RuleKind::AfterOrEqual => {
            temporal::is_after_or_equal(value, coerced!(date_param("after_or_equal", params)))
        }
        RuleKind::BeforeOrEqual => {
            temporal::is_before_or_equal(value, coerced!(date_param("before_or_equal", params)))
        }
    };

    if pass { Outcome::Pass } else { Outcome::Fail }
}

// ============================================================================
// TESTS
// ============================================================================
