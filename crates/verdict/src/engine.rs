//! The validation engine.
//!
//! [`validate_sync`] walks the *data* map's keys in insertion order, looks
//! up each field's parsed rules and evaluates them in declaration order.
//! Fields declared in the rules but absent from the data are never checked:
//! the engine validates the values it was given, it does not enforce field
//! presence beyond what `required` checks for a present-but-empty value.
//!
//! The rule table is rebuilt on every call and discarded afterwards; the
//! engine keeps no state between calls.

use smallvec::SmallVec;
use tracing::debug;

use crate::messages;
use crate::parser::{self, RuleSpec, RulesMap};
use crate::report::{FieldErrors, ValidationReport};
use crate::rules::{self, Outcome, RuleKind};
use crate::value::{DataMap, Value};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Validates `data` against `rules`, returning the full error report.
///
/// # Examples
///
/// ```
/// use verdict::{data_map, rules_map, validate_sync};
///
/// let report = validate_sync(
///     &data_map! { "cat" => "Nacho" },
///     &rules_map! { "cat" => "required|min:3" },
/// );
/// assert!(report.is_empty());
/// ```
pub fn validate_sync(data: &DataMap, rules: &RulesMap) -> ValidationReport {
    validate_sync_with(data, rules, |_, _| Vec::new())
}

/// Like [`validate_sync`], with a late-stage hook.
///
/// After the rule pass, `hook(field, value)` runs once per data field; any
/// messages it returns are appended to that field's entry (creating one if
/// the rules produced none). This is the only extension point — there is no
/// rule registry.
///
/// # Examples
///
/// ```
/// use verdict::{data_map, rules_map, validate_sync_with, Value};
///
/// let report = validate_sync_with(
///     &data_map! { "cat" => "Nacho" },
///     &rules_map! {},
///     |field, value| match value {
///         Value::Str(s) if s.contains("Nacho") => {
///             vec![format!("The {field} field is already taken.")]
///         }
///         _ => Vec::new(),
///     },
/// );
/// assert_eq!(report[0].errors, ["The cat field is already taken."]);
/// ```
pub fn validate_sync_with<F>(data: &DataMap, rules: &RulesMap, hook: F) -> ValidationReport
where
    F: Fn(&str, &Value) -> Vec<String>,
{
    let table = parser::parse_rules(rules);
    let mut report = ValidationReport::new();

    for (field, value) in data {
        let mut errors = match table.get(field) {
            Some(specs) => check_field(field, value, specs),
            None => Vec::new(),
        };
        errors.extend(hook(field, value));

        if !errors.is_empty() {
            report.push(FieldErrors {
                field: field.clone(),
                errors,
            });
        }
    }

    report
}

/// True iff `data` satisfies every declared rule.
pub fn is_valid(data: &DataMap, rules: &RulesMap) -> bool {
    validate_sync(data, rules).is_empty()
}

/// Deferred form of [`validate_sync`]: resolves with `Ok(())` on success
/// and rejects with the report otherwise.
///
/// This is a thin adapter for callers composing futures — the whole result
/// is computed synchronously before the future resolves, so there is no
/// partial progress and no cancellation point.
pub async fn validate(data: &DataMap, rules: &RulesMap) -> Result<(), ValidationReport> {
    validate_sync(data, rules).into_result()
}

// ============================================================================
// FIELD EVALUATION
// ============================================================================

/// Evaluates every rule spec for one field, collecting one rendered message
/// per failing rule, in declaration order.
fn check_field(field: &str, value: &Value, specs: &[RuleSpec]) -> Vec<String> {
    let mut errors = Vec::new();
    for spec in specs {
        // Unknown rule names are ignored on purpose.
        let Some(kind) = RuleKind::from_name(&spec.name) else {
            continue;
        };
        match rules::evaluate(kind, value, &spec.params) {
            Outcome::Pass => {}
            Outcome::Fail => {
                if let Some(message) = render_failure(kind, field, &spec.params) {
                    errors.push(message);
                }
            }
            Outcome::Skip(reason) => {
                debug!(field, rule = %spec.name, %reason, "rule skipped");
            }
        }
    }
    errors
}

/// Renders the failure message for a rule: the field name first, then as
/// many raw parameters as the rule's template takes.
fn render_failure(kind: RuleKind, field: &str, params: &[String]) -> Option<String> {
    let template = messages::template(kind.message_key())?;
    let mut args: SmallVec<[&str; 3]> = SmallVec::new();
    args.push(field);
    args.extend(
        params
            .iter()
            .take(kind.message_params())
            .map(String::as_str),
    );
    Some(messages::render(template, &args))
}

// ============================================================================
// TESTS
// ============================================================================
