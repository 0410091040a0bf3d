//! Rule-string parsing.
//!
//! A rule declaration is a pipe-delimited sequence of rule tokens:
//!
//! ```text
//! "required|min:3|between:1,5"
//! ```
//!
//! Each token is either a bare rule name (`required`) or a name with a
//! `:`-delimited, comma-separated parameter list (`between:1,5`). Rule
//! *names* are not validated here — unknown names parse fine and are
//! resolved (or ignored) at dispatch time.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use smallvec::SmallVec;

/// A rule-declaration map: field name to pipe-delimited rule string.
pub type RulesMap = IndexMap<String, String>;

/// The parsed ruleset: field name to rule specs, in declaration order.
///
/// Fields whose declaration parses to zero rule tokens get no entry at all;
/// the engine treats an absent field as unconstrained.
pub type RuleTable = IndexMap<String, Vec<RuleSpec>>;

/// Detects the `name[param]` rule-token form.
static RULE_SYNTAX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)\[(.+)\]$").unwrap());

// ============================================================================
// RULE SPEC
// ============================================================================

/// One parsed rule token: a rule name plus its parameters.
///
/// Invariants: `name` is never empty, and `params` never contains empty
/// strings (stray commas are dropped during parsing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// The rule name, e.g. `"min"`.
    pub name: String,
    /// Raw parameters, e.g. `["1", "5"]`. Numeric coercion happens at
    /// evaluation time, not here.
    pub params: SmallVec<[String; 2]>,
}

impl RuleSpec {
    /// Creates a spec with no parameters.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: SmallVec::new(),
        }
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parses a rule-declaration map into a [`RuleTable`].
///
/// # Examples
///
/// ```
/// use verdict::parser::parse_rules;
/// use verdict::rules_map;
///
/// let table = parse_rules(&rules_map! { "cat" => "required|min:3" });
/// let specs = &table["cat"];
/// assert_eq!(specs.len(), 2);
/// assert_eq!(specs[1].name, "min");
/// assert_eq!(specs[1].params.as_slice(), ["3"]);
/// ```
pub fn parse_rules(rules: &RulesMap) -> RuleTable {
    let mut table = RuleTable::new();
    for (field, declaration) in rules {
        let specs: Vec<RuleSpec> = declaration.split('|').filter_map(parse_token).collect();
        if !specs.is_empty() {
            table.insert(field.clone(), specs);
        }
    }
    table
}

/// Parses one rule token. Empty tokens (and tokens with an empty name, such
/// as `":3"`) are dropped.
fn parse_token(token: &str) -> Option<RuleSpec> {
    match token.split_once(':') {
        Some(("", _)) => None,
        Some((name, raw_params)) => Some(RuleSpec {
            name: name.to_owned(),
            params: raw_params
                .split(',')
                .filter(|p| !p.is_empty())
                .map(str::to_owned)
                .collect(),
        }),
        None if token.is_empty() => None,
        None => Some(RuleSpec::bare(token)),
    }
}

/// Whether a string is a well-formed `name[param]` rule token.
///
/// This is the grammar detector the `regex` rule delegates to.
pub(crate) fn is_rule_syntax(candidate: &str) -> bool {
    RULE_SYNTAX.is_match(candidate)
}

// ============================================================================
// TESTS
// ============================================================================
