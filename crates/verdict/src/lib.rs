//! # verdict
//!
//! Declarative per-field validation of structured input data.
//!
//! Callers supply a data map (field → value) and a rules map (field →
//! pipe-delimited rule string); `verdict` reports which fields violate
//! which rules, as a structured, deterministically ordered error report.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict::{data_map, rules_map, is_valid, validate_sync};
//!
//! let data = data_map! {
//!     "cat" => "Nacho",
//!     "email" => "thomas@nyan.com",
//!     "amount" => 2,
//! };
//! let rules = rules_map! {
//!     "cat" => "required|min:3",
//!     "email" => "required|email",
//!     "amount" => "between:1,5",
//! };
//!
//! assert!(is_valid(&data, &rules));
//! assert!(validate_sync(&data, &rules).is_empty());
//! ```
//!
//! ## Rule strings
//!
//! A rule string is a `|`-separated list of rule tokens; a token is a rule
//! name, optionally followed by `:` and a comma-separated parameter list —
//! `"required|between:1,5"`. See [`rules::RuleKind`] for the full rule set
//! and [`parser`] for the grammar.
//!
//! ## Results
//!
//! - [`validate_sync`] returns a [`ValidationReport`]: one entry per
//!   failing field, in data-key order, each with one message per failing
//!   rule in declaration order.
//! - [`is_valid`] collapses the report to a boolean.
//! - [`validate`] is a deferred adapter that rejects with the report.
//!
//! Malformed rule usage (a `between` with one parameter, a `min` with a
//! non-numeric one) never fails a field and never panics — the rule is
//! skipped and a `tracing` diagnostic is emitted.

pub mod engine;
mod macros;
pub mod messages;
pub mod parser;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod value;

pub use engine::{is_valid, validate, validate_sync, validate_sync_with};
pub use parser::{RuleSpec, RuleTable, RulesMap, parse_rules};
pub use report::{FieldErrors, ValidationReport};
pub use rules::{Outcome, RuleKind};
pub use value::{DataMap, Value, ValueKind};
