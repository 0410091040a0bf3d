//! Prelude module for convenient imports.
//!
//! ```
//! use verdict::prelude::*;
//!
//! let data = data_map! { "cat" => "Nacho" };
//! let rules = rules_map! { "cat" => "required|min:3" };
//! assert!(is_valid(&data, &rules));
//! ```

pub use crate::engine::{is_valid, validate, validate_sync, validate_sync_with};
pub use crate::parser::{RuleSpec, RuleTable, RulesMap, parse_rules};
pub use crate::report::{FieldErrors, ValidationReport};
pub use crate::rules::{Outcome, RuleKind};
pub use crate::value::{DataMap, Value, ValueKind};
pub use crate::{data_map, rules_map};
