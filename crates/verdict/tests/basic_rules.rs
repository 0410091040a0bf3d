//! Basic validation: `required`, `min`, `max` through the public API.

use verdict::prelude::*;

// ============================================================================
// REQUIRED
// ============================================================================

#[test]
fn required_validates_a_normal_string() {
    let rules = rules_map! { "cat" => "required" };
    assert!(is_valid(&data_map! { "cat" => "Nacho" }, &rules));
}

#[test]
fn required_rejects_an_empty_string() {
    let rules = rules_map! { "cat" => "required" };
    assert!(!is_valid(&data_map! { "cat" => "" }, &rules));
}

#[test]
fn required_validates_a_non_zero_number() {
    let rules = rules_map! { "cat" => "required" };
    assert!(is_valid(&data_map! { "cat" => 2 }, &rules));
}

#[test]
fn required_rejects_zero() {
    let rules = rules_map! { "cat" => "required" };
    assert!(!is_valid(&data_map! { "cat" => 0 }, &rules));
    assert!(!is_valid(&data_map! { "cat" => 0.0 }, &rules));
}

#[test]
fn required_rejects_null() {
    let rules = rules_map! { "cat" => "required" };
    assert!(!is_valid(&data_map! { "cat" => Value::Null }, &rules));
}

#[test]
fn required_validates_a_non_empty_object() {
    let rules = rules_map! { "cat" => "required" };
    let profile = Value::from(serde_json::json!({ "name": "Nacho" }));
    assert!(is_valid(&data_map! { "cat" => profile }, &rules));
}

#[test]
fn required_rejects_an_empty_object() {
    let rules = rules_map! { "cat" => "required" };
    let empty = Value::from(serde_json::json!({}));
    assert!(!is_valid(&data_map! { "cat" => empty }, &rules));
}

#[test]
fn required_validates_a_non_empty_array() {
    let rules = rules_map! { "cat" => "required" };
    assert!(is_valid(&data_map! { "cat" => vec!["Nacho"] }, &rules));
}

#[test]
fn required_rejects_an_empty_array() {
    let rules = rules_map! { "cat" => "required" };
    assert!(!is_valid(&data_map! { "cat" => Vec::<i64>::new() }, &rules));
}

// ============================================================================
// MIN
// ============================================================================

#[test]
fn min_by_string_length() {
    let rules = rules_map! { "cat" => "min:3" };
    assert!(is_valid(&data_map! { "cat" => "Nacho" }, &rules));
    assert!(!is_valid(&data_map! { "cat" => "Yu" }, &rules));
}

#[test]
fn min_by_magnitude_for_numbers() {
    let rules = rules_map! { "cat" => "min:3" };
    assert!(is_valid(&data_map! { "cat" => 4 }, &rules));
    assert!(!is_valid(&data_map! { "cat" => 2 }, &rules));
}

#[test]
fn min_by_array_length() {
    let rules = rules_map! { "cat" => "min:3" };
    assert!(is_valid(&data_map! { "cat" => vec![1, 2, 3] }, &rules));
    assert!(!is_valid(&data_map! { "cat" => vec![1, 2] }, &rules));
}

// ============================================================================
// MAX
// ============================================================================

#[test]
fn max_by_string_length() {
    let rules = rules_map! { "cat" => "max:3" };
    assert!(is_valid(&data_map! { "cat" => "Mya" }, &rules));
    assert!(!is_valid(&data_map! { "cat" => "Nacho" }, &rules));
}

#[test]
fn max_by_magnitude_for_numbers() {
    let rules = rules_map! { "cat" => "max:3" };
    assert!(is_valid(&data_map! { "cat" => 3 }, &rules));
    assert!(!is_valid(&data_map! { "cat" => 4 }, &rules));
}

#[test]
fn max_by_array_length() {
    let rules = rules_map! { "cat" => "max:3" };
    assert!(is_valid(&data_map! { "cat" => vec![1, 2, 3] }, &rules));
    assert!(!is_valid(&data_map! { "cat" => vec![1, 2, 3, 4] }, &rules));
}

// ============================================================================
// MIN/MAX SYMMETRY
// ============================================================================

#[test]
fn exact_length_passes_both_bounds() {
    let data = data_map! { "cat" => "Mya" };
    assert!(is_valid(&data, &rules_map! { "cat" => "min:3|max:3" }));
}
