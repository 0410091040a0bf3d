//! Basic usage example for verdict

use verdict::{data_map, is_valid, rules_map, validate_sync};

fn main() {
    // Malformed rule usage surfaces as tracing diagnostics, not field errors.
    tracing_subscriber::fmt().init();

    let data = data_map! {
        "name" => "Nacho",
        "email" => "thomas#nyan.com",
        "amount" => 12,
    };
    let rules = rules_map! {
        "name" => "required|alpha|min:3",
        "email" => "required|email",
        "amount" => "between:1,5",
    };

    if is_valid(&data, &rules) {
        println!("✓ all fields pass");
        return;
    }

    let report = validate_sync(&data, &rules);
    println!("✗ {} field(s) failed:", report.len());
    for entry in &report {
        for error in &entry.errors {
            println!("  {}: {error}", entry.field);
        }
    }
}
