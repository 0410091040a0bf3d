//! Format validation: `email`, `url`, `ip`, `ipv6`, `accepted`, `size`.

use verdict::prelude::*;

// ============================================================================
// EMAIL
// ============================================================================

#[test]
fn email_accepts_a_valid_address() {
    let rules = rules_map! { "email" => "email" };
    assert!(is_valid(&data_map! { "email" => "thomas@nyan.com" }, &rules));
}

#[test]
fn email_rejects_an_empty_string() {
    let rules = rules_map! { "email" => "email" };
    assert!(!is_valid(&data_map! { "email" => "" }, &rules));
}

#[test]
fn email_rejects_a_badly_formatted_address() {
    let rules = rules_map! { "email" => "email" };
    assert!(!is_valid(&data_map! { "email" => "thomas#nyan.com" }, &rules));
}

#[test]
fn email_accepts_addresses_without_a_tld() {
    let rules = rules_map! { "email" => "email" };
    assert!(is_valid(&data_map! { "email" => "thomas@localhost" }, &rules));
}

// ============================================================================
// URL
// ============================================================================

#[test]
fn url_accepts_http_and_https() {
    let rules = rules_map! { "link" => "url" };
    assert!(is_valid(&data_map! { "link" => "http://www.nyan.cat/" }, &rules));
    assert!(is_valid(&data_map! { "link" => "https://nyan.com/lolcats" }, &rules));
}

#[test]
fn url_accepts_a_custom_port() {
    let rules = rules_map! { "link" => "url" };
    assert!(is_valid(&data_map! { "link" => "http://localhost:3000" }, &rules));
}

#[test]
fn url_rejects_empty_and_bare_hostnames() {
    let rules = rules_map! { "link" => "url" };
    assert!(!is_valid(&data_map! { "link" => "" }, &rules));
    assert!(!is_valid(&data_map! { "link" => "nyan.cat" }, &rules));
    assert!(!is_valid(&data_map! { "link" => "localhost" }, &rules));
}

// ============================================================================
// IP
// ============================================================================

#[test]
fn ip_accepts_dotted_quads() {
    let rules = rules_map! { "address" => "ip" };
    assert!(is_valid(&data_map! { "address" => "192.168.0.1" }, &rules));
    assert!(is_valid(&data_map! { "address" => "255.255.255.0" }, &rules));
}

#[test]
fn ip_rejects_v6_and_placeholders() {
    let rules = rules_map! { "address" => "ip" };
    assert!(!is_valid(
        &data_map! { "address" => "2a02:c7f:282b:b500:a4a2:411d:68d1:b46a" },
        &rules,
    ));
    assert!(!is_valid(&data_map! { "address" => "192.168.1.x" }, &rules));
    assert!(!is_valid(&data_map! { "address" => "" }, &rules));
}

// ============================================================================
// IPV6
// ============================================================================

#[test]
fn ipv6_accepts_a_full_address() {
    let rules = rules_map! { "address" => "ipv6" };
    assert!(is_valid(
        &data_map! { "address" => "2a02:c7f:282b:b500:a4a2:411d:68d1:b46a" },
        &rules,
    ));
}

#[test]
fn ipv6_rejects_v4_and_empty() {
    let rules = rules_map! { "address" => "ipv6" };
    assert!(!is_valid(&data_map! { "address" => "192.168.1.2" }, &rules));
    assert!(!is_valid(&data_map! { "address" => "" }, &rules));
}

// ============================================================================
// ACCEPTED
// ============================================================================

#[test]
fn accepted_takes_exactly_the_four_forms() {
    let rules = rules_map! { "terms" => "accepted" };
    assert!(is_valid(&data_map! { "terms" => "yes" }, &rules));
    assert!(is_valid(&data_map! { "terms" => "on" }, &rules));
    assert!(is_valid(&data_map! { "terms" => true }, &rules));
    assert!(is_valid(&data_map! { "terms" => 1 }, &rules));
}

#[test]
fn accepted_rejects_anything_else() {
    let rules = rules_map! { "terms" => "accepted" };
    assert!(!is_valid(&data_map! { "terms" => "√" }, &rules));
    assert!(!is_valid(&data_map! { "terms" => 2 }, &rules));
    assert!(!is_valid(&data_map! { "terms" => false }, &rules));
}

// ============================================================================
// SIZE
// ============================================================================

#[test]
fn size_matches_exact_lengths() {
    let rules = rules_map! { "cat" => "size:2" };
    assert!(is_valid(&data_map! { "cat" => vec!["Nacho", "Rolo"] }, &rules));
    assert!(is_valid(&data_map! { "cat" => "Yo" }, &rules));
}

#[test]
fn size_rejects_other_lengths() {
    let rules = rules_map! { "cat" => "size:2" };
    assert!(!is_valid(&data_map! { "cat" => Vec::<i64>::new() }, &rules));
    assert!(!is_valid(&data_map! { "cat" => "" }, &rules));
    assert!(!is_valid(&data_map! { "cat" => 2 }, &rules));
}
