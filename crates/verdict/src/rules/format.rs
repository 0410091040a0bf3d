//! String-format predicates: `email`, `url`, `ip`, `ipv6`, `alpha` family,
//! `base64`, `regex`.
//!
//! All of these apply to string values only; other kinds fail rather than
//! being coerced to text.

use crate::parser;
use crate::rules::patterns;
use crate::value::Value;

fn matches_non_empty(value: &Value, pattern: &regex::Regex) -> bool {
    value
        .as_str()
        .is_some_and(|s| !s.is_empty() && pattern.is_match(s))
}

pub(crate) fn is_email(value: &Value) -> bool {
    matches_non_empty(value, &patterns::EMAIL)
}

pub(crate) fn is_url(value: &Value) -> bool {
    matches_non_empty(value, &patterns::URL)
}

pub(crate) fn is_ip(value: &Value) -> bool {
    matches_non_empty(value, &patterns::IP)
}

pub(crate) fn is_ipv6(value: &Value) -> bool {
    matches_non_empty(value, &patterns::IPV6)
}

pub(crate) fn is_alpha(value: &Value) -> bool {
    matches_non_empty(value, &patterns::ALPHA)
}

pub(crate) fn is_alpha_dash(value: &Value) -> bool {
    matches_non_empty(value, &patterns::ALPHA_DASH)
}

pub(crate) fn is_alphanum_dash(value: &Value) -> bool {
    matches_non_empty(value, &patterns::ALPHANUM_DASH)
}

pub(crate) fn is_alpha_num(value: &Value) -> bool {
    matches_non_empty(value, &patterns::ALPHA_NUM)
}

pub(crate) fn is_base64(value: &Value) -> bool {
    // The pattern itself rejects the empty string (padding groups require
    // at least one quantum).
    value.as_str().is_some_and(|s| patterns::BASE64.is_match(s))
}

/// `regex` — the value must be a well-formed `name[param]` rule token, per
/// the parser's grammar detector.
pub(crate) fn is_rule_pattern(value: &Value) -> bool {
    value.as_str().is_some_and(parser::is_rule_syntax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn email_requires_a_string() {
        assert!(is_email(&Value::from("thomas@nyan.com")));
        assert!(is_email(&Value::from("thomas@localhost")));
        assert!(!is_email(&Value::from("thomas#nyan.com")));
        assert!(!is_email(&Value::from("")));
        assert!(!is_email(&Value::from(42)));
    }

    #[test]
    fn url_rejects_bare_hostnames() {
        assert!(is_url(&Value::from("http://www.nyan.cat/")));
        assert!(is_url(&Value::from("http://localhost:3000")));
        assert!(!is_url(&Value::from("nyan.cat")));
        assert!(!is_url(&Value::from("")));
    }

    #[test]
    fn ip_families_do_not_overlap() {
        assert!(is_ip(&Value::from("192.168.0.1")));
        assert!(!is_ip(&Value::from("2a02:c7f:282b:b500:a4a2:411d:68d1:b46a")));
        assert!(is_ipv6(&Value::from("2a02:c7f:282b:b500:a4a2:411d:68d1:b46a")));
        assert!(!is_ipv6(&Value::from("192.168.1.2")));
        assert!(!is_ip(&Value::from("")));
        assert!(!is_ipv6(&Value::from("")));
    }

    #[test]
    fn alpha_family() {
        assert!(is_alpha(&Value::from("Nyan")));
        assert!(!is_alpha(&Value::from("nyan33")));
        assert!(!is_alpha(&Value::from("Ny@n")));

        assert!(is_alpha_dash(&Value::from("ny_An-Cat")));
        assert!(!is_alpha_dash(&Value::from("-nyan33")));

        assert!(is_alphanum_dash(&Value::from("Ny4n_Cat777")));
        assert!(!is_alphanum_dash(&Value::from("Ny4n$C4t")));

        assert!(is_alpha_num(&Value::from("12Hello12")));
        assert!(!is_alpha_num(&Value::from("Ny_an")));
    }

    #[test]
    fn base64_data() {
        assert!(is_base64(&Value::from("TnlhbiBueWFuISE=")));
        assert!(!is_base64(&Value::from("not base64!")));
        assert!(!is_base64(&Value::from("")));
    }

    #[test]
    fn rule_pattern_detector() {
        assert!(is_rule_pattern(&Value::from("matches[^a+$]")));
        assert!(!is_rule_pattern(&Value::from("matches")));
        assert!(!is_rule_pattern(&Value::from(7)));
    }
}
