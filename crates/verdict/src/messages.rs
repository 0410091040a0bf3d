//! The message template collaborator.
//!
//! Each rule failure renders exactly one template, keyed by template name,
//! with positional `%s` substitution of the field name and (where the
//! template takes them) the raw rule parameters. The keys and placeholder
//! positions are part of the crate's output contract — callers that swap in
//! their own template source must preserve both.

/// Looks up the template for a message key.
///
/// Returns `None` for unknown keys so a replacement table can fall through
/// to its own source.
pub fn template(key: &str) -> Option<&'static str> {
    let template = match key {
        "required" => "The %s field is required.",
        "min_length" => "The %s field must be at least %s characters in length.",
        "max_length" => "The %s field must not exceed %s characters in length.",
        "exact_length" => "The %s field must be exactly %s characters in length.",
        "valid_email" => "The %s field must contain a valid email address.",
        "valid_url" => "The %s field must contain a valid URL.",
        "valid_ip" => "The %s field must contain a valid IP.",
        "valid_ipv6" => "The %s field must contain a valid IP v6.",
        "valid_base64" => "The %s field must contain a base64 string.",
        "alpha" => "The %s field must only contain alphabetical characters.",
        "alpha_numeric" => "The %s field must only contain alpha-numeric characters.",
        "alpha_dash" => "The %s field must only contain alpha characters, underscores, and dashes.",
        "alphanum_dash" => {
            "The %s field must only contain alpha-numeric characters, underscores, and dashes."
        }
        "numeric" => "The %s field must contain only numbers.",
        "integer" => "The %s field must contain an integer.",
        "decimal" => "The %s field must contain a decimal number.",
        "is_natural" => "The %s field must contain only positive numbers.",
        "is_natural_no_zero" => "The %s field must contain a number greater than zero.",
        "array" => "The %s field must an array.",
        "string" => "The %s field must be a string.",
        "boolean" => "The %s field must be true or false (boolean only).",
        "accepted" => "The %s field must be accepted.",
        "date" => "The %s field must be a date object.",
        "nullable" => "The %s field should be nullable.",
        "size" => "The size of the %s field must %s long.",
        "between" => "The %s field must be between %s and %s.",
        "regex" => "The %s field must a regular expression pattern.",
        "timezone" => "The %s field must contain a valid time zone.",
        "greater_than_date" => "The %s field must contain a more recent date than %s.",
        "less_than_date" => "The %s field must contain an older date than %s.",
        "greater_than_or_equal_date" => {
            "The %s field must contain a date that's at least as recent as %s."
        }
        "less_than_or_equal_date" => "The %s field must contain a date that's %s or older.",
        _ => return None,
    };
    Some(template)
}

/// Renders a template, substituting each `%s` with the next argument.
///
/// Placeholders without a matching argument are left in place; surplus
/// arguments are ignored. Never panics.
pub fn render(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("%s"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================
