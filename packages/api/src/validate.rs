//! Client-side input checks that run before anything is sent to the backend.

use std::sync::LazyLock;

use regex::Regex;

/// Local part: dot-separated atoms without whitespace or RFC special characters.
/// Domain: a bracketed IPv4 literal, or one or more labels followed by an
/// alphabetic TLD of at least two letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^[^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*"#,
        r"@(\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,})$",
    ))
    .expect("email pattern is valid")
});

/// Structural email check: a local part, an `@`, and a dotted domain, with no
/// whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for email in [
            "jo@example.com",
            "first.last@sub.example.co.uk",
            "user+tag@example.io",
            "x@[192.168.0.1]",
        ] {
            assert!(validate_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_rejects_missing_at_or_dot() {
        for email in ["jo.example.com", "jo@example", "@example.com", "jo@", ""] {
            assert!(!validate_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_rejects_whitespace() {
        for email in [" jo@example.com", "jo @example.com", "jo@exa mple.com", "jo@example.com\n"] {
            assert!(!validate_email(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn test_rejects_malformed_local_part() {
        for email in [".jo@example.com", "jo.@example.com", "j..o@example.com", "j<o>@example.com"] {
            assert!(!validate_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_rejects_short_tld() {
        assert!(!validate_email("jo@example.c"));
    }
}
