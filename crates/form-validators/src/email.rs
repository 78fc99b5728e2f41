//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local-part@domain.tld, no whitespace, at least one dot after the '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validate email format
///
/// Checks for:
/// - Exactly one '@' with a non-empty local part
/// - A domain containing at least one '.'
/// - A top-level domain of two or more letters
///
/// Stricter than a bare `\S+@\S+\.\S+`: both parts are limited to ASCII and the
/// top-level domain needs two letters, so `a@b.c` and non-ASCII addresses are rejected.
pub fn is_valid_email(email: &str) -> bool {
    if !EMAIL_REGEX.is_match(email) {
        return false;
    }

    // The regex allows dots anywhere in the domain, so reject ".." and a leading dot
    match email.split_once('@') {
        Some((_, domain)) => !domain.starts_with('.') && !domain.contains(".."),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("josé@example.com"));
    }
}
