//! String validation functions

/// A text value counts as present once surrounding whitespace is trimmed away
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Exactly `count` ASCII digits and nothing else
pub fn has_exact_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("John", true)]
    #[case(" x ", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("\t\n", false)]
    fn test_presence(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_present(value), expected);
    }

    #[test]
    fn test_exact_digits() {
        assert!(has_exact_digits("0123456789", 10));
        assert!(!has_exact_digits("012345678", 10));
        assert!(!has_exact_digits("01234567890", 10));
        assert!(!has_exact_digits("012345678a", 10));
        assert!(!has_exact_digits("012-456789", 10));
        assert!(!has_exact_digits("", 10));
        // Non-ASCII digits are rejected
        assert!(!has_exact_digits("٠١٢٣٤٥٦٧٨٩", 10));
    }
}
