//! Numeric validation functions

use std::num::IntErrorKind;

/// Coerce raw text to an integer
///
/// Surrounding whitespace is ignored and a leading sign is accepted; anything else
/// (decimals, exponents, trailing junk) is not an integer. Well-formed integers
/// outside the `i64` range saturate to `i64::MAX` or `i64::MIN` so they still
/// compare against bounds.
pub fn parse_integer(value: &str) -> Option<i64> {
    match value.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Validates minimum value for numeric types
pub fn is_at_least<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// Validates maximum value for numeric types
pub fn is_at_most<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("18", Some(18))]
    #[case(" 42 ", Some(42))]
    #[case("-3", Some(-3))]
    #[case("+7", Some(7))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("17.5", None)]
    #[case("1e2", None)]
    #[case("12abc", None)]
    #[case("99999999999999999999", Some(i64::MAX))]
    #[case("-99999999999999999999", Some(i64::MIN))]
    fn test_parse_integer(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_integer(raw), expected);
    }

    #[test]
    fn test_min_validation() {
        assert!(is_at_least(10, 5));
        assert!(is_at_least(5, 5));
        assert!(!is_at_least(3, 5));
    }

    #[test]
    fn test_max_validation() {
        assert!(is_at_most(5, 10));
        assert!(is_at_most(10, 10));
        assert!(!is_at_most(15, 10));
    }
}
