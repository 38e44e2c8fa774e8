//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationResult;

// Optional +CC prefix, optional parentheses around the area code,
// then exchange and subscriber number with `-` or whitespace separators
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+[0-9]{1,3}[-\s]?)?\(?([0-9]{3})\)?[-\s]?([0-9]{3})[-\s]?([0-9]{4})$").unwrap()
});

/// Validates a North-American style phone number
pub fn validate_phone(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Phone number is required");
    }

    if !PHONE_REGEX.is_match(value) {
        return ValidationResult::fail(
            "Please enter a valid phone number (e.g., 555-123-4567 or +1 555-123-4567)",
        );
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("555-123-4567")]
    #[case("5551234567")]
    #[case("(555) 123-4567")]
    #[case("(555)123-4567")]
    #[case("+1 555-123-4567")]
    #[case("+44-555 123 4567")]
    #[case("+123 555 123 4567")]
    fn test_valid_phones(#[case] phone: &str) {
        assert!(validate_phone(phone).is_valid(), "{phone:?} should pass");
    }

    #[rstest]
    #[case("555-1234")]
    #[case("555-123-456")]
    #[case("+1234 555-123-4567")]
    #[case("555.123.4567")]
    #[case("phone")]
    fn test_invalid_phones(#[case] phone: &str) {
        let result = validate_phone(phone);
        assert!(!result.is_valid());
        assert!(result.message.starts_with("Please enter a valid phone number"));
    }

    #[test]
    fn test_empty_phone_is_required() {
        assert_eq!(validate_phone("").message, "Phone number is required");
    }
}
