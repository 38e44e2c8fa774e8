//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationResult;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validates an email address
///
/// Checks for:
/// - a non-empty value
/// - a local part of letters, digits and `._%+-`
/// - a domain ending in an alphabetic TLD of at least 2 characters
pub fn validate_email(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Email is required");
    }

    if !EMAIL_REGEX.is_match(value) {
        return ValidationResult::fail("Please enter a valid email address");
    }

    ValidationResult::ok()
}
