//! Generic string validators: required, username and URL

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationResult;

/// Minimum username length, counted in UTF-16 code units like a browser's
/// `String.length`
pub const USERNAME_MIN_LENGTH: usize = 4;

// Letters, digits, underscores and hyphens only
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Validates that a value is non-empty after trimming whitespace
///
/// `label` names the field in the failure message.
pub fn validate_required(value: &str, label: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::fail(format!("{} is required", label));
    }

    ValidationResult::ok()
}

/// Validates a username: required, 4+ characters, `[A-Za-z0-9_-]` only
pub fn validate_username(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Username is required");
    }

    if value.encode_utf16().count() < USERNAME_MIN_LENGTH {
        return ValidationResult::fail(format!(
            "Username must be at least {} characters long",
            USERNAME_MIN_LENGTH
        ));
    }

    if !USERNAME_REGEX.is_match(value) {
        return ValidationResult::fail(
            "Username can only contain letters, numbers, underscores and hyphens",
        );
    }

    ValidationResult::ok()
}

/// Validates an optional URL
///
/// The empty string passes. Anything else must parse as an absolute URL.
pub fn validate_url(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::ok();
    }

    match url::Url::parse(value) {
        Ok(_) => ValidationResult::ok(),
        Err(_) => ValidationResult::fail("Please enter a valid URL (e.g., https://example.com)"),
    }
}
