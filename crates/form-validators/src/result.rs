//! Outcome of a single validator call

use serde::{Deserialize, Serialize};

/// Result of validating one raw field value
///
/// `message` is empty when `valid` is true, otherwise it holds the text shown
/// next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// A passing result with an empty message
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result carrying a user-facing message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The message a form stores as the field's error: empty when valid
    pub fn error_message(&self) -> &str {
        if self.valid {
            ""
        } else {
            &self.message
        }
    }

    /// Convert into a `Result`, with the message as the error
    pub fn into_result(self) -> Result<(), String> {
        if self.valid {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_has_empty_message() {
        let result = ValidationResult::ok();
        assert!(result.is_valid());
        assert_eq!(result.error_message(), "");
        assert_eq!(result.into_result(), Ok(()));
    }

    #[test]
    fn test_fail_keeps_message() {
        let result = ValidationResult::fail("Email is required");
        assert!(!result.is_valid());
        assert_eq!(result.error_message(), "Email is required");
        assert_eq!(result.into_result(), Err("Email is required".to_string()));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let json = serde_json::to_value(ValidationResult::fail("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": false, "message": "nope" }));
    }
}
