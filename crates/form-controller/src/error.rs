// File: src/error.rs
// Purpose: Errors raised while building a form controller

use thiserror::Error;

/// Construction errors
///
/// Validation failures are data, not errors, and never show up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("a form needs at least one field")]
    Empty,

    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FormError::Empty.to_string(), "a form needs at least one field");
        assert_eq!(
            FormError::DuplicateField("email".into()).to_string(),
            "field `email` is declared more than once"
        );
    }
}
