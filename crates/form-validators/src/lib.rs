//! Form Validators
//!
//! Pure validation functions for the fields of a live form. Every validator is
//! total: it maps a raw input string to a [`ValidationResult`] and never fails.
//! The password strength scorer is separate from pass/fail validation and
//! returns a score in `0..=100`.

pub mod email;
pub mod field;
pub mod password;
pub mod phone;
pub mod result;
pub mod string;

// Re-export all validators
pub use email::*;
pub use field::*;
pub use password::*;
pub use phone::*;
pub use result::*;
pub use string::*;

/// A validation capability for a single field value
///
/// Implementations must be deterministic and free of side effects, since a
/// form controller may call them on every keystroke.
pub trait Validator {
    /// Classify `value` as valid or invalid
    fn validate(&self, value: &str) -> ValidationResult;
}
