// File: src/field.rs
// Purpose: Per-field state and the construction input for a field

use serde::{Deserialize, Serialize};

/// What the caller supplies for each field at construction
#[derive(Debug, Clone, Deserialize)]
pub struct InitialField<V> {
    /// Initial raw value, restored by `reset_form`
    #[serde(default)]
    pub value: String,
    pub validator: V,
}

impl<V> InitialField<V> {
    pub fn new(value: impl Into<String>, validator: V) -> Self {
        Self {
            value: value.into(),
            validator,
        }
    }
}

/// Observable state of one field
///
/// `error` is empty when the last evaluation passed. `touched` only ever goes
/// from false to true, except on a whole-form reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    pub error: String,
    pub touched: bool,
}

impl FieldState {
    /// Fresh, untouched state for a value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: String::new(),
            touched: false,
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Error text should be rendered
    pub fn shows_error(&self) -> bool {
        self.touched && self.has_error()
    }

    /// Field should be rendered as valid
    pub fn shows_success(&self) -> bool {
        self.touched && !self.has_error() && !self.value.is_empty()
    }

    /// The error text to render, if any
    pub fn visible_error(&self) -> Option<&str> {
        self.shows_error().then_some(self.error.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_error_is_hidden() {
        let state = FieldState {
            value: "bad".into(),
            error: "Please enter a valid email address".into(),
            touched: false,
        };
        assert!(state.has_error());
        assert!(!state.shows_error());
        assert!(!state.shows_success());
        assert_eq!(state.visible_error(), None);
    }

    #[test]
    fn test_touched_error_is_shown() {
        let state = FieldState {
            value: "bad".into(),
            error: "Please enter a valid email address".into(),
            touched: true,
        };
        assert!(state.shows_error());
        assert_eq!(
            state.visible_error(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_success_needs_a_value() {
        let mut state = FieldState::new("");
        state.touched = true;
        assert!(!state.shows_success());

        state.value = "https://example.com".into();
        assert!(state.shows_success());
    }
}
