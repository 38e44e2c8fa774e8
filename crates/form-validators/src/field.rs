//! The fixed set of validators a form field can be registered with

use serde::Deserialize;

use crate::{
    validate_email, validate_password, validate_phone, validate_required, validate_url,
    validate_username, ValidationResult, Validator,
};

/// Validator attached to a form field for its whole lifetime
///
/// Every variant except `Custom` can be named from configuration or from
/// JavaScript as `{"kind": "email"}`, `{"kind": "required", "label": "Full name"}`, ...
#[derive(Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldValidator {
    /// Non-empty after trimming; `label` names the field in the message
    Required { label: String },
    Username,
    Email,
    Phone,
    Password,
    /// Optional absolute URL
    Url,
    /// Caller-supplied plain function
    #[serde(skip)]
    Custom(fn(&str) -> ValidationResult),
}

impl FieldValidator {
    pub fn required(label: impl Into<String>) -> Self {
        FieldValidator::Required {
            label: label.into(),
        }
    }

    /// Short name of the validator kind
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValidator::Required { .. } => "required",
            FieldValidator::Username => "username",
            FieldValidator::Email => "email",
            FieldValidator::Phone => "phone",
            FieldValidator::Password => "password",
            FieldValidator::Url => "url",
            FieldValidator::Custom(_) => "custom",
        }
    }
}

impl Validator for FieldValidator {
    fn validate(&self, value: &str) -> ValidationResult {
        match self {
            FieldValidator::Required { label } => validate_required(value, label),
            FieldValidator::Username => validate_username(value),
            FieldValidator::Email => validate_email(value),
            FieldValidator::Phone => validate_phone(value),
            FieldValidator::Password => validate_password(value),
            FieldValidator::Url => validate_url(value),
            FieldValidator::Custom(f) => f(value),
        }
    }
}

impl From<fn(&str) -> ValidationResult> for FieldValidator {
    fn from(f: fn(&str) -> ValidationResult) -> Self {
        FieldValidator::Custom(f)
    }
}

impl std::fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValidator::Required { label } => {
                f.debug_struct("Required").field("label", label).finish()
            }
            other => f.write_str(other.kind()),
        }
    }
}
