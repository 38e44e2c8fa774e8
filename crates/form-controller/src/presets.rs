// File: src/presets.rs
// Purpose: Ready-made field sets

use form_validators::FieldValidator;

use crate::field::InitialField;

/// The sign-up form: username, full name, email, phone, password and an
/// optional website, all starting empty
pub fn registration_form() -> Vec<(&'static str, InitialField<FieldValidator>)> {
    vec![
        ("username", InitialField::new("", FieldValidator::Username)),
        ("fullName", InitialField::new("", FieldValidator::required("Full name"))),
        ("email", InitialField::new("", FieldValidator::Email)),
        ("phone", InitialField::new("", FieldValidator::Phone)),
        ("password", InitialField::new("", FieldValidator::Password)),
        ("website", InitialField::new("", FieldValidator::Url)),
    ]
}
