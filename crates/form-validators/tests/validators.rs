// Behaviour of the public validator surface as a form sees it

use form_validators::{
    calculate_password_strength, validate_email, validate_password, validate_phone,
    validate_required, validate_url, validate_username, FieldValidator, Validator,
};
use pretty_assertions::assert_eq;

#[test]
fn empty_input_is_required_everywhere_but_url() {
    let cases = [
        (validate_required("", "Full name"), "Full name is required"),
        (validate_username(""), "Username is required"),
        (validate_email(""), "Email is required"),
        (validate_phone(""), "Phone number is required"),
        (validate_password(""), "Password is required"),
    ];

    for (result, message) in cases {
        assert!(!result.valid);
        assert_eq!(result.message, message);
    }

    let url = validate_url("");
    assert!(url.valid);
    assert_eq!(url.message, "");
}

#[test]
fn validators_are_deterministic() {
    let validators = [
        FieldValidator::Username,
        FieldValidator::Email,
        FieldValidator::Phone,
        FieldValidator::Password,
        FieldValidator::Url,
        FieldValidator::required("Name"),
    ];

    for validator in &validators {
        for value in ["", "abc", "Abcdef1!", "user@example.com", "https://example.com"] {
            assert_eq!(validator.validate(value), validator.validate(value));
        }
    }
}

#[test]
fn passing_results_carry_no_message() {
    for result in [
        validate_username("ab_cd-12"),
        validate_email("user@example.com"),
        validate_phone("+1 555-123-4567"),
        validate_password("Abcdef1!"),
        validate_url("https://example.com"),
    ] {
        assert!(result.valid);
        assert!(result.message.is_empty());
    }
}

#[test]
fn strength_of_mixed_password() {
    let score = calculate_password_strength("Aa1!Aa1!");
    assert!(score >= 80);
    assert!(score <= 100);
}
