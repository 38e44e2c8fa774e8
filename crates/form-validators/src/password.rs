//! Password validation and strength scoring

use serde::{Deserialize, Serialize};

use crate::ValidationResult;

/// Minimum password length, counted in UTF-16 code units like a browser's
/// `String.length`
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Characters that count as "special" for validation and scoring
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Validates a password: required, 8+ characters, and at least one
/// uppercase letter, lowercase letter, digit and special character
///
/// Every missing category is reported in a single message, in that order.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::fail("Password is required");
    }

    if password.encode_utf16().count() < PASSWORD_MIN_LENGTH {
        return ValidationResult::fail(format!(
            "Password must be at least {} characters long",
            PASSWORD_MIN_LENGTH
        ));
    }

    let criteria = [
        (password.chars().any(|c| c.is_ascii_uppercase()), "uppercase letter"),
        (password.chars().any(|c| c.is_ascii_lowercase()), "lowercase letter"),
        (password.chars().any(|c| c.is_ascii_digit()), "number"),
        (password.chars().any(is_special), "special character"),
    ];

    let missing: Vec<&str> = criteria
        .iter()
        .filter(|(present, _)| !present)
        .map(|(_, name)| *name)
        .collect();

    if missing.is_empty() {
        ValidationResult::ok()
    } else {
        ValidationResult::fail(format!(
            "Password must include at least one {}",
            missing.join(", ")
        ))
    }
}

/// Scores a password from 0 to 100
///
/// - length: 2 points per UTF-16 code unit, capped at 25
/// - 15 points each for an uppercase letter, lowercase letter, digit and
///   special character
/// - 5 bonus points each for two or more uppercase letters, digits and
///   special characters
pub fn calculate_password_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let count = |pred: fn(char) -> bool| password.chars().filter(|&c| pred(c)).count();

    let length = password.encode_utf16().count();
    let uppercase = count(|c| c.is_ascii_uppercase());
    let lowercase = count(|c| c.is_ascii_lowercase());
    let digits = count(|c| c.is_ascii_digit());
    let special = count(is_special);

    let length_points = length.saturating_mul(2).min(25);
    let variety_points = [uppercase, lowercase, digits, special]
        .iter()
        .filter(|&&n| n > 0)
        .count()
        * 15;
    let bonus_points = [uppercase, digits, special]
        .iter()
        .filter(|&&n| n >= 2)
        .count()
        * 5;

    (length_points + variety_points + bonus_points).min(100) as u8
}

/// Display bucket for a strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    /// Score of zero, nothing typed yet
    Empty,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Label shown next to a strength meter
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Empty => "",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Upper bounds (exclusive) of the weak, fair and good buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthThresholds {
    pub weak_below: u8,
    pub fair_below: u8,
    pub good_below: u8,
}

impl StrengthThresholds {
    /// Buckets only make sense with `0 < weak_below <= fair_below <= good_below`
    pub fn is_ordered(&self) -> bool {
        self.weak_below > 0
            && self.weak_below <= self.fair_below
            && self.fair_below <= self.good_below
    }

    /// Bucket a score
    pub fn level(&self, score: u8) -> StrengthLevel {
        match score {
            0 => StrengthLevel::Empty,
            s if s < self.weak_below => StrengthLevel::Weak,
            s if s < self.fair_below => StrengthLevel::Fair,
            s if s < self.good_below => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            weak_below: 30,
            fair_below: 60,
            good_below: 80,
        }
    }
}

/// Score and bucket for one password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub level: StrengthLevel,
}

/// Score a password and bucket it with `thresholds`
pub fn assess_password(password: &str, thresholds: &StrengthThresholds) -> PasswordStrength {
    let score = calculate_password_strength(password);
    PasswordStrength {
        score,
        level: thresholds.level(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("Abcdef1!").is_valid());
        assert!(validate_password("Secure@Pass1").is_valid());
        assert!(validate_password("x{Y}z:9<>").is_valid());
    }

    #[test]
    fn test_required_and_length() {
        assert_eq!(validate_password("").message, "Password is required");
        assert_eq!(
            validate_password("Ab1!").message,
            "Password must be at least 8 characters long"
        );
    }

    #[rstest]
    #[case("abcdefgh", "Password must include at least one uppercase letter, number, special character")]
    #[case("ABCDEFGH", "Password must include at least one lowercase letter, number, special character")]
    #[case("Abcdefgh", "Password must include at least one number, special character")]
    #[case("Abcdefg1", "Password must include at least one special character")]
    #[case("12345678", "Password must include at least one uppercase letter, lowercase letter, special character")]
    // `-` and `_` are not in the special set
    #[case("Abcdef1-_", "Password must include at least one special character")]
    fn test_missing_criteria(#[case] password: &str, #[case] message: &str) {
        let result = validate_password(password);
        assert!(!result.is_valid());
        assert_eq!(result.message, message);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Six characters, eight UTF-16 code units
        assert!(validate_password("Aa1!😀😀").is_valid());
        assert_eq!(calculate_password_strength("😀"), 4);
    }

    #[test]
    fn test_strength_empty_is_zero() {
        assert_eq!(calculate_password_strength(""), 0);
    }

    #[rstest]
    // 2 + 15
    #[case("a", 17)]
    // 16 + 15
    #[case("abcdefgh", 31)]
    // 16 + 60 + 15
    #[case("Aa1!Aa1!", 91)]
    // 25 + 15 + 15 + 5
    #[case("abcdefghijklm12", 60)]
    // 25 + 60 + 15, clamped
    #[case("AAbb11!!ccddeeff", 100)]
    fn test_strength_scores(#[case] password: &str, #[case] expected: u8) {
        assert_eq!(calculate_password_strength(password), expected);
    }

    #[test]
    fn test_strength_never_exceeds_100() {
        let long = "Aa1!".repeat(50);
        assert_eq!(calculate_password_strength(&long), 100);
    }

    #[test]
    fn test_strength_levels() {
        let thresholds = StrengthThresholds::default();
        assert_eq!(thresholds.level(0), StrengthLevel::Empty);
        assert_eq!(thresholds.level(1), StrengthLevel::Weak);
        assert_eq!(thresholds.level(29), StrengthLevel::Weak);
        assert_eq!(thresholds.level(30), StrengthLevel::Fair);
        assert_eq!(thresholds.level(60), StrengthLevel::Good);
        assert_eq!(thresholds.level(80), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::Empty.label(), "");
        assert_eq!(StrengthLevel::Good.to_string(), "Good");
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(StrengthThresholds::default().is_ordered());

        let inverted = StrengthThresholds {
            weak_below: 70,
            fair_below: 60,
            good_below: 80,
        };
        assert!(!inverted.is_ordered());

        let zero = StrengthThresholds {
            weak_below: 0,
            ..StrengthThresholds::default()
        };
        assert!(!zero.is_ordered());
    }

    #[test]
    fn test_assess_password() {
        let strength = assess_password("Aa1!Aa1!", &StrengthThresholds::default());
        assert_eq!(strength.score, 91);
        assert_eq!(strength.level, StrengthLevel::Strong);

        let strict = StrengthThresholds {
            weak_below: 50,
            fair_below: 95,
            good_below: 99,
        };
        assert_eq!(assess_password("Aa1!Aa1!", &strict).level, StrengthLevel::Fair);
    }
}
