// File: src/submit.rs
// Purpose: Submission lifecycle types

use serde::{Deserialize, Serialize};

use crate::snapshot::FieldErrors;

/// Where a form is in its submission lifecycle
///
/// `idle -> submitting -> {idle, submitted}`; `submitted` only returns to
/// `idle` through a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionStatus {
    /// An in-flight submission wins over an earlier success
    pub fn from_flags(is_submitting: bool, is_submitted: bool) -> Self {
        match (is_submitting, is_submitted) {
            (true, _) => SubmissionStatus::Submitting,
            (false, true) => SubmissionStatus::Submitted,
            (false, false) => SubmissionStatus::Idle,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Submitting => write!(f, "submitting"),
            SubmissionStatus::Submitted => write!(f, "submitted"),
        }
    }
}

/// How one `submit` call ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// At least one field failed; the submit callback never ran
    Invalid { errors: FieldErrors },
    /// The submit callback completed
    Submitted,
    /// The submit callback failed; form data is kept for a retry
    Failed { reason: String },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_flags() {
        assert_eq!(SubmissionStatus::from_flags(false, false), SubmissionStatus::Idle);
        assert_eq!(SubmissionStatus::from_flags(true, false), SubmissionStatus::Submitting);
        assert_eq!(SubmissionStatus::from_flags(true, true), SubmissionStatus::Submitting);
        assert_eq!(SubmissionStatus::from_flags(false, true), SubmissionStatus::Submitted);
    }

    #[test]
    fn test_outcome_serialization() {
        let failed = SubmitOutcome::Failed {
            reason: "network down".into(),
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({ "status": "failed", "reason": "network down" })
        );
        assert_eq!(
            serde_json::to_value(SubmitOutcome::Submitted).unwrap(),
            serde_json::json!({ "status": "submitted" })
        );
    }
}
