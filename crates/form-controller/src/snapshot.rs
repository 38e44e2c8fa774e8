// File: src/snapshot.rs
// Purpose: Read-only view of a form handed to the rendering layer

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::field::FieldState;
use crate::submit::SubmissionStatus;

/// Field name to error message, in field order
pub type FieldErrors = IndexMap<String, String>;

/// Field name to raw value, in field order
pub type FieldValues = IndexMap<String, String>;

/// State of every field plus the submission flags at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub fields: IndexMap<String, FieldState>,
    pub is_submitting: bool,
    pub is_submitted: bool,
}

impl FormSnapshot {
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Flat `name -> value` mapping, as passed to a submit callback
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|(name, state)| (name.clone(), state.value.clone()))
            .collect()
    }

    /// Every stored error, touched or not
    pub fn errors(&self) -> FieldErrors {
        self.fields
            .iter()
            .filter(|(_, state)| state.has_error())
            .map(|(name, state)| (name.clone(), state.error.clone()))
            .collect()
    }

    /// Only the errors the display gating allows to be shown
    pub fn visible_errors(&self) -> FieldErrors {
        self.fields
            .iter()
            .filter(|(_, state)| state.shows_error())
            .map(|(name, state)| (name.clone(), state.error.clone()))
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.fields.values().any(FieldState::has_error)
    }

    pub fn status(&self) -> SubmissionStatus {
        SubmissionStatus::from_flags(self.is_submitting, self.is_submitted)
    }
}
