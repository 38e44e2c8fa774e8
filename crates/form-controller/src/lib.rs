//! # form-controller
//!
//! Owns the live state of a multi-field form: per-field value, error and
//! touched flag, plus the submission lifecycle.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use form_controller::{FormController, InitialField, SubmitOutcome};
//! use form_controller::validators::FieldValidator;
//!
//! let form = FormController::new([
//!     ("email", InitialField::new("", FieldValidator::Email)),
//!     ("password", InitialField::new("", FieldValidator::Password)),
//! ])?;
//!
//! form.change_field("email", "user@example.com");
//! form.blur_field("email");
//!
//! let outcome = form
//!     .submit(|values| async move {
//!         send(values).await?;
//!         Ok(())
//!     })
//!     .await;
//!
//! if let SubmitOutcome::Invalid { errors } = outcome {
//!     // errors: field name -> message
//! }
//! ```
//!
//! ## Lifecycle
//!
//! - `change_field` stores the new value and re-runs the field's validator.
//! - `blur_field` marks the field touched and re-runs its validator. Errors
//!   are only meant to be displayed once a field is touched.
//! - `submit` validates everything, and only when no field fails hands a
//!   flat `name -> value` snapshot to the caller's async callback.
//! - `reset_form` restores the constructed values and clears all flags
//!   except an in-flight submission.
//!
//! The controller is a single-threaded handle: clones share state, and a
//! pending `submit` future does not block edits to the form.

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod presets;
pub mod snapshot;
pub mod submit;

pub use config::FormsConfig;
pub use controller::{FormController, SubscriptionId};
pub use error::FormError;
pub use field::{FieldState, InitialField};
pub use snapshot::{FieldErrors, FieldValues, FormSnapshot};
pub use submit::{SubmissionStatus, SubmitOutcome};

// Re-export validators so most users need a single dependency
pub use form_validators as validators;
