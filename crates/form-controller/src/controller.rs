// File: src/controller.rs
// Purpose: Form controller owning field state and the submission lifecycle

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use form_validators::{assess_password, FieldValidator, PasswordStrength, Validator};
use indexmap::IndexMap;

use crate::config::FormsConfig;
use crate::error::FormError;
use crate::field::{FieldState, InitialField};
use crate::snapshot::{FieldErrors, FieldValues, FormSnapshot};
use crate::submit::{SubmissionStatus, SubmitOutcome};

/// A field as the controller stores it
struct Field<V> {
    state: FieldState,
    initial: String,
    validator: V,
}

impl<V: Validator> Field<V> {
    /// Run the validator, returning the error to store ("" when valid)
    fn evaluate(&self, value: &str) -> String {
        let result = self.validator.validate(value);
        if result.valid {
            String::new()
        } else {
            result.message
        }
    }
}

struct FormState<V> {
    fields: IndexMap<String, Field<V>>,
    is_submitting: bool,
    is_submitted: bool,
}

impl<V> FormState<V> {
    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self
                .fields
                .iter()
                .map(|(name, field)| (name.clone(), field.state.clone()))
                .collect(),
            is_submitting: self.is_submitting,
            is_submitted: self.is_submitted,
        }
    }
}

/// Handle returned by [`FormController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&FormSnapshot)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Clears `is_submitting` when a submission ends, including when its future
/// is dropped before the callback resolves
struct SubmittingGuard<V: Validator> {
    form: FormController<V>,
}

impl<V: Validator> Drop for SubmittingGuard<V> {
    fn drop(&mut self) {
        self.form.set_submitting(false);
    }
}

/// Controller for one form instance
///
/// Cloning yields another handle to the same form. All state lives on one
/// thread; a `submit` future releases its borrow before awaiting the callback,
/// so edits made while a submission is pending are applied immediately.
pub struct FormController<V: Validator = FieldValidator> {
    state: Rc<RefCell<FormState<V>>>,
    listeners: Rc<RefCell<Listeners>>,
    config: Rc<FormsConfig>,
}

impl<V: Validator> Clone for FormController<V> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            listeners: Rc::clone(&self.listeners),
            config: Rc::clone(&self.config),
        }
    }
}

impl<V: Validator> FormController<V> {
    /// Build a form from `name -> { value, validator }` pairs with default config
    pub fn new<I, K>(fields: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = (K, InitialField<V>)>,
        K: Into<String>,
    {
        Self::with_config(fields, FormsConfig::default())
    }

    /// Build a form with explicit configuration
    ///
    /// Field order is kept for snapshots, error maps and submitted values.
    pub fn with_config<I, K>(fields: I, config: FormsConfig) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = (K, InitialField<V>)>,
        K: Into<String>,
    {
        let mut map = IndexMap::new();

        for (name, initial) in fields {
            let name = name.into();
            if map.contains_key(&name) {
                return Err(FormError::DuplicateField(name));
            }
            map.insert(
                name,
                Field {
                    state: FieldState::new(initial.value.clone()),
                    initial: initial.value,
                    validator: initial.validator,
                },
            );
        }

        if map.is_empty() {
            return Err(FormError::Empty);
        }

        tracing::debug!("Form created with {} fields", map.len());

        Ok(Self {
            state: Rc::new(RefCell::new(FormState {
                fields: map,
                is_submitting: false,
                is_submitted: false,
            })),
            listeners: Rc::new(RefCell::new(Listeners::default())),
            config: Rc::new(config),
        })
    }

    /// Set a field's value and re-run its validator
    ///
    /// The error is stored even while the field is untouched, so a later blur
    /// shows it at once. Returns `false` for an unknown field, which is ignored.
    pub fn change_field(&self, name: &str, value: impl Into<String>) -> bool {
        let changed = {
            let mut state = self.state.borrow_mut();
            match state.fields.get_mut(name) {
                Some(field) => {
                    let value = value.into();
                    field.state.error = field.evaluate(&value);
                    field.state.value = value;
                    tracing::debug!(
                        "Field {} changed (touched: {}, valid: {})",
                        name,
                        field.state.touched,
                        field.state.error.is_empty()
                    );
                    true
                }
                None => {
                    tracing::warn!("Ignoring change for unknown field: {}", name);
                    false
                }
            }
        };

        if changed {
            self.notify();
        }
        changed
    }

    /// Mark a field touched and re-run its validator on the current value
    ///
    /// Returns `false` for an unknown field, which is ignored.
    pub fn blur_field(&self, name: &str) -> bool {
        let blurred = {
            let mut state = self.state.borrow_mut();
            match state.fields.get_mut(name) {
                Some(field) => {
                    field.state.touched = true;
                    field.state.error = field.evaluate(&field.state.value);
                    tracing::debug!(
                        "Field {} blurred (valid: {})",
                        name,
                        field.state.error.is_empty()
                    );
                    true
                }
                None => {
                    tracing::warn!("Ignoring blur for unknown field: {}", name);
                    false
                }
            }
        };

        if blurred {
            self.notify();
        }
        blurred
    }

    /// Evaluate a field's validator against `value` without touching state
    ///
    /// Returns the error message, or an empty string when the value passes or
    /// the field is unknown.
    pub fn validate_field(&self, name: &str, value: &str) -> String {
        self.state
            .borrow()
            .fields
            .get(name)
            .map(|field| field.evaluate(value))
            .unwrap_or_default()
    }

    /// Validate every field, mark them all touched, and return the failures
    ///
    /// The whole form is updated in one step. An empty map means valid.
    pub fn validate_all(&self) -> FieldErrors {
        let errors = {
            let mut state = self.state.borrow_mut();
            let mut errors = FieldErrors::new();

            for (name, field) in state.fields.iter_mut() {
                let error = field.evaluate(&field.state.value);
                if !error.is_empty() {
                    errors.insert(name.clone(), error.clone());
                }
                field.state.error = error;
                field.state.touched = true;
            }

            errors
        };

        tracing::debug!("Validated form: {} invalid field(s)", errors.len());
        self.notify();
        errors
    }

    /// Validate and, when every field passes, hand the values to `on_submit`
    ///
    /// See [`FormController::submit_or_else`].
    pub async fn submit<S, Fut>(&self, on_submit: S) -> SubmitOutcome
    where
        S: FnOnce(FieldValues) -> Fut,
        Fut: Future<Output = anyhow::Result<()>>,
    {
        self.submit_or_else(on_submit, |_| {}).await
    }

    /// Validate and, when every field passes, hand the values to `on_submit`;
    /// otherwise pass the errors to `on_error`
    ///
    /// `is_submitting` is true from the start of the call until it returns or
    /// its future is dropped.
    /// The values are captured before `on_submit` is awaited, so later edits do
    /// not leak into an in-flight submission. A failing callback is logged and
    /// reported as [`SubmitOutcome::Failed`]; form data is left as is. A second
    /// call while one is pending is not rejected.
    pub async fn submit_or_else<S, Fut, E>(&self, on_submit: S, on_error: E) -> SubmitOutcome
    where
        S: FnOnce(FieldValues) -> Fut,
        Fut: Future<Output = anyhow::Result<()>>,
        E: FnOnce(&FieldErrors),
    {
        self.set_submitting(true);
        let guard = SubmittingGuard { form: self.clone() };

        let errors = self.validate_all();
        if !errors.is_empty() {
            tracing::debug!("Submission blocked by {} invalid field(s)", errors.len());
            on_error(&errors);
            drop(guard);
            return SubmitOutcome::Invalid { errors };
        }

        let values = self.values();
        tracing::debug!("Submitting {} field value(s)", values.len());

        let outcome = match on_submit(values).await {
            Ok(()) => {
                self.state.borrow_mut().is_submitted = true;
                tracing::debug!("Form submitted");
                SubmitOutcome::Submitted
            }
            Err(err) => {
                tracing::error!("Form submission error: {:#}", err);
                SubmitOutcome::Failed {
                    reason: format!("{:#}", err),
                }
            }
        };

        drop(guard);
        outcome
    }

    /// Restore every field to its constructed value, untouched and error-free,
    /// and clear `is_submitted`
    ///
    /// `is_submitting` is left alone.
    pub fn reset_form(&self) {
        {
            let mut state = self.state.borrow_mut();
            for field in state.fields.values_mut() {
                field.state = FieldState::new(field.initial.clone());
            }
            state.is_submitted = false;
        }

        tracing::debug!("Form reset");
        self.notify();
    }

    /// Current state of all fields plus the submission flags
    pub fn snapshot(&self) -> FormSnapshot {
        self.state.borrow().snapshot()
    }

    /// Current state of one field
    pub fn field(&self, name: &str) -> Option<FieldState> {
        self.state
            .borrow()
            .fields
            .get(name)
            .map(|field| field.state.clone())
    }

    /// Flat `name -> value` mapping in field order
    pub fn values(&self) -> FieldValues {
        self.state
            .borrow()
            .fields
            .iter()
            .map(|(name, field)| (name.clone(), field.state.value.clone()))
            .collect()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.state.borrow().fields.keys().cloned().collect()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().is_submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state.borrow().is_submitted
    }

    pub fn status(&self) -> SubmissionStatus {
        let state = self.state.borrow();
        SubmissionStatus::from_flags(state.is_submitting, state.is_submitted)
    }

    /// Strength of a field's current value, bucketed with the configured
    /// thresholds
    pub fn password_strength(&self, name: &str) -> Option<PasswordStrength> {
        self.state
            .borrow()
            .fields
            .get(name)
            .map(|field| assess_password(&field.state.value, &self.config.strength))
    }

    pub fn config(&self) -> &FormsConfig {
        &self.config
    }

    /// Call `listener` with a fresh snapshot after every state change
    pub fn subscribe(&self, listener: impl Fn(&FormSnapshot) + 'static) -> SubscriptionId {
        let mut listeners = self.listeners.borrow_mut();
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        let listener: Listener = Rc::new(listener);
        listeners.entries.push((id, listener));
        id
    }

    /// Remove a listener; `false` if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
        listeners.entries.len() != before
    }

    fn set_submitting(&self, submitting: bool) {
        self.state.borrow_mut().is_submitting = submitting;
        tracing::debug!("Submission status: {}", self.status());
        self.notify();
    }

    // Listeners run with no borrow held, so they may read or edit the form
    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        if listeners.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
