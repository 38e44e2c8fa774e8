//! Form Controller WASM
//!
//! WebAssembly bindings exposing the form controller and validators to
//! JavaScript. The page keeps a `FormHandle`, forwards input/blur events to it
//! and re-reads `snapshot()` to render.

use form_controller::validators::{self, FieldValidator, StrengthThresholds, Validator};
use form_controller::{FieldValues, FormController, FormsConfig, InitialField, SubmitOutcome};
use indexmap::IndexMap;
use js_sys::{Function, Promise};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

/// Field specs as sent from JavaScript:
/// `{ email: { value: "", validator: { kind: "email" } }, ... }`
pub type FieldSpecs = IndexMap<String, InitialField<FieldValidator>>;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Maps become plain objects rather than `Map`s
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn js_error(value: JsValue) -> anyhow::Error {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    anyhow::anyhow!(message)
}

/// Call the page's submit callback; a returned Promise is awaited
async fn call_submit(on_submit: &Function, values: &FieldValues) -> anyhow::Result<()> {
    let values = to_js(values).map_err(js_error)?;
    let returned = on_submit.call1(&JsValue::NULL, &values).map_err(js_error)?;
    JsFuture::from(Promise::resolve(&returned))
        .await
        .map_err(js_error)?;
    Ok(())
}

/// A live form owned by the page
#[wasm_bindgen]
pub struct FormHandle {
    form: FormController,
}

#[wasm_bindgen]
impl FormHandle {
    /// Create a form from field specs and an optional config object
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// const form = new FormHandle({
    ///     fullName: { value: '', validator: { kind: 'required', label: 'Full name' } },
    ///     email: { value: '', validator: { kind: 'email' } },
    /// }, { strength: { good_below: 85 } });
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(fields: JsValue, config: JsValue) -> Result<FormHandle, JsValue> {
        let fields: FieldSpecs = serde_wasm_bindgen::from_value(fields)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?;

        let config = if config.is_undefined() || config.is_null() {
            FormsConfig::default()
        } else {
            let config: FormsConfig = serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
            config
                .validate()
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
            config
        };

        let form = FormController::with_config(fields, config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(FormHandle { form })
    }

    #[wasm_bindgen(js_name = changeField)]
    pub fn change_field(&self, name: &str, value: String) -> bool {
        self.form.change_field(name, value)
    }

    #[wasm_bindgen(js_name = blurField)]
    pub fn blur_field(&self, name: &str) -> bool {
        self.form.blur_field(name)
    }

    /// Error message for `value` in field `name`, without changing state
    #[wasm_bindgen(js_name = validateField)]
    pub fn validate_field(&self, name: &str, value: &str) -> String {
        self.form.validate_field(name, value)
    }

    /// Validate every field; returns `{ name: message }` for failures
    #[wasm_bindgen(js_name = validateAll)]
    pub fn validate_all(&self) -> Result<JsValue, JsValue> {
        to_js(&self.form.validate_all())
    }

    /// `{ fields: { name: { value, error, touched } }, isSubmitting, isSubmitted }`
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.form.snapshot())
    }

    #[wasm_bindgen(getter, js_name = isSubmitting)]
    pub fn is_submitting(&self) -> bool {
        self.form.is_submitting()
    }

    #[wasm_bindgen(getter, js_name = isSubmitted)]
    pub fn is_submitted(&self) -> bool {
        self.form.is_submitted()
    }

    #[wasm_bindgen(js_name = resetForm)]
    pub fn reset_form(&self) {
        self.form.reset_form();
    }

    /// `{ score, level }` for a field's current value, `undefined` for unknown fields
    #[wasm_bindgen(js_name = passwordStrength)]
    pub fn password_strength(&self, name: &str) -> Result<JsValue, JsValue> {
        match self.form.password_strength(name) {
            Some(strength) => to_js(&strength),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Validate and submit
    ///
    /// `onSubmit(values)` may return a Promise; a rejection counts as a failed
    /// submission. `onError(errors)` runs when validation blocks the submit.
    /// Resolves to `{ status: "invalid" | "submitted" | "failed", ... }`.
    pub fn submit(&self, on_submit: Function, on_error: Option<Function>) -> Promise {
        let form = self.form.clone();

        future_to_promise(async move {
            let outcome = form
                .submit_or_else(
                    move |values| async move { call_submit(&on_submit, &values).await },
                    move |errors| {
                        if let Some(callback) = &on_error {
                            let result = to_js(errors)
                                .and_then(|errors| callback.call1(&JsValue::NULL, &errors));
                            if let Err(err) = result {
                                web_sys::console::error_2(&"onError callback failed:".into(), &err);
                            }
                        }
                    },
                )
                .await;

            if let SubmitOutcome::Failed { reason } = &outcome {
                web_sys::console::error_1(&format!("Form submission error: {}", reason).into());
            }

            to_js(&outcome)
        })
    }
}

/// Run one named validator
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validate({ kind: 'password' }, 'abcdefgh');
/// // { valid: false, message: 'Password must include at least one uppercase letter, number, special character' }
/// ```
#[wasm_bindgen]
pub fn validate(validator: JsValue, value: &str) -> Result<JsValue, JsValue> {
    let validator: FieldValidator = serde_wasm_bindgen::from_value(validator)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse validator: {}", e)))?;
    to_js(&validator.validate(value))
}

/// Password score from 0 to 100
#[wasm_bindgen(js_name = calculatePasswordStrength)]
pub fn calculate_password_strength_js(password: &str) -> u8 {
    validators::calculate_password_strength(password)
}

/// `{ score, level }` with the default buckets
#[wasm_bindgen(js_name = assessPassword)]
pub fn assess_password_js(password: &str) -> Result<JsValue, JsValue> {
    to_js(&validators::assess_password(password, &StrengthThresholds::default()))
}
