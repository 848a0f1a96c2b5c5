//! Nutrition Planner WASM Module
//!
//! WebAssembly bindings so the presentation layer can run every calculation
//! in the browser. Values cross the boundary as JSON strings using the
//! shared crate's serde field names; errors are JSON objects tagged with
//! `kind` (`invalid_input`, `validation` or `domain`).

use nutrition_planner_shared::{
    self as shared, CalcError, ProfileDraft, ProfileUpdate, UserProfile, ValidationErrors,
    WizardStep,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Error payload handed back to JavaScript
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ErrorPayload {
    InvalidInput { message: String },
    Validation { errors: ValidationErrors },
    Domain { message: String },
}

impl From<CalcError> for ErrorPayload {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::Validation(errors) => ErrorPayload::Validation { errors },
            CalcError::Domain(err) => ErrorPayload::Domain {
                message: err.to_string(),
            },
        }
    }
}

impl From<ValidationErrors> for ErrorPayload {
    fn from(errors: ValidationErrors) -> Self {
        ErrorPayload::Validation { errors }
    }
}

fn encode_error(payload: ErrorPayload) -> String {
    serde_json::to_string(&payload)
        .unwrap_or_else(|_| r#"{"kind":"invalid_input","message":"unserializable error"}"#.into())
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| {
        encode_error(ErrorPayload::InvalidInput {
            message: e.to_string(),
        })
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| {
        encode_error(ErrorPayload::InvalidInput {
            message: e.to_string(),
        })
    })
}

fn parse_valid_profile(profile_json: &str) -> Result<UserProfile, String> {
    let profile: UserProfile = parse(profile_json)?;
    shared::validate_profile(&profile).map_err(|e| encode_error(e.into()))?;
    Ok(profile)
}

// ============================================================================
// JSON entry points (plain Rust, testable off-wasm)
// ============================================================================

pub fn maintenance_from_json(profile_json: &str) -> Result<i32, String> {
    let profile = parse_valid_profile(profile_json)?;
    Ok(shared::calculate_maintenance(&profile))
}

pub fn macros_from_json(profile_json: &str, maintenance_calories: i32) -> Result<String, String> {
    let profile = parse_valid_profile(profile_json)?;
    let macros = shared::calculate_macros(&profile, maintenance_calories)
        .map_err(|e| encode_error(CalcError::from(e).into()))?;
    to_json(&macros)
}

pub fn weight_loss_from_json(profile_json: &str) -> Result<String, String> {
    let profile = parse_valid_profile(profile_json)?;
    let result = shared::calculate_weight_loss_time(&profile)
        .map_err(|e| encode_error(CalcError::from(e).into()))?;
    to_json(&result)
}

pub fn plan_from_json(profile_json: &str) -> Result<String, String> {
    let profile: UserProfile = parse(profile_json)?;
    let plan = shared::calculate_plan(&profile).map_err(|e| encode_error(e.into()))?;
    to_json(&plan)
}

/// Step errors as a JSON object keyed by field (empty when the step is clean)
pub fn step_errors_from_json(step: u8, draft_json: &str) -> Result<String, String> {
    let step = WizardStep::from_number(step).ok_or_else(|| {
        encode_error(ErrorPayload::InvalidInput {
            message: format!("Unknown wizard step: {step}"),
        })
    })?;
    let draft: ProfileDraft = parse(draft_json)?;
    to_json(&shared::validate_step(step, &draft))
}

pub fn apply_update_from_json(draft_json: &str, update_json: &str) -> Result<String, String> {
    let mut draft: ProfileDraft = parse(draft_json)?;
    let update: ProfileUpdate = parse(update_json)?;
    draft.apply(update);
    to_json(&draft)
}

pub fn submit_from_json(draft_json: &str) -> Result<String, String> {
    let draft: ProfileDraft = parse(draft_json)?;
    shared::validate_all(&draft)
        .into_result()
        .map_err(|e| encode_error(e.into()))?;
    let profile = draft.finalize().map_err(|e| encode_error(e.into()))?;
    let plan = shared::calculate_plan(&profile).map_err(|e| encode_error(e.into()))?;
    to_json(&plan)
}

// ============================================================================
// wasm-bindgen exports
// ============================================================================

/// Draft with the form's default values
#[wasm_bindgen]
pub fn default_draft() -> Result<String, JsValue> {
    to_json(&ProfileDraft::default()).map_err(|e| JsValue::from_str(&e))
}

/// Merge one field edit into a draft
#[wasm_bindgen]
pub fn apply_update(draft_json: &str, update_json: &str) -> Result<String, JsValue> {
    apply_update_from_json(draft_json, update_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate one wizard step (1-3)
#[wasm_bindgen]
pub fn validate_step(step: u8, draft_json: &str) -> Result<String, JsValue> {
    step_errors_from_json(step, draft_json).map_err(|e| JsValue::from_str(&e))
}

/// Maintenance calories (Mifflin-St Jeor × activity multiplier)
#[wasm_bindgen]
pub fn calculate_maintenance(profile_json: &str) -> Result<i32, JsValue> {
    maintenance_from_json(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// Macro split for the profile's goal
#[wasm_bindgen]
pub fn calculate_macros(profile_json: &str, maintenance_calories: i32) -> Result<String, JsValue> {
    macros_from_json(profile_json, maintenance_calories).map_err(|e| JsValue::from_str(&e))
}

/// Weight-loss timeline. The caller decides whether a projection is wanted.
#[wasm_bindgen]
pub fn calculate_weight_loss_time(profile_json: &str) -> Result<String, JsValue> {
    weight_loss_from_json(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// Maintenance, macros and the projection when body fat is above target
#[wasm_bindgen]
pub fn calculate_plan(profile_json: &str) -> Result<String, JsValue> {
    plan_from_json(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate every step of a draft and compute its plan
#[wasm_bindgen]
pub fn submit_draft(draft_json: &str) -> Result<String, JsValue> {
    submit_from_json(draft_json).map_err(|e| JsValue::from_str(&e))
}
