//! Error types for the nutrition planner
//!
//! `ValidationError`s are user-facing and recoverable by re-input.
//! `DomainError`s mean a calculator was handed values validation should have
//! excluded; they are caller contract violations, not form messages.

use crate::models::ProfileField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: ProfileField,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: ProfileField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
            display_label: field.display_label().to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl std::error::Error for ValidationError {}

/// Field-level validation errors, at most one per field, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<ProfileField, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field is kept
    pub fn add(&mut self, error: ValidationError) {
        self.errors.entry(error.field).or_insert(error);
    }

    /// Record a `Result` from one of the primitive validators
    pub fn check(&mut self, field: ProfileField, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(ValidationError::new(field, &message));
        }
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for error in other.errors.into_values() {
            self.add(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: ProfileField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    /// `Ok(())` when no errors were recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(ValidationError::user_message).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.add(error);
        }
        errors
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = Self::new();
        for (key, field_errors) in source.field_errors() {
            let Some(field) = ProfileField::from_key(&key.to_string()) else {
                continue;
            };
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", error.code));
                errors.add(ValidationError::new(field, &message));
            }
        }
        errors
    }
}

/// Calculator contract violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Body fat percentage is unknown; weight-loss projection requires it")]
    MissingBodyFat,

    #[error("Body fat must be between 0 and 100%: {0}")]
    BodyFatOutOfRange(f64),

    #[error("Target body fat must be below 100%: {0}")]
    TargetBodyFatOutOfRange(f64),

    #[error("Fat loss rate must be positive: {0}")]
    NonPositiveFatLossRate(f64),

    #[error("No weight to lose: current {current_kg} kg, target {target_kg} kg")]
    NoWeightToLose { current_kg: f64, target_kg: f64 },

    #[error("Target calories must be positive: {0}")]
    NonPositiveTargetCalories(i32),

    #[error("Protein and carbohydrate calories exceed the target by {0} kcal")]
    NegativeFatAllowance(i32),

    #[error("Calorie values overflow for maintenance of {0} kcal")]
    CalorieOverflow(i32),
}

/// Errors returned by the plan orchestrator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = ValidationError::new(ProfileField::HeightCm, "Please enter a valid height");
        assert_eq!(err.field, ProfileField::HeightCm);
        assert_eq!(err.display_label, "Height (cm)");
        assert_eq!(err.user_message(), "Height (cm): Please enter a valid height");
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new(ProfileField::WeightKg, "first"));
        errors.add(ValidationError::new(ProfileField::WeightKg, "second"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ProfileField::WeightKg).unwrap().message, "first");
    }

    #[test]
    fn test_errors_iterate_in_form_order() {
        let errors: ValidationErrors = [
            ValidationError::new(ProfileField::AgeYears, "a"),
            ValidationError::new(ProfileField::WeightKg, "w"),
            ValidationError::new(ProfileField::HeightCm, "h"),
        ]
        .into_iter()
        .collect();

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![ProfileField::WeightKg, ProfileField::HeightCm, ProfileField::AgeYears]
        );
        assert_eq!(errors.to_string(), "Weight (kg): w; Height (cm): h; Age: a");
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        let errors = ValidationErrors::from(ValidationError::new(ProfileField::Gender, "bad"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_serializes_as_field_map() {
        let errors = ValidationErrors::from(ValidationError::new(
            ProfileField::WeightKg,
            "Please enter a valid weight",
        ));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["weight_kg"]["message"], "Please enter a valid weight");
    }

    #[test]
    fn test_calc_error_from() {
        let err: CalcError = DomainError::MissingBodyFat.into();
        assert!(matches!(err, CalcError::Domain(DomainError::MissingBodyFat)));
        assert!(err.to_string().starts_with("Domain error"));
    }
}
