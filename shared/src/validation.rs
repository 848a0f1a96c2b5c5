//! Input validation
//!
//! The form is a three-step wizard. Each step validates only the fields it
//! shows; submitting validates every step. The goals step also checks that
//! the chosen goal leaves a usable calorie budget. Messages produced here are
//! the only user-facing errors in the crate.

use crate::errors::{DomainError, ValidationError, ValidationErrors};
use crate::macros::allocate_macros;
use crate::maintenance::calculate_maintenance_mifflin;
use crate::models::{
    ActivityLevel, FitnessGoal, Gender, ProfileDraft, ProfileField, UserProfile, MAX_AGE_YEARS,
    MAX_HEIGHT_CM, MAX_WEIGHT_KG,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

// ============================================================================
// Wizard steps
// ============================================================================

/// Steps of the input wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Basics,
    BodyComposition,
    Goals,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Basics, WizardStep::BodyComposition, WizardStep::Goals];

    /// 1-based step number shown in the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Basics => 1,
            WizardStep::BodyComposition => 2,
            WizardStep::Goals => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Basics => "Basic Information",
            WizardStep::BodyComposition => "Body Composition & Activity",
            WizardStep::Goals => "Fitness Goals",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Basics => Some(WizardStep::BodyComposition),
            WizardStep::BodyComposition => Some(WizardStep::Goals),
            WizardStep::Goals => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::Basics => None,
            WizardStep::BodyComposition => Some(WizardStep::Basics),
            WizardStep::Goals => Some(WizardStep::BodyComposition),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

// ============================================================================
// Primitive validators
// ============================================================================

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err("Please enter a valid weight".to_string());
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(format!("Weight must be at most {MAX_WEIGHT_KG} kg"));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height(height_cm: f64) -> Result<(), String> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err("Please enter a valid height".to_string());
    }
    if height_cm > MAX_HEIGHT_CM {
        return Err(format!("Height must be at most {MAX_HEIGHT_CM} cm"));
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age_years: u32) -> Result<(), String> {
    if age_years == 0 {
        return Err("Please enter a valid age".to_string());
    }
    if age_years > MAX_AGE_YEARS {
        return Err(format!("Age must be at most {MAX_AGE_YEARS} years"));
    }
    Ok(())
}

/// Validate percentage value (0-100)
pub fn validate_percentage(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Percentage must be a valid number".to_string());
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100".to_string());
    }
    Ok(())
}

/// Validate weekly fat loss rate (percent of body weight)
pub fn validate_fat_loss_rate(rate_percent: f64) -> Result<(), String> {
    if !rate_percent.is_finite() {
        return Err("Fat loss rate must be a valid number".to_string());
    }
    if rate_percent <= 0.0 {
        return Err("Fat loss rate must be greater than 0%".to_string());
    }
    Ok(())
}

/// Check that a goal leaves a usable calorie budget for the body measurements
///
/// Target calories must be positive and must cover protein and carbohydrates.
pub fn validate_calorie_budget(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    goal: FitnessGoal,
) -> Result<(), String> {
    let maintenance =
        calculate_maintenance_mifflin(weight_kg, height_cm, age_years, gender, activity_level);

    match allocate_macros(weight_kg, goal, maintenance) {
        Ok(macros) if macros.fat.calories < 0 => Err(format!(
            "Protein and carbohydrates need {} kcal more than the {} kcal target; choose a different goal",
            macros.fat.calories.saturating_neg(),
            macros.calories
        )),
        Ok(_) => Ok(()),
        Err(DomainError::NonPositiveTargetCalories(target)) => Err(format!(
            "This goal sets a daily target of {target} kcal; choose a different goal"
        )),
        Err(_) => Err("Calorie target is out of range; check your measurements".to_string()),
    }
}

fn required<T>(
    errors: &mut ValidationErrors,
    field: ProfileField,
    value: Option<T>,
    missing: &str,
    check: impl FnOnce(T) -> Result<(), String>,
) {
    match value {
        Some(v) => errors.check(field, check(v)),
        None => errors.add(ValidationError::new(field, missing)),
    }
}

// ============================================================================
// Step and profile validation
// ============================================================================

/// Validate the fields shown on one wizard step
pub fn validate_step(step: WizardStep, draft: &ProfileDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match step {
        WizardStep::Basics => {
            required(
                &mut errors,
                ProfileField::WeightKg,
                draft.weight_kg,
                "Please enter a valid weight",
                validate_weight,
            );
            required(
                &mut errors,
                ProfileField::HeightCm,
                draft.height_cm,
                "Please enter a valid height",
                validate_height,
            );
            required(
                &mut errors,
                ProfileField::AgeYears,
                draft.age_years,
                "Please enter a valid age",
                validate_age,
            );
        }
        WizardStep::BodyComposition => {
            // Unknown body fat is allowed; it only disables the projection
            if let Some(body_fat) = draft.body_fat_percent {
                errors.check(ProfileField::BodyFatPercent, validate_percentage(body_fat));
            }
        }
        WizardStep::Goals => {
            required(
                &mut errors,
                ProfileField::TargetBodyFatPercent,
                draft.target_body_fat_percent,
                "Please select a target body fat percentage",
                validate_percentage,
            );
            required(
                &mut errors,
                ProfileField::FatLossRatePercent,
                draft.fat_loss_rate_percent,
                "Please select a fat loss rate",
                validate_fat_loss_rate,
            );

            // Needs the first step's measurements; skipped until they are valid
            if let (Some(weight_kg), Some(height_cm), Some(age_years)) =
                (draft.weight_kg, draft.height_cm, draft.age_years)
            {
                if validate_step(WizardStep::Basics, draft).is_empty() {
                    errors.check(
                        ProfileField::FitnessGoal,
                        validate_calorie_budget(
                            weight_kg,
                            height_cm,
                            age_years,
                            draft.gender,
                            draft.activity_level,
                            draft.fitness_goal,
                        ),
                    );
                }
            }
        }
    }

    errors
}

/// Validate every step, as done before calculation
pub fn validate_all(draft: &ProfileDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for step in WizardStep::ALL {
        errors.merge(validate_step(step, draft));
    }
    errors
}

/// Check a finalized profile at the calculation boundary
///
/// Catches profiles built directly rather than through the wizard.
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationErrors> {
    let mut errors = match profile.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(source) => ValidationErrors::from(source),
    };

    // Range rules let NaN through
    let reals = [
        (ProfileField::WeightKg, Some(profile.weight_kg)),
        (ProfileField::HeightCm, Some(profile.height_cm)),
        (ProfileField::BodyFatPercent, profile.body_fat_percent),
        (ProfileField::TargetBodyFatPercent, Some(profile.target_body_fat_percent)),
        (ProfileField::FatLossRatePercent, Some(profile.fat_loss_rate_percent)),
    ];
    for (field, value) in reals {
        if matches!(value, Some(v) if !v.is_finite()) {
            errors.add(ValidationError::new(field, "Must be a valid number"));
        }
    }

    if errors.is_empty() {
        errors.check(
            ProfileField::FitnessGoal,
            validate_calorie_budget(
                profile.weight_kg,
                profile.height_cm,
                profile.age_years,
                profile.gender,
                profile.activity_level,
                profile.fitness_goal,
            ),
        );
    }

    errors.into_result()
}

impl ProfileDraft {
    /// Validate every step and build the immutable profile
    pub fn finalize(&self) -> Result<UserProfile, ValidationErrors> {
        validate_all(self).into_result()?;

        match (
            self.weight_kg,
            self.height_cm,
            self.age_years,
            self.target_body_fat_percent,
            self.fat_loss_rate_percent,
        ) {
            (Some(weight_kg), Some(height_cm), Some(age_years), Some(target), Some(rate)) => {
                Ok(UserProfile {
                    weight_kg,
                    height_cm,
                    age_years,
                    gender: self.gender,
                    body_fat_percent: self.body_fat_percent,
                    activity_level: self.activity_level,
                    fitness_goal: self.fitness_goal,
                    target_body_fat_percent: target,
                    fat_loss_rate_percent: rate,
                })
            }
            // validate_all reports every missing required field
            _ => Err(validate_all(self)),
        }
    }
}
