//! Plan orchestration
//!
//! Runs the calculators in order for one submitted profile and guards the
//! cases the calculators themselves do not check.

use crate::errors::{CalcError, DomainError};
use crate::macros::calculate_macros;
use crate::maintenance::calculate_maintenance;
use crate::models::UserProfile;
use crate::types::NutritionPlan;
use crate::validation::validate_profile;
use crate::weight_loss::calculate_weight_loss_time;
use tracing::debug;

/// Compute maintenance, macros and (when wanted) the weight-loss projection
pub fn calculate_plan(profile: &UserProfile) -> Result<NutritionPlan, CalcError> {
    validate_profile(profile)?;

    let maintenance_calories = calculate_maintenance(profile);

    // Validation already rejects these budgets; the guards stay for callers
    // that reach the calculators some other way
    let macros = calculate_macros(profile, maintenance_calories)?;
    if macros.fat.calories < 0 {
        return Err(DomainError::NegativeFatAllowance(macros.fat.calories.saturating_neg()).into());
    }

    let weight_loss = if profile.wants_weight_loss_projection() {
        Some(calculate_weight_loss_time(profile)?)
    } else {
        debug!(
            body_fat = ?profile.body_fat_percent,
            target_body_fat = profile.target_body_fat_percent,
            "Skipping weight-loss projection"
        );
        None
    };

    debug!(
        maintenance_calories,
        target_calories = macros.calories,
        goal = %profile.fitness_goal,
        projected = weight_loss.is_some(),
        "Nutrition plan calculated"
    );

    Ok(NutritionPlan {
        maintenance_calories,
        macros,
        weight_loss,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, FitnessGoal, Gender, ProfileField};

    fn reference_profile() -> UserProfile {
        UserProfile {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 25,
            gender: Gender::Male,
            body_fat_percent: Some(15.0),
            activity_level: ActivityLevel::Moderate,
            fitness_goal: FitnessGoal::Maintain,
            target_body_fat_percent: 10.0,
            fat_loss_rate_percent: 1.0,
        }
    }

    #[test]
    fn test_full_plan() {
        let plan = calculate_plan(&reference_profile()).unwrap();
        assert_eq!(plan.maintenance_calories, 2594);
        assert_eq!(plan.macros.calories, 2594);
        assert_eq!(plan.macros.protein.grams, 112);

        // 70 × 0.85 / 0.9 = 66.11 kg; 3.89 kg at 0.7 kg/week
        let projection = plan.weight_loss.unwrap();
        assert!((projection.lean_body_mass_kg - 59.5).abs() < 1e-9);
        assert!((projection.weekly_loss_kg - 0.7).abs() < 1e-9);
        assert!((projection.weeks_to_goal - 5.556).abs() < 1e-3);
    }

    #[test]
    fn test_projection_skipped_when_at_or_below_target() {
        let mut profile = reference_profile();
        profile.body_fat_percent = Some(10.0);
        assert!(calculate_plan(&profile).unwrap().weight_loss.is_none());

        profile.body_fat_percent = Some(8.0);
        assert!(calculate_plan(&profile).unwrap().weight_loss.is_none());
    }

    #[test]
    fn test_projection_skipped_when_body_fat_unknown() {
        let mut profile = reference_profile();
        profile.body_fat_percent = None;
        let plan = calculate_plan(&profile).unwrap();
        assert!(plan.weight_loss.is_none());
        assert_eq!(plan.macros.calories, 2594);
    }

    #[test]
    fn test_invalid_profile_is_validation_error() {
        let mut profile = reference_profile();
        profile.age_years = 0;
        match calculate_plan(&profile) {
            Err(CalcError::Validation(errors)) => assert!(errors.contains(ProfileField::AgeYears)),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn assert_goal_rejected(profile: &UserProfile) {
        match calculate_plan(profile) {
            Err(CalcError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains(ProfileField::FitnessGoal));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_target_calories() {
        // BMR = 10 + 6.25 - 500 + 5 = -478.75
        let mut profile = reference_profile();
        profile.weight_kg = 1.0;
        profile.height_cm = 1.0;
        profile.age_years = 100;
        profile.fitness_goal = FitnessGoal::Cut;
        assert_goal_rejected(&profile);
    }

    #[test]
    fn test_negative_fat_allowance() {
        // Heavy, short, old, sedentary on a cut: protein alone outruns the target
        let mut profile = reference_profile();
        profile.weight_kg = 250.0;
        profile.height_cm = 50.0;
        profile.age_years = 90;
        profile.activity_level = ActivityLevel::Sedentary;
        profile.fitness_goal = FitnessGoal::Cut;
        assert_goal_rejected(&profile);
    }

    #[test]
    fn test_huge_weight_is_validation_error() {
        let mut profile = reference_profile();
        profile.weight_kg = 1e9;
        match calculate_plan(&profile) {
            Err(CalcError::Validation(errors)) => assert!(errors.contains(ProfileField::WeightKg)),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let profile = reference_profile();
        assert_eq!(calculate_plan(&profile).unwrap(), calculate_plan(&profile).unwrap());
    }
}
