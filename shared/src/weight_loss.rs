//! Weight-loss timeline projection
//!
//! Lean body mass is held constant; the target weight is the weight at which
//! that lean mass makes up `100 - target` percent of the body.
//!
//! Callers decide whether a projection is wanted at all (body fat known and
//! above the target); see `UserProfile::wants_weight_loss_projection`.

use crate::errors::DomainError;
use crate::models::UserProfile;
use crate::types::WeightLossResults;

/// Lean body mass in kg
///
/// LBM = weight × (1 - body_fat_percent/100)
pub fn lean_body_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (1.0 - body_fat_percent / 100.0)
}

/// Project the time needed to reach the target body fat percentage
pub fn calculate_weight_loss_time(profile: &UserProfile) -> Result<WeightLossResults, DomainError> {
    let weight = profile.weight_kg;
    let body_fat = profile.body_fat_percent.ok_or(DomainError::MissingBodyFat)?;
    let target_body_fat = profile.target_body_fat_percent;
    let rate = profile.fat_loss_rate_percent;

    if !(0.0..=100.0).contains(&body_fat) {
        return Err(DomainError::BodyFatOutOfRange(body_fat));
    }
    if !(0.0..100.0).contains(&target_body_fat) {
        return Err(DomainError::TargetBodyFatOutOfRange(target_body_fat));
    }
    if !rate.is_finite() || rate <= 0.0 {
        return Err(DomainError::NonPositiveFatLossRate(rate));
    }

    let lean_body_mass_kg = lean_body_mass(weight, body_fat);
    let target_weight_kg = lean_body_mass_kg / (1.0 - target_body_fat / 100.0);
    let weight_to_lose_kg = weight - target_weight_kg;

    if weight_to_lose_kg.is_nan() || weight_to_lose_kg <= 0.0 {
        return Err(DomainError::NoWeightToLose {
            current_kg: weight,
            target_kg: target_weight_kg,
        });
    }

    let weekly_loss_kg = weight * (rate / 100.0);
    let weeks_to_goal = weight_to_lose_kg / weekly_loss_kg;

    Ok(WeightLossResults {
        lean_body_mass_kg,
        target_weight_kg,
        weight_to_lose_kg,
        weekly_loss_kg,
        weeks_to_goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, FitnessGoal, Gender};
    use proptest::prelude::*;

    fn profile(weight: f64, body_fat: Option<f64>, target: f64, rate: f64) -> UserProfile {
        UserProfile {
            weight_kg: weight,
            height_cm: 180.0,
            age_years: 35,
            gender: Gender::Male,
            body_fat_percent: body_fat,
            activity_level: ActivityLevel::Light,
            fitness_goal: FitnessGoal::FatLoss,
            target_body_fat_percent: target,
            fat_loss_rate_percent: rate,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-3, "{actual} != {expected}");
    }

    #[test]
    fn test_reference_projection() {
        let result = calculate_weight_loss_time(&profile(80.0, Some(25.0), 15.0, 1.0)).unwrap();
        assert_close(result.lean_body_mass_kg, 60.0);
        assert_close(result.target_weight_kg, 70.588);
        assert_close(result.weight_to_lose_kg, 9.412);
        assert_close(result.weekly_loss_kg, 0.8);
        assert_close(result.weeks_to_goal, 11.765);
    }

    #[test]
    fn test_conservative_rate() {
        let result = calculate_weight_loss_time(&profile(100.0, Some(30.0), 20.0, 0.5)).unwrap();
        assert_close(result.lean_body_mass_kg, 70.0);
        assert_close(result.target_weight_kg, 87.5);
        assert_close(result.weight_to_lose_kg, 12.5);
        assert_close(result.weekly_loss_kg, 0.5);
        assert_close(result.weeks_to_goal, 25.0);
    }

    #[test]
    fn test_target_body_fat_100_is_domain_error() {
        let err = calculate_weight_loss_time(&profile(80.0, Some(25.0), 100.0, 1.0)).unwrap_err();
        assert_eq!(err, DomainError::TargetBodyFatOutOfRange(100.0));
    }

    #[test]
    fn test_zero_rate_is_domain_error() {
        let err = calculate_weight_loss_time(&profile(80.0, Some(25.0), 15.0, 0.0)).unwrap_err();
        assert_eq!(err, DomainError::NonPositiveFatLossRate(0.0));

        let err = calculate_weight_loss_time(&profile(80.0, Some(25.0), 15.0, -1.0)).unwrap_err();
        assert_eq!(err, DomainError::NonPositiveFatLossRate(-1.0));
    }

    #[test]
    fn test_target_at_or_above_current_fails_fast() {
        let err = calculate_weight_loss_time(&profile(80.0, Some(15.0), 15.0, 1.0)).unwrap_err();
        assert!(matches!(err, DomainError::NoWeightToLose { .. }));

        let err = calculate_weight_loss_time(&profile(80.0, Some(10.0), 15.0, 1.0)).unwrap_err();
        assert!(matches!(err, DomainError::NoWeightToLose { current_kg, .. } if current_kg == 80.0));
    }

    #[test]
    fn test_unknown_body_fat() {
        let err = calculate_weight_loss_time(&profile(80.0, None, 15.0, 1.0)).unwrap_err();
        assert_eq!(err, DomainError::MissingBodyFat);
    }

    #[test]
    fn test_body_fat_out_of_range() {
        let err = calculate_weight_loss_time(&profile(80.0, Some(120.0), 15.0, 1.0)).unwrap_err();
        assert_eq!(err, DomainError::BodyFatOutOfRange(120.0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: projection is finite and positive whenever body fat is above target
        #[test]
        fn prop_projection_positive(
            weight in 40.0f64..200.0,
            target in 5.0f64..30.0,
            gap in 0.5f64..30.0,
            rate in 0.1f64..2.0,
        ) {
            let result = calculate_weight_loss_time(&profile(weight, Some(target + gap), target, rate)).unwrap();
            prop_assert!(result.weeks_to_goal.is_finite() && result.weeks_to_goal > 0.0);
            prop_assert!(result.target_weight_kg < weight);
            prop_assert!(result.target_weight_kg > result.lean_body_mass_kg);
        }

        /// Property: losing faster never takes longer
        #[test]
        fn prop_faster_rate_fewer_weeks(
            weight in 40.0f64..200.0,
            body_fat in 20.0f64..40.0,
        ) {
            let slow = calculate_weight_loss_time(&profile(weight, Some(body_fat), 12.0, 0.5)).unwrap();
            let fast = calculate_weight_loss_time(&profile(weight, Some(body_fat), 12.0, 1.5)).unwrap();
            prop_assert!(fast.weeks_to_goal < slow.weeks_to_goal);
        }
    }
}
