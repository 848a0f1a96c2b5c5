//! Maintenance calorie calculation
//!
//! Basal Metabolic Rate via Mifflin-St Jeor, scaled by the activity
//! multiplier. Assumes a validated profile (weight, height, age > 0).

use crate::models::{ActivityLevel, Gender, UserProfile};
use crate::rounding::round_to_i32;

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// BMR for a profile
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    calculate_bmr_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    )
}

/// Maintenance calories from the raw measurements
pub fn calculate_maintenance_mifflin(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
    activity_level: ActivityLevel,
) -> i32 {
    let bmr = calculate_bmr_mifflin(weight_kg, height_cm, age_years, gender);
    round_to_i32(bmr * activity_level.multiplier())
}

/// Maintenance calories: BMR × activity multiplier, rounded
pub fn calculate_maintenance(profile: &UserProfile) -> i32 {
    calculate_maintenance_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
        profile.activity_level,
    )
}
