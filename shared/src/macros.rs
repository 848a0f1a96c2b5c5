//! Goal-based macronutrient allocation
//!
//! Protein is set per kilogram of body weight, carbohydrates as a share of
//! target calories, and fat takes whatever calories remain. Every value is
//! rounded independently, so percentages may total 99 or 101.

use crate::errors::DomainError;
use crate::models::{FitnessGoal, UserProfile};
use crate::rounding::round_to_i32;
use crate::types::{MacroNutrient, MacroResults};
use serde::{Deserialize, Serialize};

pub const PROTEIN_CALORIES_PER_GRAM: i32 = 4;
pub const CARBS_CALORIES_PER_GRAM: i32 = 4;
pub const FAT_CALORIES_PER_GRAM: i32 = 9;

/// Calorie offset and macro targets for a fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalParameters {
    /// Calories added to (or removed from) maintenance
    pub calorie_offset: i32,
    pub protein_per_kg: f64,
    /// Carbohydrate share of target calories, in percent
    pub carb_percent: f64,
}

impl FitnessGoal {
    pub fn parameters(&self) -> GoalParameters {
        let (calorie_offset, protein_per_kg, carb_percent) = match self {
            FitnessGoal::FatLoss => (-300, 2.2, 30.0),
            FitnessGoal::MuscleGain => (200, 2.0, 40.0),
            FitnessGoal::Maintain => (0, 1.6, 45.0),
            FitnessGoal::Bulk => (500, 1.8, 50.0),
            FitnessGoal::Cut => (-500, 2.5, 25.0),
        };
        GoalParameters {
            calorie_offset,
            protein_per_kg,
            carb_percent,
        }
    }
}

/// Daily calorie target for a goal
pub fn target_calories(goal: FitnessGoal, maintenance_calories: i32) -> Result<i32, DomainError> {
    maintenance_calories
        .checked_add(goal.parameters().calorie_offset)
        .ok_or(DomainError::CalorieOverflow(maintenance_calories))
}

/// Calculate macronutrient distribution based on fitness goal
///
/// Fat may come out negative when protein and carbohydrates outrun the
/// target; callers decide whether that is acceptable.
pub fn calculate_macros(
    profile: &UserProfile,
    maintenance_calories: i32,
) -> Result<MacroResults, DomainError> {
    allocate_macros(profile.weight_kg, profile.fitness_goal, maintenance_calories)
}

/// Macro allocation from body weight alone
pub fn allocate_macros(
    weight_kg: f64,
    goal: FitnessGoal,
    maintenance_calories: i32,
) -> Result<MacroResults, DomainError> {
    let params = goal.parameters();
    let calories = target_calories(goal, maintenance_calories)?;
    if calories <= 0 {
        return Err(DomainError::NonPositiveTargetCalories(calories));
    }
    let overflow = DomainError::CalorieOverflow(maintenance_calories);

    let protein_grams = round_to_i32(weight_kg * params.protein_per_kg);
    let protein_calories = protein_grams
        .checked_mul(PROTEIN_CALORIES_PER_GRAM)
        .ok_or_else(|| overflow.clone())?;

    let carb_calories = round_to_i32(f64::from(calories) * (params.carb_percent / 100.0));
    let carb_grams = round_to_i32(f64::from(carb_calories) / f64::from(CARBS_CALORIES_PER_GRAM));

    // Fat absorbs the rounding of the other two
    let fat_calories = calories
        .checked_sub(protein_calories)
        .and_then(|rest| rest.checked_sub(carb_calories))
        .ok_or(overflow)?;
    let fat_grams = round_to_i32(f64::from(fat_calories) / f64::from(FAT_CALORIES_PER_GRAM));

    let share = |macro_calories: i32| {
        round_to_i32(f64::from(macro_calories) / f64::from(calories) * 100.0)
    };

    Ok(MacroResults {
        calories,
        protein: MacroNutrient {
            grams: protein_grams,
            calories: protein_calories,
            percentage: share(protein_calories),
        },
        carbs: MacroNutrient {
            grams: carb_grams,
            calories: carb_calories,
            percentage: share(carb_calories),
        },
        fat: MacroNutrient {
            grams: fat_grams,
            calories: fat_calories,
            percentage: share(fat_calories),
        },
    })
}
