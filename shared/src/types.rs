//! Calculation result types

use serde::{Deserialize, Serialize};

/// One macronutrient's share of the daily target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroNutrient {
    /// Whole grams
    pub grams: i32,
    /// Calories allotted to this macro
    pub calories: i32,
    /// Rounded share of target calories
    pub percentage: i32,
}

/// Daily calorie target and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroResults {
    /// Target calories after the goal offset
    pub calories: i32,
    pub protein: MacroNutrient,
    pub carbs: MacroNutrient,
    pub fat: MacroNutrient,
}

impl MacroResults {
    /// Sum of the three rounded percentages (100 ± 1)
    pub fn total_percentage(&self) -> i32 {
        self.protein.percentage + self.carbs.percentage + self.fat.percentage
    }

    /// Sum of the three macro calorie allotments
    pub fn total_calories(&self) -> i32 {
        self.protein.calories + self.carbs.calories + self.fat.calories
    }
}

/// Projection to a target body fat percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightLossResults {
    pub lean_body_mass_kg: f64,
    pub target_weight_kg: f64,
    pub weight_to_lose_kg: f64,
    /// Kilograms lost per week at the chosen rate
    pub weekly_loss_kg: f64,
    pub weeks_to_goal: f64,
}

/// Everything computed for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub maintenance_calories: i32,
    pub macros: MacroResults,
    /// Present only when body fat is known and above the target
    pub weight_loss: Option<WeightLossResults>,
}
