//! Nutrition Planner Shared Library
//!
//! The calculation engine behind the planner: maintenance calories,
//! goal-based macro allocation, weight-loss projection, and the validation
//! that gates them. Used by the WASM bindings and the command-line tool.

pub mod errors;
pub mod macros;
pub mod maintenance;
pub mod models;
pub mod planner;
pub mod rounding;
pub mod types;
pub mod validation;
pub mod weight_loss;
pub mod wizard;

// Re-export commonly used items
pub use errors::*;
pub use macros::{allocate_macros, calculate_macros, target_calories, GoalParameters};
pub use maintenance::{calculate_bmr, calculate_maintenance, calculate_maintenance_mifflin};
pub use models::*;
pub use planner::calculate_plan;
pub use types::*;
pub use validation::{
    validate_all, validate_calorie_budget, validate_profile, validate_step, WizardStep,
};
pub use weight_loss::calculate_weight_loss_time;
pub use wizard::CalculatorSession;
