//! Command-line arguments

use crate::config::ReportFormat;
use clap::{Args, Parser};
use nutrition_planner_shared::{ActivityLevel, FitnessGoal, Gender};
use std::path::PathBuf;

/// Nutrition Planner - daily calories, macros and fat-loss timeline
///
/// Computes maintenance calories with the Mifflin-St Jeor equation, splits
/// the goal's calorie target into protein, carbs and fat, and projects how
/// long reaching a target body fat percentage takes.
#[derive(Parser, Debug)]
#[command(name = "nutrition-planner")]
#[command(version)]
#[command(about = "Nutrition and fat-loss calculator", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Output format (overrides report.format)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// List the preset body fat, target and rate options
    #[arg(long)]
    pub show_presets: bool,

    /// Leave out the food source suggestions
    #[arg(long)]
    pub no_tips: bool,
}

/// Profile inputs; flags override values read from --profile
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// Profile file (.toml or .json) with any subset of the fields
    #[arg(short, long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Body weight in kilograms
    #[arg(long, value_name = "KG")]
    pub weight: Option<f64>,

    /// Height in centimeters
    #[arg(long, value_name = "CM")]
    pub height: Option<f64>,

    /// Age in years
    #[arg(long, value_name = "YEARS")]
    pub age: Option<u32>,

    /// male or female
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Current body fat percentage
    #[arg(long, value_name = "PERCENT", conflicts_with = "body_fat_unknown")]
    pub body_fat: Option<f64>,

    /// Body fat is unknown; skips the weight-loss projection
    #[arg(long)]
    pub body_fat_unknown: bool,

    /// sedentary, light, moderate, active or very_active
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// fat_loss, muscle_gain, maintain, bulk or cut
    #[arg(long)]
    pub goal: Option<FitnessGoal>,

    /// Target body fat percentage
    #[arg(long, value_name = "PERCENT")]
    pub target_body_fat: Option<f64>,

    /// Weekly loss as a percent of body weight
    #[arg(long, value_name = "PERCENT")]
    pub fat_loss_rate: Option<f64>,
}
