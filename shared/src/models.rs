//! Domain model for nutrition planning
//!
//! `UserProfile` is the finalized, immutable input to every calculation.
//! `ProfileDraft` is the partially filled profile the wizard builds up one
//! `ProfileUpdate` at a time before it is finalized on submit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

// ============================================================================
// Enumerations
// ============================================================================

/// Gender, selects the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Activity level used to scale BMR into maintenance calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Professional athlete level
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get the activity multiplier for the maintenance calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Short label shown in the activity picker
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Not Active",
            ActivityLevel::Light => "Low",
            ActivityLevel::Moderate => "Intermediate",
            ActivityLevel::Active => "High Active",
            ActivityLevel::VeryActive => "Very High Active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Professional athlete level",
        }
    }
}

/// Fitness goal, selects the calorie offset and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    FatLoss,
    MuscleGain,
    #[default]
    Maintain,
    Bulk,
    Cut,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 5] = [
        FitnessGoal::FatLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Maintain,
        FitnessGoal::Bulk,
        FitnessGoal::Cut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::FatLoss => "fat_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Maintain => "maintain",
            FitnessGoal::Bulk => "bulk",
            FitnessGoal::Cut => "cut",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::FatLoss => "Fat Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Maintain => "Stay Active and Fit",
            FitnessGoal::Bulk => "Bulk",
            FitnessGoal::Cut => "Cut",
        }
    }
}

macro_rules! impl_enum_text {
    ($ty:ty, $field:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = crate::errors::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == normalized)
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = <$ty>::ALL.iter().map(|v| v.as_str()).collect();
                        crate::errors::ValidationError::new(
                            $field,
                            &format!("Must be one of: {}", allowed.join(", ")),
                        )
                    })
            }
        }
    };
}

impl_enum_text!(Gender, ProfileField::Gender);
impl_enum_text!(ActivityLevel, ProfileField::ActivityLevel);
impl_enum_text!(FitnessGoal, ProfileField::FitnessGoal);

// ============================================================================
// Profile fields
// ============================================================================

/// Identifies one input field of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    WeightKg,
    HeightCm,
    AgeYears,
    Gender,
    BodyFatPercent,
    ActivityLevel,
    FitnessGoal,
    TargetBodyFatPercent,
    FatLossRatePercent,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::WeightKg,
        ProfileField::HeightCm,
        ProfileField::AgeYears,
        ProfileField::Gender,
        ProfileField::BodyFatPercent,
        ProfileField::ActivityLevel,
        ProfileField::FitnessGoal,
        ProfileField::TargetBodyFatPercent,
        ProfileField::FatLossRatePercent,
    ];

    /// Field key as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::WeightKg => "weight_kg",
            ProfileField::HeightCm => "height_cm",
            ProfileField::AgeYears => "age_years",
            ProfileField::Gender => "gender",
            ProfileField::BodyFatPercent => "body_fat_percent",
            ProfileField::ActivityLevel => "activity_level",
            ProfileField::FitnessGoal => "fitness_goal",
            ProfileField::TargetBodyFatPercent => "target_body_fat_percent",
            ProfileField::FatLossRatePercent => "fat_loss_rate_percent",
        }
    }

    /// Look up a field by its wire key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }

    /// User-friendly display label
    pub fn display_label(&self) -> &'static str {
        match self {
            ProfileField::WeightKg => "Weight (kg)",
            ProfileField::HeightCm => "Height (cm)",
            ProfileField::AgeYears => "Age",
            ProfileField::Gender => "Gender",
            ProfileField::BodyFatPercent => "Body Fat Percentage",
            ProfileField::ActivityLevel => "Physical Activity Level",
            ProfileField::FitnessGoal => "Fitness Goal",
            ProfileField::TargetBodyFatPercent => "Target Body Fat Percentage",
            ProfileField::FatLossRatePercent => "Fat Loss Rate",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Presets offered by the form
// ============================================================================

/// Body fat presets shown as picture cards (percent)
pub const BODY_FAT_PRESETS: [f64; 8] = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0];

/// Target body fat options (percent)
pub const TARGET_BODY_FAT_OPTIONS: [f64; 9] = [5.0, 8.0, 10.0, 12.0, 15.0, 18.0, 20.0, 22.0, 25.0];

/// Fat loss rate options (percent of body weight per week) with labels
pub const FAT_LOSS_RATE_OPTIONS: [(f64, &str); 3] = [
    (0.5, "Conservative"),
    (1.0, "Moderate"),
    (1.5, "Aggressive"),
];

pub const DEFAULT_BODY_FAT_PERCENT: f64 = 15.0;
pub const DEFAULT_TARGET_BODY_FAT_PERCENT: f64 = 10.0;
pub const DEFAULT_FAT_LOSS_RATE_PERCENT: f64 = 1.0;

/// Upper input limits; the derive rules below repeat them as literals
pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MAX_AGE_YEARS: u32 = 150;

// ============================================================================
// User profile
// ============================================================================

/// Finalized user inputs, immutable per calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    /// Body weight in kilograms
    #[validate(range(exclusive_min = 0.0, max = 500.0, message = "Please enter a valid weight"))]
    pub weight_kg: f64,
    /// Height in centimeters
    #[validate(range(exclusive_min = 0.0, max = 300.0, message = "Please enter a valid height"))]
    pub height_cm: f64,
    /// Age in whole years
    #[validate(range(min = 1, max = 150, message = "Please enter a valid age"))]
    pub age_years: u32,
    pub gender: Gender,
    /// Current body fat, `None` when unknown
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "Body fat must be between 0 and 100%"))]
    pub body_fat_percent: Option<f64>,
    pub activity_level: ActivityLevel,
    pub fitness_goal: FitnessGoal,
    #[validate(range(min = 0.0, max = 100.0, message = "Target body fat must be between 0 and 100%"))]
    pub target_body_fat_percent: f64,
    /// Percent of body weight lost per week
    #[validate(range(exclusive_min = 0.0, message = "Fat loss rate must be greater than 0%"))]
    pub fat_loss_rate_percent: f64,
}

impl UserProfile {
    /// Whether a weight-loss projection is meaningful for this profile
    ///
    /// True only when body fat is known and strictly above the target.
    pub fn wants_weight_loss_projection(&self) -> bool {
        matches!(self.body_fat_percent, Some(bf) if bf > self.target_body_fat_percent)
    }
}

// ============================================================================
// Draft and updates
// ============================================================================

/// Partially filled profile held by the wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<u32>,
    pub gender: Gender,
    pub body_fat_percent: Option<f64>,
    pub activity_level: ActivityLevel,
    pub fitness_goal: FitnessGoal,
    pub target_body_fat_percent: Option<f64>,
    pub fat_loss_rate_percent: Option<f64>,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            weight_kg: None,
            height_cm: None,
            age_years: None,
            gender: Gender::default(),
            body_fat_percent: Some(DEFAULT_BODY_FAT_PERCENT),
            activity_level: ActivityLevel::default(),
            fitness_goal: FitnessGoal::default(),
            target_body_fat_percent: Some(DEFAULT_TARGET_BODY_FAT_PERCENT),
            fat_loss_rate_percent: Some(DEFAULT_FAT_LOSS_RATE_PERCENT),
        }
    }
}

impl ProfileDraft {
    /// Merge a single field edit into the draft (last write wins)
    pub fn apply(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::WeightKg(v) => self.weight_kg = Some(v),
            ProfileUpdate::HeightCm(v) => self.height_cm = Some(v),
            ProfileUpdate::AgeYears(v) => self.age_years = Some(v),
            ProfileUpdate::Gender(v) => self.gender = v,
            ProfileUpdate::BodyFatPercent(v) => self.body_fat_percent = v,
            ProfileUpdate::ActivityLevel(v) => self.activity_level = v,
            ProfileUpdate::FitnessGoal(v) => self.fitness_goal = v,
            ProfileUpdate::TargetBodyFatPercent(v) => self.target_body_fat_percent = Some(v),
            ProfileUpdate::FatLossRatePercent(v) => self.fat_loss_rate_percent = Some(v),
        }
    }

    /// Merge a batch of edits in order
    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = ProfileUpdate>) {
        for update in updates {
            self.apply(update);
        }
    }
}

impl From<&UserProfile> for ProfileDraft {
    fn from(profile: &UserProfile) -> Self {
        Self {
            weight_kg: Some(profile.weight_kg),
            height_cm: Some(profile.height_cm),
            age_years: Some(profile.age_years),
            gender: profile.gender,
            body_fat_percent: profile.body_fat_percent,
            activity_level: profile.activity_level,
            fitness_goal: profile.fitness_goal,
            target_body_fat_percent: Some(profile.target_body_fat_percent),
            fat_loss_rate_percent: Some(profile.fat_loss_rate_percent),
        }
    }
}

/// One field edit coming from the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ProfileUpdate {
    WeightKg(f64),
    HeightCm(f64),
    AgeYears(u32),
    Gender(Gender),
    /// `None` marks body fat as unknown
    BodyFatPercent(Option<f64>),
    ActivityLevel(ActivityLevel),
    FitnessGoal(FitnessGoal),
    TargetBodyFatPercent(f64),
    FatLossRatePercent(f64),
}

impl ProfileUpdate {
    /// The field this update touches
    pub fn field(&self) -> ProfileField {
        match self {
            ProfileUpdate::WeightKg(_) => ProfileField::WeightKg,
            ProfileUpdate::HeightCm(_) => ProfileField::HeightCm,
            ProfileUpdate::AgeYears(_) => ProfileField::AgeYears,
            ProfileUpdate::Gender(_) => ProfileField::Gender,
            ProfileUpdate::BodyFatPercent(_) => ProfileField::BodyFatPercent,
            ProfileUpdate::ActivityLevel(_) => ProfileField::ActivityLevel,
            ProfileUpdate::FitnessGoal(_) => ProfileField::FitnessGoal,
            ProfileUpdate::TargetBodyFatPercent(_) => ProfileField::TargetBodyFatPercent,
            ProfileUpdate::FatLossRatePercent(_) => ProfileField::FatLossRatePercent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1.2)]
    #[case(ActivityLevel::Light, 1.375)]
    #[case(ActivityLevel::Moderate, 1.55)]
    #[case(ActivityLevel::Active, 1.725)]
    #[case(ActivityLevel::VeryActive, 1.9)]
    fn test_activity_multipliers(#[case] level: ActivityLevel, #[case] expected: f64) {
        assert_eq!(level.multiplier(), expected);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&ActivityLevel::VeryActive).unwrap(), "\"very_active\"");
        assert_eq!(serde_json::to_string(&FitnessGoal::FatLoss).unwrap(), "\"fat_loss\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("very_active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("Very-Active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("MUSCLE_GAIN".parse::<FitnessGoal>().unwrap(), FitnessGoal::MuscleGain);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);

        let err = "extra_active".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(err.field, ProfileField::ActivityLevel);
        assert!(err.message.contains("very_active"));

        let err = "other".parse::<Gender>().unwrap_err();
        assert_eq!(err.field, ProfileField::Gender);
    }

    #[test]
    fn test_enum_display_round_trips_through_from_str() {
        for goal in FitnessGoal::ALL {
            assert_eq!(goal.to_string().parse::<FitnessGoal>().unwrap(), goal);
        }
    }

    #[test]
    fn test_field_keys() {
        for field in ProfileField::ALL {
            assert_eq!(ProfileField::from_key(field.as_str()), Some(field));
        }
        assert_eq!(ProfileField::from_key("unknown"), None);
    }

    #[test]
    fn test_draft_defaults_match_form() {
        let draft = ProfileDraft::default();
        assert_eq!(draft.weight_kg, None);
        assert_eq!(draft.height_cm, None);
        assert_eq!(draft.age_years, None);
        assert_eq!(draft.gender, Gender::Male);
        assert_eq!(draft.body_fat_percent, Some(15.0));
        assert_eq!(draft.activity_level, ActivityLevel::Moderate);
        assert_eq!(draft.fitness_goal, FitnessGoal::Maintain);
        assert_eq!(draft.target_body_fat_percent, Some(10.0));
        assert_eq!(draft.fat_loss_rate_percent, Some(1.0));
    }

    #[test]
    fn test_draft_apply_last_write_wins() {
        let mut draft = ProfileDraft::default();
        draft.apply_all([
            ProfileUpdate::WeightKg(70.0),
            ProfileUpdate::WeightKg(72.5),
            ProfileUpdate::BodyFatPercent(None),
            ProfileUpdate::FitnessGoal(FitnessGoal::Cut),
        ]);
        assert_eq!(draft.weight_kg, Some(72.5));
        assert_eq!(draft.body_fat_percent, None);
        assert_eq!(draft.fitness_goal, FitnessGoal::Cut);
        // Untouched fields keep their defaults
        assert_eq!(draft.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_update_wire_format() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"field": "activity_level", "value": "very_active"}"#).unwrap();
        assert_eq!(update, ProfileUpdate::ActivityLevel(ActivityLevel::VeryActive));
        assert_eq!(update.field(), ProfileField::ActivityLevel);

        let update: ProfileUpdate =
            serde_json::from_str(r#"{"field": "body_fat_percent", "value": null}"#).unwrap();
        assert_eq!(update, ProfileUpdate::BodyFatPercent(None));
    }

    #[test]
    fn test_wants_weight_loss_projection() {
        let mut profile = UserProfile {
            weight_kg: 80.0,
            height_cm: 180.0,
            age_years: 30,
            gender: Gender::Male,
            body_fat_percent: Some(25.0),
            activity_level: ActivityLevel::Moderate,
            fitness_goal: FitnessGoal::FatLoss,
            target_body_fat_percent: 15.0,
            fat_loss_rate_percent: 1.0,
        };
        assert!(profile.wants_weight_loss_projection());

        profile.body_fat_percent = Some(15.0);
        assert!(!profile.wants_weight_loss_projection());

        profile.body_fat_percent = None;
        assert!(!profile.wants_weight_loss_projection());
    }
}
