//! Profile input
//!
//! A profile file seeds the draft and command-line flags are applied on top
//! as individual field updates.

use crate::args::ProfileArgs;
use crate::error::CliError;
use nutrition_planner_shared::{ProfileDraft, ProfileUpdate};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a draft from a TOML or JSON file, chosen by extension
///
/// Missing fields keep the form defaults.
pub fn load_profile_file(path: &Path) -> Result<ProfileDraft, CliError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> Result<ProfileDraft, String> = match extension.as_deref() {
        Some("toml") => |text| toml::from_str(text).map_err(|e| e.to_string()),
        Some("json") => |text| serde_json::from_str(text).map_err(|e| e.to_string()),
        _ => return Err(CliError::UnsupportedFormat(path.to_path_buf())),
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let draft = parse(&text).map_err(|message| CliError::ProfileFormat {
        path: path.to_path_buf(),
        message,
    })?;
    debug!(path = %path.display(), "Profile file loaded");
    Ok(draft)
}

/// Field updates for every flag that was given, in form order
pub fn flag_updates(args: &ProfileArgs) -> Vec<ProfileUpdate> {
    let body_fat = if args.body_fat_unknown {
        Some(ProfileUpdate::BodyFatPercent(None))
    } else {
        args.body_fat.map(|bf| ProfileUpdate::BodyFatPercent(Some(bf)))
    };

    [
        args.weight.map(ProfileUpdate::WeightKg),
        args.height.map(ProfileUpdate::HeightCm),
        args.age.map(ProfileUpdate::AgeYears),
        args.gender.map(ProfileUpdate::Gender),
        body_fat,
        args.activity.map(ProfileUpdate::ActivityLevel),
        args.goal.map(ProfileUpdate::FitnessGoal),
        args.target_body_fat.map(ProfileUpdate::TargetBodyFatPercent),
        args.fat_loss_rate.map(ProfileUpdate::FatLossRatePercent),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// The starting draft: the profile file if given, else the form defaults
pub fn base_draft(args: &ProfileArgs) -> Result<ProfileDraft, CliError> {
    match &args.profile {
        Some(path) => load_profile_file(path),
        None => Ok(ProfileDraft::default()),
    }
}
