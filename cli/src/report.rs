//! Report rendering
//!
//! The text report follows the results page: daily calories, the macro
//! table, then the weight-loss projection when there is one.

use crate::config::{ReportConfig, ReportFormat};
use crate::error::CliError;
use nutrition_planner_shared::{
    MacroNutrient, NutritionPlan, UserProfile, WeightLossResults, BODY_FAT_PRESETS,
    FAT_LOSS_RATE_OPTIONS, TARGET_BODY_FAT_OPTIONS,
};
use std::fmt::{self, Write};

const TIPS: [(&str, &str); 3] = [
    (
        "Protein sources",
        "Chicken breast, turkey, lean beef, fish, eggs, tofu, tempeh, legumes, Greek yogurt, cottage cheese",
    ),
    (
        "Carbohydrate sources",
        "Brown rice, quinoa, sweet potatoes, oats, whole grain bread, fruits, vegetables",
    ),
    (
        "Healthy fat sources",
        "Avocados, nuts, seeds, olive oil, fatty fish, nut butters",
    ),
];

/// A computed plan together with the profile it was computed for
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub profile: &'a UserProfile,
    pub plan: &'a NutritionPlan,
}

impl<'a> Report<'a> {
    pub fn new(profile: &'a UserProfile, plan: &'a NutritionPlan) -> Self {
        Self { profile, plan }
    }

    pub fn render(&self, options: &ReportConfig) -> Result<String, CliError> {
        match options.format {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self.plan)?),
            ReportFormat::Text => Ok(self.render_text(options)?),
        }
    }

    fn render_text(&self, options: &ReportConfig) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_calories(&mut out)?;
        self.write_macros(&mut out)?;
        match &self.plan.weight_loss {
            Some(projection) => self.write_projection(&mut out, projection)?,
            None => self.write_no_projection(&mut out)?,
        }
        if options.show_presets {
            write_presets(&mut out)?;
        }
        if options.show_tips {
            write_tips(&mut out)?;
        }
        Ok(out)
    }

    fn write_calories(&self, out: &mut impl Write) -> fmt::Result {
        let profile = self.profile;
        writeln!(out, "Your Personalized Nutrition Plan")?;
        writeln!(
            out,
            "Goal: {} | Activity: {} ({})",
            profile.fitness_goal.label(),
            profile.activity_level.label(),
            profile.activity_level.description()
        )?;
        writeln!(out)?;
        writeln!(out, "Maintenance calories: {} kcal", self.plan.maintenance_calories)?;
        writeln!(out, "Daily calories:       {} kcal", self.plan.macros.calories)
    }

    fn write_macros(&self, out: &mut impl Write) -> fmt::Result {
        let macros = &self.plan.macros;
        writeln!(out)?;
        writeln!(out, "Macronutrient Breakdown")?;
        write_macro_row(out, "Protein", &macros.protein)?;
        write_macro_row(out, "Carbohydrates", &macros.carbs)?;
        write_macro_row(out, "Fat", &macros.fat)?;
        writeln!(
            out,
            "  {:<14}{:>6}  {:>9}  {:>4}%",
            "Total",
            "",
            format!("{} kcal", macros.total_calories()),
            macros.total_percentage()
        )
    }

    fn write_projection(&self, out: &mut impl Write, projection: &WeightLossResults) -> fmt::Result {
        let profile = self.profile;
        writeln!(out)?;
        writeln!(out, "Weight Loss Projection")?;
        writeln!(out, "  Current weight:   {} kg", profile.weight_kg)?;
        if let Some(body_fat) = profile.body_fat_percent {
            writeln!(out, "  Body fat:         {}%", body_fat)?;
        }
        writeln!(out, "  Lean body mass:   {:.1} kg", projection.lean_body_mass_kg)?;
        writeln!(out, "  Target weight:    {:.1} kg", projection.target_weight_kg)?;
        writeln!(out, "  Target body fat:  {}%", profile.target_body_fat_percent)?;
        writeln!(out, "  Weight to lose:   {:.1} kg", projection.weight_to_lose_kg)?;
        writeln!(
            out,
            "  Fat loss rate:    {}% of body weight/week",
            profile.fat_loss_rate_percent
        )?;
        writeln!(out, "  Weekly fat loss:  {:.2} kg/week", projection.weekly_loss_kg)?;
        writeln!(out, "  Time to goal:     {:.1} weeks", projection.weeks_to_goal)
    }

    fn write_no_projection(&self, out: &mut impl Write) -> fmt::Result {
        let reason = match self.profile.body_fat_percent {
            None => "body fat unknown",
            Some(_) => "already at or below target body fat",
        };
        writeln!(out)?;
        writeln!(out, "Weight Loss Projection: not shown ({reason})")
    }
}

fn write_macro_row(out: &mut impl Write, label: &str, nutrient: &MacroNutrient) -> fmt::Result {
    writeln!(
        out,
        "  {:<14}{:>6}  {:>9}  {:>4}%",
        label,
        format!("{} g", nutrient.grams),
        format!("{} kcal", nutrient.calories),
        nutrient.percentage
    )
}

fn percent_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v}%"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_presets(out: &mut impl Write) -> fmt::Result {
    let rates = FAT_LOSS_RATE_OPTIONS
        .iter()
        .map(|(rate, label)| format!("{rate}% ({label})"))
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out)?;
    writeln!(out, "Options")?;
    writeln!(out, "  Body fat presets:   {}", percent_list(&BODY_FAT_PRESETS))?;
    writeln!(out, "  Target body fat:    {}", percent_list(&TARGET_BODY_FAT_OPTIONS))?;
    writeln!(out, "  Fat loss rates:     {}", rates)
}

fn write_tips(out: &mut impl Write) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "Nutrition Tips")?;
    for (title, content) in TIPS {
        writeln!(out, "  {title}: {content}")?;
    }
    Ok(())
}
