//! Nutrition Planner CLI
//!
//! Reads a profile from a file and/or flags, runs it through the calculator
//! session and renders the resulting plan as text or JSON.

pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod report;

use crate::args::Cli;
use crate::config::{AppConfig, ReportConfig};
use crate::error::CliError;
use crate::report::Report;
use nutrition_planner_shared::CalculatorSession;
use tracing::info;

/// Report options after command-line overrides
pub fn report_options(cli: &Cli, config: &AppConfig) -> ReportConfig {
    let mut options = config.report.clone();
    if let Some(format) = cli.format {
        options.format = format;
    }
    options.show_presets |= cli.show_presets;
    options.show_tips &= !cli.no_tips;
    options
}

/// Build the draft, submit it and render the report
pub fn run(cli: &Cli, config: &AppConfig) -> Result<String, CliError> {
    let mut session = CalculatorSession::with_draft(input::base_draft(&cli.profile)?);
    session.update_all(input::flag_updates(&cli.profile));

    let plan = session.submit()?.clone();
    let profile = session.draft().finalize()?;
    info!(
        goal = %profile.fitness_goal,
        projected = plan.weight_loss.is_some(),
        "Rendering report"
    );

    Report::new(&profile, &plan).render(&report_options(cli, config))
}
