//! Common test utilities for integration tests
//!
//! Parses argument lists the way the binary does and runs them against a
//! fixed configuration, so results do not depend on config files or NP__
//! environment variables.
#![allow(dead_code)]

use clap::Parser;
use nutrition_planner_cli::args::Cli;
use nutrition_planner_cli::config::{AppConfig, ReportConfig, ReportFormat};
use nutrition_planner_cli::error::CliError;
use std::io::Write;
use tempfile::NamedTempFile;

/// Reference profile as command-line flags
pub const REFERENCE_FLAGS: [&str; 6] = [
    "--weight",
    "70",
    "--height",
    "175",
    "--age",
    "25",
];

pub fn test_config() -> AppConfig {
    AppConfig {
        report: ReportConfig {
            format: ReportFormat::Text,
            show_presets: false,
            show_tips: false,
        },
        ..AppConfig::default()
    }
}

pub fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("nutrition-planner").chain(args.iter().copied()))
        .unwrap()
}

/// Run with the given arguments and the test configuration
pub fn run_args(args: &[&str]) -> Result<String, CliError> {
    nutrition_planner_cli::run(&parse(args), &test_config())
}

/// Reference flags followed by extra arguments
pub fn run_reference(extra: &[&str]) -> Result<String, CliError> {
    let args: Vec<&str> = REFERENCE_FLAGS.iter().chain(extra).copied().collect();
    run_args(&args)
}

/// Write a profile file with the given extension
pub fn write_profile(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
