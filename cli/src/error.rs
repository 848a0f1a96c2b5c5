//! CLI error handling
//!
//! Wraps calculation failures and input problems, and maps each onto the
//! process exit code the binary reports.

use nutrition_planner_shared::{CalcError, DomainError, ValidationErrors};
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;
/// Exit code for input, configuration and rendering failures
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the profile fails validation
pub const EXIT_VALIDATION: i32 = 2;
/// Exit code when the calculation itself is rejected
pub const EXIT_DOMAIN: i32 = 3;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Could not read profile file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile file {}: {message}", .path.display())]
    ProfileFormat { path: PathBuf, message: String },

    #[error("Unsupported profile file (expected .toml or .json): {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid input: {0}")]
    Validation(ValidationErrors),

    #[error("Calculation failed: {0}")]
    Domain(DomainError),

    #[error("Could not render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Could not format report: {0}")]
    Format(#[from] std::fmt::Error),
}

impl From<CalcError> for CliError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::Validation(errors) => CliError::Validation(errors),
            CalcError::Domain(err) => CliError::Domain(err),
        }
    }
}

impl From<ValidationErrors> for CliError {
    fn from(errors: ValidationErrors) -> Self {
        CliError::Validation(errors)
    }
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) => EXIT_VALIDATION,
            CliError::Domain(_) => EXIT_DOMAIN,
            CliError::Io { .. }
            | CliError::ProfileFormat { .. }
            | CliError::UnsupportedFormat(_)
            | CliError::Render(_)
            | CliError::Format(_) => EXIT_FAILURE,
        }
    }

    /// Lines to print on stderr, one per validation error
    pub fn messages(&self) -> Vec<String> {
        match self {
            CliError::Validation(errors) => errors.iter().map(|e| e.user_message()).collect(),
            other => vec![other.to_string()],
        }
    }
}
