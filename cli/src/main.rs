//! Nutrition Planner command-line tool
//!
//! Prints the report on stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use nutrition_planner_cli::{args::Cli, config::AppConfig, error::EXIT_OK, run};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting nutrition planner"
    );

    match run(&cli, &config) {
        Ok(report) => {
            println!("{report}");
            Ok(ExitCode::from(EXIT_OK as u8))
        }
        Err(err) => {
            debug!(error = %err, code = err.exit_code(), "Run failed");
            for message in err.messages() {
                eprintln!("{message}");
            }
            Ok(ExitCode::from(err.exit_code() as u8))
        }
    }
}

/// Initialize tracing/logging
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.logging.level;
        format!("nutrition_planner_cli={level},nutrition_planner_shared={level}").into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.wants_json_logs() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
