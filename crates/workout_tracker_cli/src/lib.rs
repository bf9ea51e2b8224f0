//! Command-line front end: wires configuration, logging and the report together.

use std::io::Write;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use workout_tracker::config::Config;
use workout_tracker::package::{SensorPackage, demo_packages};
use workout_tracker::report::{
    OutputFormat, ReportOptions, ReportOutcome, write_package_schema, write_report,
};

const FALLBACK_FILTER: &str = "info";

/// Build the log filter, falling back to `info` when the configured one does not parse.
pub fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

pub fn init_logging(config: &Config) {
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(log_filter(&config.log_level))
        .init();
    tracing::info!("workout-tracker: log filter: {}", config.log_level);
}

pub fn load_packages(config: &Config) -> anyhow::Result<Vec<SensorPackage>> {
    match &config.packages_path {
        Some(path) => {
            let packages = SensorPackage::load_list(path)
                .with_context(|| format!("reading packages from {}", path.display()))?;
            tracing::info!(
                "workout-tracker: loaded {} packages from {}",
                packages.len(),
                path.display()
            );
            Ok(packages)
        }
        None => {
            tracing::info!("workout-tracker: no package file configured, using demo packages");
            Ok(demo_packages())
        }
    }
}

pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<ReportOutcome> {
    if config.format == OutputFormat::Schema {
        write_package_schema(out).context("writing package schema")?;
        return Ok(ReportOutcome::default());
    }
    let packages = load_packages(config)?;
    let options = ReportOptions {
        format: config.format,
        fail_fast: config.fail_fast,
    };
    let outcome = write_report(&packages, options, out).context("writing report")?;
    tracing::info!(
        "workout-tracker: {} summaries written, {} packages failed",
        outcome.written,
        outcome.failures.len()
    );
    Ok(outcome)
}
