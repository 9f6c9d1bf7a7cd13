//! Command implementations

pub mod init;
pub mod new;

use crate::output;
use anyhow::{Context, Result};
use camino::Utf8Path;
use indicatif::ProgressBar;
use trellis_core::{ConfigLoader, TrellisConfig};
use trellis_projects::InstallReport;

/// Load configuration from `--config`, or the user file when absent
pub(crate) fn load_config(config: Option<&Utf8Path>) -> Result<TrellisConfig> {
    let loader = match config {
        Some(path) => ConfigLoader::with_file(path),
        None => ConfigLoader::new()?,
    };
    tracing::debug!("Reading configuration from {}", loader.user_file());
    loader.load().context("Failed to load configuration")
}

/// Progress indicator for the installation step; hidden when quiet
pub(crate) fn progress(quiet: bool, msg: &str) -> ProgressBar {
    if quiet {
        ProgressBar::hidden()
    } else {
        output::spinner(msg)
    }
}

/// Print what the installation step did
pub(crate) fn print_report(report: &InstallReport, json: bool, quiet: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    if quiet {
        return Ok(());
    }

    output::kv("Blueprint", &report.blueprint);
    output::kv("Location", report.target_dir.as_str());
    if report.dry_run {
        output::info("Dry run, nothing was written. Would create:");
    }
    for file in &report.files {
        println!("    {}", file);
    }
    Ok(())
}
