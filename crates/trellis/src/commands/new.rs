//! `trellis new` command handler

use anyhow::Result;
use camino::Utf8Path;
use std::sync::Arc;
use trellis_projects::{EmbeddedBlueprintInstaller, NewProjectOptions, ProjectCreator};

use super::{load_config, print_report, progress};
use crate::cli::NewArgs;
use crate::output::{self, ConsoleReporter};

/// Create a project in a new directory
pub async fn run(args: NewArgs, config: Option<&Utf8Path>, quiet: bool) -> Result<()> {
    let config = load_config(config)?;
    let scaffold = args.scaffold;
    // JSON output keeps stdout machine-readable
    let quiet = quiet || scaffold.json;
    let name = args.name.unwrap_or_default();

    if !quiet {
        output::header("Create New Project");
    }

    let options = NewProjectOptions {
        blueprint: scaffold.blueprint.clone(),
        directory: args.directory,
        language: scaffold.lang.clone(),
        dry_run: scaffold.dry_run,
        skip_npm: scaffold.skip_npm,
        skip_bower: scaffold.skip_bower,
        skip_git: scaffold.skip_git,
        yarn: scaffold.yarn(),
        welcome: !scaffold.no_welcome,
        extra: scaffold.extra(),
    };

    let spinner = progress(quiet, &format!("Creating {}...", name));
    let creator = ProjectCreator::new(Arc::new(EmbeddedBlueprintInstaller::new()))
        .with_config(config)
        .with_reporter(Arc::new(ConsoleReporter::new(spinner.clone(), quiet)));

    let result = creator.execute(&name, options).await;
    spinner.finish_and_clear();
    let report = result?;

    if !quiet {
        output::success(&format!("Created project {}", name));
    }
    print_report(&report, scaffold.json, quiet)
}
