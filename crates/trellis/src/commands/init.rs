//! `trellis init` command handler

use anyhow::Result;
use camino::Utf8Path;
use std::sync::Arc;
use trellis_projects::{EmbeddedBlueprintInstaller, InitProjectOptions, ProjectInitializer};

use super::{load_config, print_report, progress};
use crate::cli::InitArgs;
use crate::output::{self, ConsoleReporter};

/// Scaffold a project in the current directory
pub async fn run(args: InitArgs, config: Option<&Utf8Path>, quiet: bool) -> Result<()> {
    let config = load_config(config)?;
    let scaffold = args.scaffold;
    let quiet = quiet || scaffold.json;

    if !quiet {
        output::header("Initialize Project");
    }

    let options = InitProjectOptions {
        blueprint: scaffold.blueprint.clone(),
        language: scaffold.lang.clone(),
        dry_run: scaffold.dry_run,
        skip_npm: scaffold.skip_npm,
        skip_bower: scaffold.skip_bower,
        skip_git: scaffold.skip_git,
        yarn: scaffold.yarn(),
        welcome: !scaffold.no_welcome,
        extra: scaffold.extra(),
    };

    let spinner = progress(quiet, "Installing blueprint...");
    let initializer = ProjectInitializer::new(Arc::new(EmbeddedBlueprintInstaller::new()))
        .with_config(config)
        .with_reporter(Arc::new(ConsoleReporter::new(spinner.clone(), quiet)));

    let result = initializer.execute(args.name.as_deref(), options).await;
    spinner.finish_and_clear();
    let report = result?;

    if !quiet {
        output::success("Project initialized");
    }
    print_report(&report, scaffold.json, quiet)
}
