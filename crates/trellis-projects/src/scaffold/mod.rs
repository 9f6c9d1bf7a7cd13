//! `new` and `init` command orchestration.
//!
//! Both commands run the same pre-flight checks (project name, `--lang`,
//! blueprint) before handing off to a [`BlueprintInstaller`]. `new` wraps the
//! installation in a [`ScaffoldTransaction`](crate::transaction::ScaffoldTransaction);
//! `init` installs into the current directory as is.

mod init;
mod new;

pub use init::{InitProjectOptions, ProjectInitializer};
pub use new::{NewProjectOptions, ProjectCreator};

use crate::blueprint::{normalize_blueprint, BlueprintInstaller, InstallRequest};
use crate::error::{Error, Result};
use crate::language::{
    resolve_language_flag, LanguageCodeValidator, LanguageTagClassifier, RegistryValidator,
};
use crate::naming::is_valid_project_name;
use crate::report::{Reporter, TracingReporter};
use crate::workdir::{ProcessWorkingDirectory, WorkingDirectory};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use std::sync::Arc;
use trellis_core::TrellisConfig;

/// Collaborators shared by both commands
#[derive(Clone)]
pub(crate) struct Collaborators {
    pub installer: Arc<dyn BlueprintInstaller>,
    pub validator: Arc<dyn LanguageCodeValidator>,
    pub workdir: Arc<dyn WorkingDirectory>,
    pub reporter: Arc<dyn Reporter>,
    pub config: TrellisConfig,
}

impl Collaborators {
    pub fn new(installer: Arc<dyn BlueprintInstaller>) -> Self {
        Self {
            installer,
            validator: Arc::new(RegistryValidator::new()),
            workdir: Arc::new(ProcessWorkingDirectory),
            reporter: Arc::new(TracingReporter),
            config: TrellisConfig::default(),
        }
    }

    pub fn check_name(&self, name: &str) -> Result<()> {
        if !is_valid_project_name(name, &self.config.naming) {
            return Err(Error::invalid_name(name));
        }
        Ok(())
    }

    pub fn resolve_language(&self, raw: Option<&str>) -> Result<String> {
        let classifier = LanguageTagClassifier::with_validator(Arc::clone(&self.validator))
            .with_reporter(Arc::clone(&self.reporter));
        resolve_language_flag(&classifier, raw, &self.config.language.default)
    }

    pub fn blueprint_or_default<'a>(&'a self, blueprint: Option<&'a str>) -> &'a str {
        blueprint
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(&self.config.blueprint.default)
    }

    pub fn resolve_blueprint(&self, blueprint: Option<&str>, base: &Utf8Path) -> Result<String> {
        normalize_blueprint(self.blueprint_or_default(blueprint), base)
    }
}

/// Installer options common to `new` and `init`
#[derive(Debug, Clone)]
pub(crate) struct InstallFlags {
    pub dry_run: bool,
    pub skip_npm: bool,
    pub skip_bower: bool,
    pub skip_git: bool,
    pub yarn: Option<bool>,
    pub welcome: bool,
    pub extra: BTreeMap<String, String>,
}

impl InstallFlags {
    /// Build the installer request; a dry run never initializes git
    pub fn into_request(
        self,
        project_name: &str,
        blueprint: String,
        language: String,
        target_dir: Utf8PathBuf,
    ) -> InstallRequest {
        InstallRequest {
            project_name: project_name.to_string(),
            blueprint,
            language,
            target_dir,
            dry_run: self.dry_run,
            skip_npm: self.skip_npm,
            skip_bower: self.skip_bower,
            skip_git: self.skip_git || self.dry_run,
            yarn: self.yarn,
            welcome: self.welcome,
            extra: self.extra,
        }
    }
}
