//! `trellis init`: scaffold into the current directory

use super::{Collaborators, InstallFlags};
use crate::blueprint::{BlueprintInstaller, InstallReport};
use crate::error::{Error, Result};
use crate::language::LanguageCodeValidator;
use crate::report::Reporter;
use crate::workdir::WorkingDirectory;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;
use trellis_core::TrellisConfig;

/// Options for [`ProjectInitializer::execute`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitProjectOptions {
    pub blueprint: Option<String>,
    pub language: Option<String>,
    pub dry_run: bool,
    pub skip_npm: bool,
    pub skip_bower: bool,
    pub skip_git: bool,
    pub yarn: Option<bool>,
    pub welcome: bool,
    pub extra: BTreeMap<String, String>,
}

impl Default for InitProjectOptions {
    fn default() -> Self {
        Self {
            blueprint: None,
            language: None,
            dry_run: false,
            skip_npm: false,
            skip_bower: false,
            skip_git: false,
            yarn: None,
            welcome: true,
            extra: BTreeMap::new(),
        }
    }
}

/// Scaffolds a project into the current directory.
///
/// Shares the name and `--lang` checks with [`ProjectCreator`](super::ProjectCreator),
/// but creates no directory and so has nothing to roll back.
#[derive(Clone)]
pub struct ProjectInitializer {
    inner: Collaborators,
}

impl fmt::Debug for ProjectInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectInitializer")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ProjectInitializer {
    pub fn new(installer: Arc<dyn BlueprintInstaller>) -> Self {
        Self {
            inner: Collaborators::new(installer),
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn LanguageCodeValidator>) -> Self {
        self.inner.validator = validator;
        self
    }

    pub fn with_workdir(mut self, workdir: Arc<dyn WorkingDirectory>) -> Self {
        self.inner.workdir = workdir;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.inner.reporter = reporter;
        self
    }

    pub fn with_config(mut self, config: TrellisConfig) -> Self {
        self.inner.config = config;
        self
    }

    /// Run `trellis init [name]`.
    ///
    /// Without a name, the current directory's name is used.
    pub async fn execute(
        &self,
        name: Option<&str>,
        options: InitProjectOptions,
    ) -> Result<InstallReport> {
        let current = self.inner.workdir.current()?;

        let name = match name.filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => current
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| Error::missing_name("init"))?,
        };
        self.inner.check_name(&name)?;

        let language = self.inner.resolve_language(options.language.as_deref())?;
        let blueprint = self
            .inner
            .resolve_blueprint(options.blueprint.as_deref(), &current)?;
        info!("Initializing `{}` in {}", name, current);

        let flags = InstallFlags {
            dry_run: options.dry_run,
            skip_npm: options.skip_npm,
            skip_bower: options.skip_bower,
            skip_git: options.skip_git,
            yarn: options.yarn,
            welcome: options.welcome,
            extra: options.extra,
        };
        let request = flags.into_request(&name, blueprint, language, current);

        self.inner
            .installer
            .install(request)
            .await
            .map_err(Error::Install)
    }
}
