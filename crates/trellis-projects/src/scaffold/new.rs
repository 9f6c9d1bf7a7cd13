//! `trellis new`: create a project in a new directory

use super::{Collaborators, InstallFlags};
use crate::blueprint::{BlueprintInstaller, InstallReport};
use crate::error::{Error, Result};
use crate::language::LanguageCodeValidator;
use crate::report::Reporter;
use crate::transaction::ScaffoldTransaction;
use crate::workdir::WorkingDirectory;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use trellis_core::TrellisConfig;

/// Options for [`ProjectCreator::execute`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectOptions {
    /// Blueprint name or path; the configured default when `None`
    pub blueprint: Option<String>,
    /// Directory to create instead of one named after the project
    pub directory: Option<String>,
    /// Raw `--lang` value; `None` when the flag was absent
    pub language: Option<String>,
    pub dry_run: bool,
    pub skip_npm: bool,
    pub skip_bower: bool,
    pub skip_git: bool,
    pub yarn: Option<bool>,
    pub welcome: bool,
    pub extra: BTreeMap<String, String>,
}

impl Default for NewProjectOptions {
    fn default() -> Self {
        Self {
            blueprint: None,
            directory: None,
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

/// Creates a project in a new directory.
///
/// The steps run in a fixed order and stop at the first failure:
/// name checks, `--lang` resolution, blueprint normalization, then the
/// installation step inside a [`ScaffoldTransaction`].
#[derive(Clone)]
pub struct ProjectCreator {
    inner: Collaborators,
}

impl fmt::Debug for ProjectCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectCreator")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ProjectCreator {
    /// Create a command that delegates installation to `installer`
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

    /// Run `trellis new <name>`.
    ///
    /// On installation failure the project directory is removed and the
    /// installer's error is returned as [`Error::Install`].
    pub async fn execute(&self, name: &str, options: NewProjectOptions) -> Result<InstallReport> {
        if name.is_empty() {
            return Err(Error::missing_name("new"));
        }
        if name == "." {
            let blueprint = self.inner.blueprint_or_default(options.blueprint.as_deref());
            return Err(Error::reserved_name(blueprint));
        }
        self.inner.check_name(name)?;

        let language = self.inner.resolve_language(options.language.as_deref())?;

        let base = self.inner.workdir.current()?;
        let blueprint = self
            .inner
            .resolve_blueprint(options.blueprint.as_deref(), &base)?;
        debug!(
            "Creating `{}` from blueprint `{}` (lang: {:?})",
            name, blueprint, language
        );

        let flags = InstallFlags {
            dry_run: options.dry_run,
            skip_npm: options.skip_npm,
            skip_bower: options.skip_bower,
            skip_git: options.skip_git,
            yarn: options.yarn,
            welcome: options.welcome,
            extra: options.extra,
        };

        let mut transaction = ScaffoldTransaction::new(Arc::clone(&self.inner.workdir))
            .with_reporter(Arc::clone(&self.inner.reporter))
            .with_dry_run(options.dry_run);
        let paths = transaction
            .begin(name, options.directory.as_deref())
            .await?;
        info!("Scaffolding {} in {}", name, paths.project_directory);

        let installer = Arc::clone(&self.inner.installer);
        let project_name = name.to_string();
        transaction
            .run(move |target_dir| async move {
                let request = flags.into_request(&project_name, blueprint, language, target_dir);
                installer.install(request).await
            })
            .await
    }
}
