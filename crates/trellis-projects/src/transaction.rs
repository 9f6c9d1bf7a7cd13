//! Scaffolding transaction with rollback
//!
//! Makes creation of a project directory atomic with respect to the
//! installation step that fills it: if installation fails, the working
//! directory is restored and the project directory is removed.

use crate::error::{Error, Result};
use crate::report::{Reporter, TracingReporter};
use crate::workdir::WorkingDirectory;
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::fs as async_fs;
use tracing::{debug, info, warn};

/// Lifecycle of a [`ScaffoldTransaction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    Pending,
    Active,
    Committed,
    RolledBack,
}

impl TransactionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Committed | Self::RolledBack)
    }
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Committed => "committed",
            Self::RolledBack => "rolled back",
        };
        f.write_str(s)
    }
}

/// Directories owned by an active transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPaths {
    /// Working directory when the transaction began
    pub initial_directory: Utf8PathBuf,
    /// Directory created for the project
    pub project_directory: Utf8PathBuf,
}

/// One-shot transaction around project directory creation.
///
/// Only one transaction may be active per working directory at a time,
/// since it moves that directory for its whole active lifetime.
pub struct ScaffoldTransaction {
    workdir: Arc<dyn WorkingDirectory>,
    reporter: Arc<dyn Reporter>,
    dry_run: bool,
    paths: Option<ScaffoldPaths>,
    state: TransactionState,
}

impl fmt::Debug for ScaffoldTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaffoldTransaction")
            .field("dry_run", &self.dry_run)
            .field("paths", &self.paths)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ScaffoldTransaction {
    /// Create a pending transaction over `workdir`
    pub fn new(workdir: Arc<dyn WorkingDirectory>) -> Self {
        Self {
            workdir,
            reporter: Arc::new(TracingReporter),
            dry_run: false,
            paths: None,
            state: TransactionState::Pending,
        }
    }

    /// Send the rollback notice to `reporter`
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Resolve and check paths without touching the filesystem
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Paths resolved by [`begin`](Self::begin), if it succeeded
    pub fn paths(&self) -> Option<&ScaffoldPaths> {
        self.paths.as_ref()
    }

    /// Create the project directory and step into it.
    ///
    /// The directory is `directory` when given, otherwise `project_name`,
    /// resolved against the current directory. Fails with
    /// [`Error::DirectoryConflict`] if it already exists and is not an empty
    /// directory; nothing is created in that case. If stepping into the new
    /// directory fails, the directory is removed again.
    pub async fn begin(
        &mut self,
        project_name: &str,
        directory: Option<&str>,
    ) -> Result<ScaffoldPaths> {
        self.expect_state(TransactionState::Pending)?;

        let initial_directory = self.workdir.current()?;
        let directory_name = directory
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(project_name);
        let project_directory = initial_directory.join(directory_name);

        if Self::is_occupied(&project_directory).await? {
            return Err(Error::directory_conflict(directory_name));
        }

        if self.dry_run {
            debug!("Dry run: not creating {}", project_directory);
        } else {
            let existed = async_fs::try_exists(&project_directory).await?;
            info!("Creating project directory {}", project_directory);
            async_fs::create_dir_all(&project_directory).await?;
            if let Err(e) = self.workdir.change_to(&project_directory) {
                if !existed {
                    if let Err(cleanup) = async_fs::remove_dir_all(&project_directory).await {
                        warn!(
                            "Failed to remove project directory {}: {}",
                            project_directory, cleanup
                        );
                    }
                }
                return Err(e.into());
            }
        }

        let paths = ScaffoldPaths {
            initial_directory,
            project_directory,
        };
        self.paths = Some(paths.clone());
        self.state = TransactionState::Active;
        Ok(paths)
    }

    /// Run the installation step, committing on success and rolling back on failure.
    ///
    /// `install` receives the project directory. Its error is returned as
    /// [`Error::Install`] unchanged, after the working directory has been
    /// restored and the project directory removed.
    pub async fn run<F, Fut, T>(&mut self, install: F) -> Result<T>
    where
        F: FnOnce(Utf8PathBuf) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        self.expect_state(TransactionState::Active)?;
        let paths = match &self.paths {
            Some(paths) => paths.clone(),
            None => {
                return Err(Error::TransactionState {
                    state: self.state,
                    expected: TransactionState::Active,
                })
            }
        };

        match install(paths.project_directory.clone()).await {
            Ok(result) => {
                info!("Committed project directory {}", paths.project_directory);
                self.state = TransactionState::Committed;
                Ok(result)
            }
            Err(err) => {
                self.rollback(&paths).await;
                Err(Error::Install(err))
            }
        }
    }

    async fn rollback(&mut self, paths: &ScaffoldPaths) {
        warn!("Rolling back project directory {}", paths.project_directory);

        if let Err(e) = self.workdir.change_to(&paths.initial_directory) {
            warn!(
                "Failed to restore working directory {}: {}",
                paths.initial_directory, e
            );
        }

        if !self.dry_run {
            if let Err(e) = async_fs::remove_dir_all(&paths.project_directory).await {
                warn!(
                    "Failed to remove project directory {}: {}",
                    paths.project_directory, e
                );
            }
        }

        self.reporter.warn(&format!(
            "Error creating new application. Removing generated directory `{}`",
            display_relative(&paths.project_directory, &paths.initial_directory)
        ));
        self.state = TransactionState::RolledBack;
    }

    async fn is_occupied(path: &Utf8Path) -> Result<bool> {
        match async_fs::metadata(path).await {
            Ok(meta) if meta.is_dir() => {
                let mut entries = async_fs::read_dir(path).await?;
                Ok(entries.next_entry().await?.is_some())
            }
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn expect_state(&self, expected: TransactionState) -> Result<()> {
        if self.state != expected {
            return Err(Error::TransactionState {
                state: self.state,
                expected,
            });
        }
        Ok(())
    }
}

fn display_relative(path: &Utf8Path, base: &Utf8Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) => format!("./{}", relative),
        Err(_) => path.to_string(),
    }
}
