//! Installation step contract.

use async_trait::async_trait;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the installation step needs, merged from command options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallRequest {
    pub project_name: String,
    /// Normalized blueprint identifier
    pub blueprint: String,
    /// Resolved `--lang` value; empty when unset
    pub language: String,
    /// Directory to populate
    pub target_dir: Utf8PathBuf,
    pub dry_run: bool,
    pub skip_npm: bool,
    pub skip_bower: bool,
    pub skip_git: bool,
    /// `None` lets the installer decide
    pub yarn: Option<bool>,
    pub welcome: bool,
    /// Pass-through options the core does not interpret
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

/// What the installation step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallReport {
    pub blueprint: String,
    pub target_dir: Utf8PathBuf,
    /// Files written, or that would be written on a dry run
    pub files: Vec<Utf8PathBuf>,
    pub dry_run: bool,
}

/// Populates a project directory from a blueprint.
///
/// Errors are opaque to the caller and propagated unchanged.
#[async_trait]
pub trait BlueprintInstaller: Send + Sync {
    async fn install(&self, request: InstallRequest) -> anyhow::Result<InstallReport>;
}
