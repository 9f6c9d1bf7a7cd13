//! Default installer backed by YAML blueprints.
//!
//! A blueprint maps relative file paths to Tera templates:
//!
//! ```yaml
//! description: "Application"
//! files:
//!   "app/index.html": |
//!     <html{% if lang %} lang="{{ lang }}"{% endif %}></html>
//! ```
//!
//! Templates see `name`, `lang`, `blueprint`, `welcome`, `yarn` and `extra`.
//! Built-in blueprints live in `blueprints/` and are compiled in.

use super::installer::{BlueprintInstaller, InstallReport, InstallRequest};
use crate::error::{Error, Result};
use anyhow::Context as _;
use async_trait::async_trait;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tera::{Context, Tera};
use tracing::{debug, info};

/// Built-in blueprint definitions
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/blueprints/"]
struct EmbeddedBlueprints;

/// A parsed blueprint definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blueprint {
    pub description: String,
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl Blueprint {
    /// Parse a blueprint from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a built-in blueprint by name
    pub fn builtin(name: &str) -> Result<Self> {
        let file = EmbeddedBlueprints::get(&format!("{}.yaml", name))
            .ok_or_else(|| Error::blueprint(format!("Unknown blueprint `{}`", name)))?;
        let yaml = std::str::from_utf8(&file.data).map_err(|_| {
            Error::blueprint(format!("Built-in blueprint `{}` is not valid UTF-8", name))
        })?;
        Self::from_yaml(yaml)
    }

    /// Load a blueprint from a YAML file, or `blueprint.yaml` inside a directory
    pub async fn from_path(path: &Utf8Path) -> Result<Self> {
        let file = if path.is_dir() {
            path.join("blueprint.yaml")
        } else {
            path.to_path_buf()
        };
        let yaml = tokio::fs::read_to_string(&file)
            .await
            .map_err(|e| Error::blueprint(format!("Failed to read {}: {}", file, e)))?;
        Self::from_yaml(&yaml)
    }

    /// Names of all built-in blueprints
    pub fn builtin_names() -> Vec<String> {
        let mut names: Vec<String> = EmbeddedBlueprints::iter()
            .filter_map(|f| f.strip_suffix(".yaml").map(str::to_string))
            .collect();
        names.sort();
        names
    }

    /// Render every file against `context`, returning relative paths and contents
    pub fn render(&self, context: &Context) -> Result<Vec<(Utf8PathBuf, String)>> {
        let mut rendered = Vec::with_capacity(self.files.len());
        for (path_template, content_template) in &self.files {
            let path = Tera::one_off(path_template, context, false)?;
            let path = Utf8PathBuf::from(path.trim());
            if !is_contained(&path) {
                return Err(Error::blueprint(format!(
                    "Blueprint file `{}` escapes the project directory",
                    path
                )));
            }
            let content = Tera::one_off(content_template, context, false)?;
            rendered.push((path, content));
        }
        Ok(rendered)
    }
}

/// Relative and free of `..`
fn is_contained(path: &Utf8Path) -> bool {
    !path.as_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Utf8Component::Normal(_) | Utf8Component::CurDir))
}

/// Installs built-in blueprints by name, or blueprint files by absolute path
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedBlueprintInstaller;

impl EmbeddedBlueprintInstaller {
    pub fn new() -> Self {
        Self
    }

    async fn resolve(&self, blueprint: &str) -> Result<Blueprint> {
        let path = Utf8Path::new(blueprint);
        if path.is_absolute() {
            Blueprint::from_path(path).await
        } else {
            Blueprint::builtin(blueprint)
        }
    }

    fn context(request: &InstallRequest) -> Context {
        let mut context = Context::new();
        context.insert("name", &request.project_name);
        context.insert("lang", &request.language);
        context.insert("blueprint", &request.blueprint);
        context.insert("welcome", &request.welcome);
        context.insert("yarn", &request.yarn.unwrap_or(false));
        context.insert("extra", &request.extra);
        context
    }
}

#[async_trait]
impl BlueprintInstaller for EmbeddedBlueprintInstaller {
    async fn install(&self, request: InstallRequest) -> anyhow::Result<InstallReport> {
        let blueprint = self.resolve(&request.blueprint).await?;
        debug!(
            "Installing blueprint `{}` ({}) into {}",
            request.blueprint, blueprint.description, request.target_dir
        );

        let rendered = blueprint.render(&Self::context(&request))?;
        let mut files = Vec::with_capacity(rendered.len());

        for (relative, content) in rendered {
            let full_path = request.target_dir.join(&relative);
            if request.dry_run {
                info!("  would create {}", relative);
            } else {
                if let Some(parent) = full_path.parent() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .with_context(|| format!("Failed to create directory {}", parent))?;
                }
                tokio::fs::write(&full_path, content)
                    .await
                    .with_context(|| format!("Failed to write {}", full_path))?;
                info!("  create {}", relative);
            }
            files.push(relative);
        }

        Ok(InstallReport {
            blueprint: request.blueprint,
            target_dir: request.target_dir,
            files,
            dry_run: request.dry_run,
        })
    }
}
