//! Layered configuration loader
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.trellis/config.yaml, or an explicit `--config` file)
//! 3. Environment variables (TRELLIS_* prefix)
//! 4. CLI flags (handled by caller)

use super::TrellisConfig;
use crate::error::{Error, Result};
use crate::utils::get_home_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Environment variable overriding `blueprint.default`
pub const ENV_DEFAULT_BLUEPRINT: &str = "TRELLIS_DEFAULT_BLUEPRINT";
/// Environment variable overriding `language.default`
pub const ENV_DEFAULT_LANGUAGE: &str = "TRELLIS_DEFAULT_LANGUAGE";

/// Configuration hierarchy loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// User configuration file; need not exist
    user_file: Utf8PathBuf,
    /// Whether a missing `user_file` is an error
    explicit: bool,
}

impl ConfigLoader {
    /// Create a loader reading the standard user file (~/.trellis/config.yaml)
    pub fn new() -> Result<Self> {
        let user_file = get_home_dir()?.join(".trellis").join(USER_CONFIG_FILE);
        Ok(Self {
            user_file,
            explicit: false,
        })
    }

    /// Create a loader reading an explicitly named file, which must exist
    pub fn with_file(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            user_file: path.into(),
            explicit: true,
        }
    }

    /// Create a loader for the file `config.yaml` inside `dir`, which need not exist
    pub fn with_dir(dir: &Utf8Path) -> Self {
        Self {
            user_file: dir.join(USER_CONFIG_FILE),
            explicit: false,
        }
    }

    /// The user configuration file this loader reads
    pub fn user_file(&self) -> &Utf8Path {
        &self.user_file
    }

    /// Load configuration with layered precedence
    pub fn load(&self) -> Result<TrellisConfig> {
        let mut merged = Self::embedded_value()?;

        if self.user_file.exists() {
            debug!("Loading user configuration from {}", self.user_file);
            let content = fs::read_to_string(&self.user_file)?;
            let overlay: Value = serde_yaml_ng::from_str(&content).map_err(|e| {
                Error::invalid_config(format!("Failed to parse {}: {}", self.user_file, e))
            })?;
            // An empty file parses as null
            if !overlay.is_null() {
                merge_yaml(&mut merged, overlay);
            }
        } else if self.explicit {
            return Err(Error::config_not_found(self.user_file.as_str()));
        }

        let config: TrellisConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Invalid configuration: {}", e)))?;

        Ok(Self::apply_env_overrides(config))
    }

    /// Defaults compiled into the binary
    pub fn embedded_defaults() -> Result<TrellisConfig> {
        let value = Self::embedded_value()?;
        serde_yaml_ng::from_value(value).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                DEFAULTS_FILE, e
            ))
        })
    }

    fn embedded_value() -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(DEFAULTS_FILE).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", DEFAULTS_FILE))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", DEFAULTS_FILE))
        })?;

        Ok(serde_yaml_ng::from_str(content)?)
    }

    fn apply_env_overrides(mut config: TrellisConfig) -> TrellisConfig {
        if let Ok(val) = env::var(ENV_DEFAULT_BLUEPRINT) {
            if !val.trim().is_empty() {
                config.blueprint.default = val.trim().to_string();
            }
        }

        if let Ok(val) = env::var(ENV_DEFAULT_LANGUAGE) {
            config.language.default = val;
        }

        config
    }
}

/// Recursively merge `overlay` into `base`; mappings merge key by key,
/// everything else is replaced.
fn merge_yaml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_yaml(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
