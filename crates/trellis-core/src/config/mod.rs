//! Configuration for the Trellis CLI
//!
//! Settings are resolved by [`ConfigLoader`] from several layers, see
//! [`loader`] for the precedence rules.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};

/// Resolved Trellis configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrellisConfig {
    pub blueprint: BlueprintSettings,
    pub language: LanguageSettings,
    pub naming: NamingSettings,
}

/// Blueprint selection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintSettings {
    /// Blueprint used when `--blueprint` is omitted
    pub default: String,
}

/// `--lang` flag settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSettings {
    /// Value that stands for an absent `--lang` flag
    #[serde(default)]
    pub default: String,
}

/// Project-name rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingSettings {
    /// Names that may not be used for a project (case-insensitive)
    #[serde(default)]
    pub reserved: Vec<String>,
}

impl NamingSettings {
    /// Whether `name` matches a reserved name, ignoring case
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
    }
}

impl Default for TrellisConfig {
    /// Defaults baked into the binary, without any user overrides
    fn default() -> Self {
        ConfigLoader::embedded_defaults().unwrap_or_else(|e| {
            tracing::warn!("Embedded defaults unusable, using built-in values: {}", e);
            Self {
                blueprint: BlueprintSettings {
                    default: "app".to_string(),
                },
                language: LanguageSettings {
                    default: String::new(),
                },
                naming: NamingSettings {
                    reserved: Vec::new(),
                },
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_embedded_defaults() {
        let config = TrellisConfig::default();
        assert_eq!(config.blueprint.default, "app");
        assert_eq!(config.language.default, "");
        assert!(config.naming.reserved.contains(&"vendor".to_string()));
    }

    #[test]
    fn test_is_reserved_ignores_case() {
        let naming = NamingSettings {
            reserved: vec!["trellis".to_string()],
        };
        assert!(naming.is_reserved("Trellis"));
        assert!(naming.is_reserved("TRELLIS"));
        assert!(!naming.is_reserved("trellis-app"));
    }
}
