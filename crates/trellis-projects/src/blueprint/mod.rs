//! Blueprints: the templates that populate a new project.
//!
//! - [`normalize_blueprint`] turns a `--blueprint` value into a canonical
//!   identifier (built-in name or absolute path)
//! - [`BlueprintInstaller`] is the installation step the scaffolding
//!   commands delegate to
//! - [`EmbeddedBlueprintInstaller`] is the default installer, rendering
//!   built-in or on-disk YAML blueprints with Tera

pub mod embedded;
pub mod installer;

pub use embedded::{Blueprint, EmbeddedBlueprintInstaller};
pub use installer::{BlueprintInstaller, InstallReport, InstallRequest};

use crate::error::Result;
use camino::Utf8Path;
use trellis_core::utils::expand_tilde;

/// Normalize a blueprint identifier.
///
/// Identifiers that look like paths (`.`, `./x`, `../x`, `/x`, `~/x`) become
/// absolute paths, relative ones resolved against `base`. Anything else is a
/// blueprint name and is returned trimmed.
pub fn normalize_blueprint(blueprint: &str, base: &Utf8Path) -> Result<String> {
    let blueprint = blueprint.trim();

    let is_relative = blueprint == "."
        || blueprint == ".."
        || blueprint.starts_with("./")
        || blueprint.starts_with("../");

    if is_relative {
        return Ok(base.join(blueprint).to_string());
    }
    if blueprint.starts_with('~') {
        return Ok(expand_tilde(blueprint)?.to_string());
    }

    Ok(blueprint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_returned_trimmed() {
        let base = Utf8Path::new("/work");
        assert_eq!(normalize_blueprint("app", base).unwrap(), "app");
        assert_eq!(normalize_blueprint(" addon ", base).unwrap(), "addon");
        assert_eq!(
            normalize_blueprint("@scope/blueprint", base).unwrap(),
            "@scope/blueprint"
        );
    }

    #[test]
    fn test_relative_paths_resolve_against_base() {
        let base = Utf8Path::new("/work");
        assert_eq!(
            normalize_blueprint("./blueprints/web.yaml", base).unwrap(),
            "/work/./blueprints/web.yaml"
        );
        assert_eq!(
            normalize_blueprint("../shared.yaml", base).unwrap(),
            "/work/../shared.yaml"
        );
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let base = Utf8Path::new("/work");
        assert_eq!(
            normalize_blueprint("/opt/blueprints/web.yaml", base).unwrap(),
            "/opt/blueprints/web.yaml"
        );
    }
}
