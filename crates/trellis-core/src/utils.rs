//! Shared utility functions for Trellis crates

use crate::error::{Error, Result};
use camino::Utf8PathBuf;

/// Get the user's home directory
///
/// `HOME` wins over `dirs::home_dir()` so that tests and containers can
/// redirect it.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(Utf8PathBuf::from(home));
        }
    }

    dirs::home_dir()
        .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
        .ok_or(Error::NoHomeDirectory)
}

/// Expand a leading `~/` against the home directory
pub fn expand_tilde(path: &str) -> Result<Utf8PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => Ok(get_home_dir()?.join(rest)),
        None if path == "~" => get_home_dir(),
        None => Ok(Utf8PathBuf::from(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_home_dir_from_env() {
        if std::env::var("HOME").is_ok() {
            let home = get_home_dir().unwrap();
            assert!(!home.as_str().is_empty());
        }
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(
            expand_tilde("./blueprints/app.yaml").unwrap(),
            Utf8PathBuf::from("./blueprints/app.yaml")
        );
        assert_eq!(expand_tilde("/abs").unwrap(), Utf8PathBuf::from("/abs"));
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        let home = get_home_dir().unwrap();
        assert_eq!(expand_tilde("~/bp.yaml").unwrap(), home.join("bp.yaml"));
        assert_eq!(expand_tilde("~").unwrap(), home);
    }
}
