//! Project-name validity rules.

use regex::Regex;
use std::sync::LazyLock;
use trellis_core::NamingSettings;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("project name pattern is valid")
});

/// Whether `name` may be used for a new project.
///
/// Rejects reserved names (ignoring case), names with a period, names that
/// start with a digit and names with characters other than ASCII letters,
/// digits, `-` and `_`.
pub fn is_valid_project_name(name: &str, naming: &NamingSettings) -> bool {
    if naming.is_reserved(name) {
        return false;
    }
    if name.contains('.') {
        return false;
    }
    NAME_PATTERN.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::TrellisConfig;

    fn naming() -> NamingSettings {
        TrellisConfig::default().naming
    }

    #[test]
    fn test_accepts_ordinary_names() {
        for name in ["my-app", "my_app", "MyApp", "app2", "a"] {
            assert!(is_valid_project_name(name, &naming()), "`{name}` should be valid");
        }
    }

    #[test]
    fn test_rejects_reserved_names_in_any_case() {
        for name in ["test", "trellis", "Trellis", "trellis-cli", "vendor", "app", "ADDON"] {
            assert!(!is_valid_project_name(name, &naming()), "`{name}` should be reserved");
        }
    }

    #[test]
    fn test_rejects_malformed_names() {
        for name in ["zomg.awesome", "123-my-bagel", "-app", "my app", "my/app", "", "café"] {
            assert!(!is_valid_project_name(name, &naming()), "`{name}` should be invalid");
        }
    }
}
