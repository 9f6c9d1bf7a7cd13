//! Error types for trellis-projects

use thiserror::Error;

/// Result type alias using trellis-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// No project name was given
    #[error("The `trellis {command}` command requires a name to be specified. For more details, use `trellis help`.")]
    MissingName { command: String },

    /// `.` was given as the project name
    #[error("Trying to generate an {structure} structure in this directory? Use `trellis init` instead.")]
    ReservedName { structure: String },

    /// The project name failed the validity check
    #[error("We currently do not support a name of `{name}`.")]
    InvalidName { name: String },

    /// The `--lang` value was rejected; carries the full classifier diagnostic
    #[error("{message}")]
    InvalidLanguageTag { message: String },

    /// The target directory exists and is not empty
    #[error("Directory '{path}' already exists.")]
    DirectoryConflict { path: String },

    /// A transaction was used outside of its active state
    #[error("Scaffolding transaction is {state}, expected {expected}")]
    TransactionState {
        state: crate::transaction::TransactionState,
        expected: crate::transaction::TransactionState,
    },

    /// Blueprint could not be found or loaded
    #[error("Blueprint error: {message}")]
    Blueprint { message: String },

    /// Failure raised by the installation step, passed through untouched
    #[error(transparent)]
    Install(anyhow::Error),

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] trellis_core::Error),
}

impl Error {
    /// Create a missing name error
    pub fn missing_name(command: impl Into<String>) -> Self {
        Self::MissingName {
            command: command.into(),
        }
    }

    /// Create a reserved name error for the given blueprint
    ///
    /// The `app` blueprint is spelled out as "application".
    pub fn reserved_name(blueprint: &str) -> Self {
        let structure = if blueprint == "app" {
            "application"
        } else {
            blueprint
        };
        Self::ReservedName {
            structure: structure.to_string(),
        }
    }

    /// Create an invalid project name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create an invalid language tag error
    pub fn invalid_language_tag(message: impl Into<String>) -> Self {
        Self::InvalidLanguageTag {
            message: message.into(),
        }
    }

    /// Create a directory conflict error
    pub fn directory_conflict(path: impl Into<String>) -> Self {
        Self::DirectoryConflict { path: path.into() }
    }

    /// Create a blueprint error
    pub fn blueprint(message: impl Into<String>) -> Self {
        Self::Blueprint {
            message: message.into(),
        }
    }

    /// Whether this error originated in the installation step
    pub fn is_install_failure(&self) -> bool {
        matches!(self, Self::Install(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_name_spells_out_application() {
        let err = Error::reserved_name("app");
        assert_eq!(
            err.to_string(),
            "Trying to generate an application structure in this directory? Use `trellis init` instead."
        );

        let err = Error::reserved_name("addon");
        assert!(err.to_string().contains("an addon structure"));
    }

    #[test]
    fn test_invalid_name_message() {
        assert_eq!(
            Error::invalid_name("vendor").to_string(),
            "We currently do not support a name of `vendor`."
        );
    }

    #[test]
    fn test_install_error_is_transparent() {
        let err = Error::Install(anyhow::anyhow!("npm exited with status 1"));
        assert_eq!(err.to_string(), "npm exited with status 1");
        assert!(err.is_install_failure());
    }
}
