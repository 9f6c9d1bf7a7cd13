//! # trellis-projects
//!
//! Project scaffolding library for the Trellis CLI providing:
//! - `--lang` flag classification against competing interpretations
//! - Language-tag and project-name validity checks
//! - Blueprint normalization and installation
//! - A scaffolding transaction that removes the project directory when
//!   installation fails
//! - The `new` and `init` command orchestration built from the above
//!
//! # Examples
//!
//! ## Classify a `--lang` value
//!
//! ```
//! use trellis_projects::language::{Category, LanguageTagClassifier};
//!
//! let classifier = LanguageTagClassifier::new();
//! assert_eq!(classifier.classify("en-US").category, Category::Valid);
//! assert_eq!(classifier.classify("typescript").category, Category::TechMisuse);
//! assert_eq!(classifier.classify("--skip-git").category, Category::ParserArtifact);
//! ```
//!
//! ## Create a new project
//!
//! ```no_run
//! use std::sync::Arc;
//! use trellis_projects::blueprint::EmbeddedBlueprintInstaller;
//! use trellis_projects::scaffold::{NewProjectOptions, ProjectCreator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let creator = ProjectCreator::new(Arc::new(EmbeddedBlueprintInstaller::new()));
//! let options = NewProjectOptions {
//!     language: Some("en-US".to_string()),
//!     ..Default::default()
//! };
//! let report = creator.execute("my-app", options).await?;
//! println!("created {} files", report.files.len());
//! # Ok(())
//! # }
//! ```

pub mod blueprint;
pub mod error;
pub mod language;
pub mod naming;
pub mod report;
pub mod scaffold;
pub mod transaction;
pub mod workdir;

pub use error::{Error, Result};

pub use blueprint::{
    Blueprint, BlueprintInstaller, EmbeddedBlueprintInstaller, InstallReport, InstallRequest,
};
pub use language::{Category, Classification, LanguageTagClassifier};
pub use report::{MemoryReporter, Reporter, TracingReporter};
pub use scaffold::{InitProjectOptions, NewProjectOptions, ProjectCreator, ProjectInitializer};
pub use transaction::{ScaffoldPaths, ScaffoldTransaction, TransactionState};
pub use workdir::{InMemoryWorkingDirectory, ProcessWorkingDirectory, WorkingDirectory};
