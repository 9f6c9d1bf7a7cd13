//! # trellis-core
//!
//! Core library for the Trellis CLI providing:
//! - Layered configuration (embedded defaults, user file, environment)
//! - The shared error type used by the other Trellis crates
//! - Small filesystem helpers

pub mod config;
pub mod error;
pub mod utils;

pub use config::{
    BlueprintSettings, ConfigLoader, LanguageSettings, NamingSettings, TrellisConfig,
};
pub use error::{Error, Result};
pub use utils::get_home_dir;
