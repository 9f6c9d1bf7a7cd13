//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use std::collections::BTreeMap;

/// Trellis - scaffold new web application projects
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a trellis config file (replaces ~/.trellis/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project in a new directory
    New(NewArgs),

    /// Scaffold a project in the current directory
    Init(InitArgs),
}

/// Options shared by `new` and `init`
#[derive(Args, Debug, Clone)]
pub struct ScaffoldArgs {
    /// Blueprint name, or path to a blueprint file or directory
    #[arg(short, long)]
    pub blueprint: Option<String>,

    /// Base human language of the app, as a language code (e.g. en-US)
    #[arg(
        short = 'l',
        long = "lang",
        visible_alias = "language",
        allow_hyphen_values = true
    )]
    pub lang: Option<String>,

    /// Show what would be created without writing anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Skip installing npm packages
    #[arg(long)]
    pub skip_npm: bool,

    /// Skip installing bower packages
    #[arg(long)]
    pub skip_bower: bool,

    /// Skip git initialization
    #[arg(long)]
    pub skip_git: bool,

    /// Use yarn to install packages
    #[arg(long, conflicts_with = "no_yarn")]
    pub yarn: bool,

    /// Never use yarn
    #[arg(long)]
    pub no_yarn: bool,

    /// Leave out the welcome page
    #[arg(long)]
    pub no_welcome: bool,

    /// Extra blueprint option (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub set: Vec<(String, String)>,

    /// Print the install report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScaffoldArgs {
    /// `--yarn` / `--no-yarn`, or `None` when neither was given
    pub fn yarn(&self) -> Option<bool> {
        match (self.yarn, self.no_yarn) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn extra(&self) -> BTreeMap<String, String> {
        self.set.iter().cloned().collect()
    }
}

// New command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name
    pub name: Option<String>,

    /// Directory to create (defaults to the project name)
    #[arg(long, visible_alias = "dir")]
    pub directory: Option<String>,

    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

// Init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name (defaults to the current directory name)
    pub name: Option<String>,

    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{}`", s));
    }
    Ok((key.to_string(), value.to_string()))
}
