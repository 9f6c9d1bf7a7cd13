//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use trellis_projects::Reporter;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Reporter that prints advisories to the terminal, pausing `progress` while it does
pub struct ConsoleReporter {
    progress: ProgressBar,
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(progress: ProgressBar, quiet: bool) -> Self {
        Self { progress, quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn warn(&self, line: &str) {
        self.progress.suspend(|| warning(line));
    }

    fn info(&self, line: &str) {
        if !self.quiet {
            self.progress.suspend(|| info(line));
        }
    }
}
