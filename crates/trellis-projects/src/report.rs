//! Advisory reporting sink
//!
//! Non-fatal diagnostics (an ambiguous `--lang` value, a rollback notice)
//! are surfaced through a [`Reporter`] instead of halting execution.

use std::sync::Mutex;

/// Receives warning and informational lines
pub trait Reporter: Send + Sync {
    /// Emit a warning-level line
    fn warn(&self, line: &str);

    /// Emit an informational line
    fn info(&self, line: &str);
}

/// Reporter that forwards to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn warn(&self, line: &str) {
        tracing::warn!("{}", line);
    }

    fn info(&self, line: &str) {
        tracing::info!("{}", line);
    }
}

/// Severity of a recorded line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Warn,
    Info,
}

/// Reporter that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: Mutex<Vec<(ReportLevel, String)>>,
}

impl MemoryReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, oldest first
    pub fn lines(&self) -> Vec<(ReportLevel, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Recorded warning lines
    pub fn warnings(&self) -> Vec<String> {
        self.of_level(ReportLevel::Warn)
    }

    /// Recorded informational lines
    pub fn infos(&self) -> Vec<String> {
        self.of_level(ReportLevel::Info)
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    fn of_level(&self, level: ReportLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line)
            .collect()
    }

    fn push(&self, level: ReportLevel, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, line.to_string()));
        }
    }
}

impl Reporter for MemoryReporter {
    fn warn(&self, line: &str) {
        self.push(ReportLevel::Warn, line);
    }

    fn info(&self, line: &str) {
        self.push(ReportLevel::Info, line);
    }
}
