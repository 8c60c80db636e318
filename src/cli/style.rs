//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips the escape codes when
//! stdout is not a terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark for completed steps
pub const CHECK: &str = "✓";

/// Cross for failed or aborted steps
pub const CROSS: &str = "✗";

/// Semantic styles used across CLI output
pub trait Stylize {
    /// De-emphasized secondary text
    fn muted(&self) -> String;
    /// Headings and labels
    fn emphasis(&self) -> String;
    /// Names, hashes and counts
    fn accent(&self) -> String;
    /// Success messages
    fn success(&self) -> String;
    /// Warnings and soft failures
    fn warn(&self) -> String;
    /// Fatal errors
    fn error(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Red cross
pub fn cross() -> String {
    CROSS.error()
}

/// Spinner style for long-running steps
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}
