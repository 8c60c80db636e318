//! CLI commands and terminal progress output

pub mod context;
pub mod run;
pub mod style;

use anstream::println;
use async_trait::async_trait;
use cherry_batch::pick::PickOutcome;
use cherry_batch::progress::ProgressCallback;
use cherry_batch::types::CommitRecord;
use indicatif::ProgressBar;
use style::{Stylize, check, cross};

/// Progress output for the pick loop, one line per event
#[derive(Debug, Clone, Copy, Default)]
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_query(&self, query: &str) {
        println!("{} {}", "Searching".muted(), query.accent());
    }

    async fn on_query_failed(&self, query: &str, error: &str) {
        println!(
            "{}",
            format!("⚠️  No commits for {query}: {error}").warn()
        );
    }

    async fn on_pick_start(&self, commit: &CommitRecord, index: usize, total: usize) {
        println!(
            "{} {} {}",
            format!("[{}/{total}]", index + 1).muted(),
            commit.short_hash().accent(),
            commit.summary
        );
    }

    async fn on_conflict(&self, _commit: &CommitRecord, paths: &[String]) {
        println!("{}", "Conflict detected! Resolve it manually:".warn());
        for path in paths {
            println!("    {}", path.warn());
        }
    }

    async fn on_outcome(&self, _commit: &CommitRecord, outcome: &PickOutcome) {
        match outcome {
            PickOutcome::Applied | PickOutcome::ConflictResolved => {
                println!("    {check} {}", outcome.muted(), check = check());
            }
            PickOutcome::Failed { .. } => {
                println!("    {} {}", "⚠️".warn(), outcome.to_string().warn());
            }
            PickOutcome::Aborted { restored: true } => {
                println!("    {} {}", cross(), outcome.muted());
            }
            PickOutcome::Aborted { restored: false } => {
                println!("    {} {}", cross(), outcome.to_string().warn());
            }
        }
    }

    async fn on_message(&self, message: &str) {
        println!("    {}", message.warn());
    }
}

/// Progress output during selection, shown on a spinner
pub struct SpinnerProgress {
    spinner: ProgressBar,
}

impl SpinnerProgress {
    /// Wrap a running spinner
    pub const fn new(spinner: ProgressBar) -> Self {
        Self { spinner }
    }

    /// The wrapped spinner
    pub const fn spinner(&self) -> &ProgressBar {
        &self.spinner
    }
}

#[async_trait]
impl ProgressCallback for SpinnerProgress {
    async fn on_query(&self, query: &str) {
        self.spinner
            .set_message(format!("Searching history for {}...", query.accent()));
    }

    async fn on_query_failed(&self, query: &str, error: &str) {
        self.spinner.suspend(|| {
            println!(
                "{}",
                format!("⚠️  No commits for {query}: {error}").warn()
            );
        });
    }

    async fn on_pick_start(&self, _commit: &CommitRecord, _index: usize, _total: usize) {}

    async fn on_conflict(&self, _commit: &CommitRecord, _paths: &[String]) {}

    async fn on_outcome(&self, _commit: &CommitRecord, _outcome: &PickOutcome) {}

    async fn on_message(&self, message: &str) {
        self.spinner.set_message(message.to_string());
    }
}
