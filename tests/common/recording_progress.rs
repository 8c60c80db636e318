//! Progress callback that records events for assertions

#![allow(dead_code)]

use async_trait::async_trait;
use cherry_batch::pick::PickOutcome;
use cherry_batch::progress::ProgressCallback;
use cherry_batch::types::CommitRecord;
use std::sync::Mutex;

/// Records every progress event as a short string
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in order
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Recorded free-form messages
    pub fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| e.strip_prefix("message: ").map(ToString::to_string))
            .collect()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_query(&self, query: &str) {
        self.push(format!("query: {query}"));
    }

    async fn on_query_failed(&self, query: &str, error: &str) {
        self.push(format!("query failed: {query}: {error}"));
    }

    async fn on_pick_start(&self, commit: &CommitRecord, index: usize, total: usize) {
        self.push(format!("pick {}/{total}: {}", index + 1, commit.hash));
    }

    async fn on_conflict(&self, commit: &CommitRecord, paths: &[String]) {
        self.push(format!("conflict: {} [{}]", commit.hash, paths.join(", ")));
    }

    async fn on_outcome(&self, commit: &CommitRecord, outcome: &PickOutcome) {
        self.push(format!("outcome: {} {outcome}", commit.hash));
    }

    async fn on_message(&self, message: &str) {
        self.push(format!("message: {message}"));
    }
}
