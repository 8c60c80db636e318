//! Shared test fixtures

#![allow(dead_code)]

pub mod mock_git;
pub mod mock_prompt;
pub mod recording_progress;

pub use mock_git::MockGitService;
pub use mock_prompt::ScriptedPrompt;
pub use recording_progress::RecordingProgress;

use chrono::DateTime;
use cherry_batch::types::CommitRecord;

/// Build a commit at `secs` seconds after the Unix epoch (UTC)
pub fn make_commit(hash: &str, secs: i64, summary: &str) -> CommitRecord {
    CommitRecord {
        hash: hash.to_string(),
        timestamp: DateTime::from_timestamp(secs, 0).unwrap().fixed_offset(),
        summary: summary.to_string(),
    }
}

/// Build a sequence of commits one minute apart, named `c1`, `c2`, ...
pub fn make_sequence(n: usize) -> Vec<CommitRecord> {
    (1..=n)
        .map(|i| {
            let secs = i64::try_from(i).unwrap() * 60;
            make_commit(&format!("c{i}"), secs, &format!("Commit {i}"))
        })
        .collect()
}
