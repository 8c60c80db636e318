//! Progress reporting for selection and picking

use crate::pick::PickOutcome;
use crate::types::CommitRecord;
use async_trait::async_trait;

/// Receives status updates while cherry-batch works
///
/// The library never prints; the CLI supplies an implementation that does.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// A branch query is about to be searched
    async fn on_query(&self, query: &str);

    /// A branch query could not be searched; selection goes on without it
    async fn on_query_failed(&self, query: &str, error: &str);

    /// A commit is about to be cherry-picked (`index` is zero-based)
    async fn on_pick_start(&self, commit: &CommitRecord, index: usize, total: usize);

    /// The cherry-pick left unmerged paths behind
    async fn on_conflict(&self, commit: &CommitRecord, paths: &[String]);

    /// A commit reached its final outcome
    async fn on_outcome(&self, commit: &CommitRecord, outcome: &PickOutcome);

    /// Free-form status message
    async fn on_message(&self, message: &str);
}

/// Progress callback that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_query(&self, _query: &str) {}
    async fn on_query_failed(&self, _query: &str, _error: &str) {}
    async fn on_pick_start(&self, _commit: &CommitRecord, _index: usize, _total: usize) {}
    async fn on_conflict(&self, _commit: &CommitRecord, _paths: &[String]) {}
    async fn on_outcome(&self, _commit: &CommitRecord, _outcome: &PickOutcome) {}
    async fn on_message(&self, _message: &str) {}
}
