//! Commit gathering - effectful history searches

use super::order::build_commit_sequence;
use crate::error::Result;
use crate::git::GitService;
use crate::progress::ProgressCallback;
use crate::types::{BranchQuery, CommitSequence};
use tracing::{debug, warn};

/// Select the commits to pick for a set of branch queries (EFFECTFUL)
///
/// Searches history once per query, then hands the batches to
/// [`build_commit_sequence`]. A query whose search fails contributes
/// nothing and selection carries on with the rest; only fatal errors
/// (git missing, not a repository) abort.
///
/// # Arguments
/// * `queries` - branch queries in user order
/// * `git` - git service used for the searches
/// * `progress` - progress callback for status updates
pub async fn select_commits(
    queries: &[BranchQuery],
    git: &dyn GitService,
    progress: &dyn ProgressCallback,
) -> Result<CommitSequence> {
    let mut batches = Vec::with_capacity(queries.len());

    for query in queries {
        progress.on_query(query.as_str()).await;

        match git.search_history(query).await {
            Ok(commits) => {
                debug!(query = query.as_str(), found = commits.len(), "query matched");
                batches.push(commits);
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!(query = query.as_str(), error = %e, "history search failed, skipping");
                progress.on_query_failed(query.as_str(), &e.to_string()).await;
            }
        }
    }

    let sequence = build_commit_sequence(batches);
    debug!(commits = sequence.len(), "selection complete");
    Ok(sequence)
}
