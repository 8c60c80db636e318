//! Git access for selection and picking
//!
//! Everything cherry-batch does to a repository goes through the
//! [`GitService`] trait, so the selector and the driver can be exercised
//! against a fake in tests.

mod cli;
mod parse;

pub use cli::GitCli;
pub use parse::{parse_log_output, parse_porcelain_status};
pub(crate) use parse::parse_commit_line;

use crate::error::Result;
use crate::types::{BranchQuery, CommitRecord, PickAttempt, RepoStatus};
use async_trait::async_trait;
use std::path::PathBuf;

/// Repository operations used by cherry-batch
#[async_trait]
pub trait GitService: Send + Sync {
    /// Find every non-merge commit, on any ref, whose message matches `query`.
    ///
    /// Results come back in git's own order (newest first).
    async fn search_history(&self, query: &BranchQuery) -> Result<Vec<CommitRecord>>;

    /// Apply a commit's changes to the working tree without committing.
    ///
    /// Returns `Ok` even when git exits non-zero; only failure to run git
    /// at all is an `Err`.
    async fn cherry_pick_no_commit(&self, hash: &str) -> Result<PickAttempt>;

    /// Current working tree status
    async fn status(&self) -> Result<RepoStatus>;

    /// Record the current index as a tree object and return its id.
    ///
    /// Taken before each pick so an abort can restore the index and working
    /// tree; `--no-commit` picks leave no `CHERRY_PICK_HEAD` behind.
    async fn snapshot_index(&self) -> Result<String>;

    /// Abort the in-progress cherry-pick, restoring the pre-pick state.
    ///
    /// When git reports no cherry-pick in progress, the index and working
    /// tree are reset to `snapshot` instead. Without a snapshot that case
    /// is an error.
    async fn abort_pick(&self, snapshot: Option<&str>) -> Result<()>;

    /// Continue the in-progress cherry-pick
    async fn continue_pick(&self) -> Result<PickAttempt>;

    /// Path to the repository's `.git` directory
    async fn git_dir(&self) -> Result<PathBuf>;
}
