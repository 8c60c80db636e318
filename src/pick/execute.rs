//! Pick execution - effectful operations
//!
//! Walks the commit sequence in order, cherry-picking each commit without
//! committing. Conflicts hand control to the operator until they report the
//! tree resolved or abort the run.

use super::machine::{OperatorResponse, PickState};
use super::session::{PickOutcome, PickRecord, PickSession, SessionEnd};
use crate::error::Result;
use crate::git::GitService;
use crate::progress::ProgressCallback;
use crate::prompt::OperatorPrompt;
use crate::types::{CommitRecord, FailurePolicy, RepoStatus};
use tracing::{debug, info, warn};

/// Prompt shown while a conflict is pending
pub const CONFLICT_PROMPT: &str =
    "Resolve the conflicts, then press Enter (or type 'continue'); type 'abort' to cancel";

/// Reported when the operator acknowledges but unmerged paths remain
pub const CONFLICTS_REMAIN: &str = "Conflicts still exist, resolve them first.";

/// Reported when the working tree status cannot be read
pub const STATUS_UNREADABLE: &str = "Could not read repository status";

/// Options for a pick session
#[derive(Debug, Clone, Copy, Default)]
pub struct PickOptions {
    /// Handling of picks that fail without conflicts
    pub failure_policy: FailurePolicy,
}

/// Run the pick session over `sequence` (EFFECTFUL)
///
/// Commits are picked strictly in sequence order. A soft failure is logged
/// and the session moves on. Each pick is preceded by an index snapshot;
/// an operator abort hands it to [`GitService::abort_pick`] once and ends
/// the session as cancelled, with no later commit attempted. Fatal git
/// errors are returned as `Err`.
///
/// # Arguments
/// * `sequence` - commits to pick, oldest first
/// * `git` - git service for picks and status checks
/// * `prompt` - operator prompt used while conflicts are pending
/// * `progress` - progress callback for status updates
/// * `options` - session options
pub async fn run_pick_session(
    sequence: &[CommitRecord],
    git: &dyn GitService,
    prompt: &dyn OperatorPrompt,
    progress: &dyn ProgressCallback,
    options: PickOptions,
) -> Result<PickSession> {
    let total = sequence.len();
    let mut records = Vec::with_capacity(total);

    for (index, commit) in sequence.iter().enumerate() {
        progress.on_pick_start(commit, index, total).await;

        let outcome = pick_commit(commit, git, prompt, progress, options).await?;
        progress.on_outcome(commit, &outcome).await;

        let aborted = matches!(outcome, PickOutcome::Aborted { .. });
        records.push(PickRecord {
            commit: commit.clone(),
            outcome,
        });

        if aborted {
            info!(hash = %commit.hash, "pick session cancelled by operator");
            return Ok(PickSession {
                records,
                end: SessionEnd::Cancelled {
                    hash: commit.hash.clone(),
                },
            });
        }
    }

    Ok(PickSession {
        records,
        end: SessionEnd::Completed,
    })
}

/// Drive one commit through the pick state machine
async fn pick_commit(
    commit: &CommitRecord,
    git: &dyn GitService,
    prompt: &dyn OperatorPrompt,
    progress: &dyn ProgressCallback,
    options: PickOptions,
) -> Result<PickOutcome> {
    let mut state = PickState::Picking;

    let snapshot = match git.snapshot_index().await {
        Ok(tree) => Some(tree),
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            warn!(hash = %commit.hash, error = %e, "could not snapshot index");
            None
        }
    };
    debug!(hash = %commit.hash, snapshot = ?snapshot, "cherry-picking");

    let attempt = match git.cherry_pick_no_commit(&commit.hash).await {
        Ok(attempt) => attempt,
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            warn!(hash = %commit.hash, error = %e, "cherry-pick could not run");
            state.transition(PickState::Failed)?;
            return Ok(PickOutcome::Failed {
                reason: e.to_string(),
            });
        }
    };

    // The exit code alone is not trusted: a pick can exit zero and still
    // leave unmerged paths, or fail for reasons that are not conflicts.
    // An unreadable status hands the commit to the operator.
    let status = read_status(commit, git, progress).await?;

    match &status {
        Some(status) if !status.has_conflicts() => {
            if attempt.success {
                state.transition(PickState::Applied)?;
                return Ok(PickOutcome::Applied);
            }

            let reason = attempt.reason();
            warn!(hash = %commit.hash, %reason, "cherry-pick failed without conflicts");
            state.transition(PickState::Failed)?;
            if options.failure_policy == FailurePolicy::Continue {
                continue_after_failure(commit, git, progress).await?;
            }
            return Ok(PickOutcome::Failed { reason });
        }
        Some(status) => {
            state.transition(PickState::Conflicted)?;
            warn!(
                hash = %commit.hash,
                paths = status.unmerged_paths.len(),
                "cherry-pick produced conflicts"
            );
            progress.on_conflict(commit, &status.unmerged_paths).await;
        }
        None => state.transition(PickState::Conflicted)?,
    }

    state.transition(PickState::AwaitingOperator)?;
    loop {
        let answer = prompt.ask(CONFLICT_PROMPT).await?;

        match OperatorResponse::parse(&answer) {
            OperatorResponse::Resolved => match read_status(commit, git, progress).await? {
                Some(status) if !status.has_conflicts() => {
                    state.transition(PickState::Applied)?;
                    return Ok(PickOutcome::ConflictResolved);
                }
                Some(_) => {
                    debug!(hash = %commit.hash, "operator acknowledged, conflicts remain");
                    progress.on_message(CONFLICTS_REMAIN).await;
                    state.transition(PickState::AwaitingOperator)?;
                }
                None => state.transition(PickState::AwaitingOperator)?,
            },
            OperatorResponse::Abort => {
                let restored = match git.abort_pick(snapshot.as_deref()).await {
                    Ok(()) => true,
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => {
                        warn!(hash = %commit.hash, error = %e, "cherry-pick abort failed");
                        progress
                            .on_message(&format!("Failed to abort cherry-pick: {e}"))
                            .await;
                        false
                    }
                };
                state.transition(PickState::Aborted)?;
                return Ok(PickOutcome::Aborted { restored });
            }
            OperatorResponse::Unrecognized(text) => {
                progress
                    .on_message(&format!(
                        "Unrecognized response {text:?}: press Enter once resolved, or type 'abort'."
                    ))
                    .await;
                state.transition(PickState::AwaitingOperator)?;
            }
        }
    }
}

/// Working tree status, or `None` after reporting a soft failure
///
/// The operator may be running git in the same tree while a conflict is
/// pending, so a failed status read is reported rather than ending the run.
async fn read_status(
    commit: &CommitRecord,
    git: &dyn GitService,
    progress: &dyn ProgressCallback,
) -> Result<Option<RepoStatus>> {
    match git.status().await {
        Ok(status) => Ok(Some(status)),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            warn!(hash = %commit.hash, error = %e, "could not read status");
            progress
                .on_message(&format!("{STATUS_UNREADABLE}: {e}"))
                .await;
            Ok(None)
        }
    }
}

/// `FailurePolicy::Continue`: try `cherry-pick --continue`, failing softly
async fn continue_after_failure(
    commit: &CommitRecord,
    git: &dyn GitService,
    progress: &dyn ProgressCallback,
) -> Result<()> {
    match git.continue_pick().await {
        Ok(attempt) if attempt.success => {
            debug!(hash = %commit.hash, "cherry-pick --continue succeeded");
        }
        Ok(attempt) => {
            let reason = attempt.reason();
            warn!(hash = %commit.hash, %reason, "cherry-pick --continue failed");
            progress
                .on_message(&format!("cherry-pick --continue failed: {reason}"))
                .await;
        }
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            warn!(hash = %commit.hash, error = %e, "cherry-pick --continue could not run");
        }
    }
    Ok(())
}
