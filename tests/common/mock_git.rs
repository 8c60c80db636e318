//! Mock git service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use cherry_batch::error::{Error, Result};
use cherry_batch::git::GitService;
use cherry_batch::types::{BranchQuery, CommitRecord, PickAttempt, RepoStatus};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Conflict configured for a specific commit
#[derive(Debug, Clone)]
struct ConflictPlan {
    paths: Vec<String>,
    /// Status checks that still report conflicts after the one right
    /// after the pick
    unresolved_checks: usize,
}

/// Conflict currently present in the fake working tree
#[derive(Debug, Clone)]
struct PendingConflict {
    paths: Vec<String>,
    remaining_checks: usize,
}

/// Simple mock git service for testing
///
/// Features:
/// - Configurable search results per query
/// - Scripted conflicts per commit, resolved after N status checks
/// - Index snapshots named `tree-<n>` in call order
/// - Call tracking for verification
/// - Error injection for failure path testing
#[derive(Default)]
pub struct MockGitService {
    search_responses: Mutex<HashMap<String, Vec<CommitRecord>>>,
    pick_responses: Mutex<HashMap<String, PickAttempt>>,
    conflicts: Mutex<HashMap<String, ConflictPlan>>,
    pending: Mutex<Option<PendingConflict>>,
    continue_response: Mutex<Option<PickAttempt>>,
    // Call tracking
    search_calls: Mutex<Vec<String>>,
    pick_calls: Mutex<Vec<String>>,
    status_calls: Mutex<usize>,
    abort_calls: Mutex<usize>,
    continue_calls: Mutex<usize>,
    snapshot_calls: Mutex<usize>,
    abort_snapshots: Mutex<Vec<Option<String>>>,
    // Error injection
    error_on_search: Mutex<HashMap<String, String>>,
    git_missing: Mutex<bool>,
    error_on_abort: Mutex<Option<String>>,
    error_on_status_call: Mutex<HashMap<usize, String>>,
    error_on_snapshot: Mutex<Option<String>>,
}

impl MockGitService {
    /// Create a mock where every pick applies cleanly
    pub fn new() -> Self {
        Self::default()
    }

    // === Response configuration ===

    /// Set the commits `search_history` returns for a query
    pub fn set_search_response(&self, query: &str, commits: Vec<CommitRecord>) {
        self.search_responses
            .lock()
            .unwrap()
            .insert(query.to_string(), commits);
    }

    /// Set the result of picking a specific commit (default: success)
    pub fn set_pick_response(&self, hash: &str, attempt: PickAttempt) {
        self.pick_responses
            .lock()
            .unwrap()
            .insert(hash.to_string(), attempt);
    }

    /// Make picking `hash` leave unmerged `paths`.
    ///
    /// The status check right after the pick reports the conflict, and so
    /// do the next `unresolved_checks` checks; after that the tree is clean.
    pub fn set_conflict(&self, hash: &str, paths: &[&str], unresolved_checks: usize) {
        self.conflicts.lock().unwrap().insert(
            hash.to_string(),
            ConflictPlan {
                paths: paths.iter().map(ToString::to_string).collect(),
                unresolved_checks,
            },
        );
    }

    /// Set the result of `continue_pick` (default: success)
    pub fn set_continue_response(&self, attempt: PickAttempt) {
        *self.continue_response.lock().unwrap() = Some(attempt);
    }

    // === Error injection methods ===

    /// Make `search_history` fail (softly) for a query
    pub fn fail_search(&self, query: &str, msg: &str) {
        self.error_on_search
            .lock()
            .unwrap()
            .insert(query.to_string(), msg.to_string());
    }

    /// Make every call fail as if git were not installed
    pub fn remove_git(&self) {
        *self.git_missing.lock().unwrap() = true;
    }

    /// Make `abort_pick` return an error
    pub fn fail_abort(&self, msg: &str) {
        *self.error_on_abort.lock().unwrap() = Some(msg.to_string());
    }

    /// Make the `call`-th `status` check (1-based) fail softly
    pub fn fail_status_call(&self, call: usize, msg: &str) {
        self.error_on_status_call
            .lock()
            .unwrap()
            .insert(call, msg.to_string());
    }

    /// Make `snapshot_index` fail softly
    pub fn fail_snapshot(&self, msg: &str) {
        *self.error_on_snapshot.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Queries `search_history` was called with
    pub fn get_search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Hashes `cherry_pick_no_commit` was called with, in order
    pub fn get_pick_calls(&self) -> Vec<String> {
        self.pick_calls.lock().unwrap().clone()
    }

    /// Number of `status` calls
    pub fn status_call_count(&self) -> usize {
        *self.status_calls.lock().unwrap()
    }

    /// Number of `abort_pick` calls
    pub fn abort_call_count(&self) -> usize {
        *self.abort_calls.lock().unwrap()
    }

    /// Number of `continue_pick` calls
    pub fn continue_call_count(&self) -> usize {
        *self.continue_calls.lock().unwrap()
    }

    /// Number of `snapshot_index` calls
    pub fn snapshot_call_count(&self) -> usize {
        *self.snapshot_calls.lock().unwrap()
    }

    /// Snapshot passed to each `abort_pick` call
    pub fn get_abort_snapshots(&self) -> Vec<Option<String>> {
        self.abort_snapshots.lock().unwrap().clone()
    }

    /// Assert that `hash` was never picked
    pub fn assert_not_picked(&self, hash: &str) {
        let calls = self.get_pick_calls();
        assert!(
            !calls.iter().any(|c| c == hash),
            "Expected {hash} NOT to be picked but it was: {calls:?}"
        );
    }

    fn check_git(&self) -> Result<()> {
        if *self.git_missing.lock().unwrap() {
            return Err(Error::GitNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl GitService for MockGitService {
    async fn search_history(&self, query: &BranchQuery) -> Result<Vec<CommitRecord>> {
        self.search_calls
            .lock()
            .unwrap()
            .push(query.as_str().to_string());
        self.check_git()?;

        if let Some(msg) = self.error_on_search.lock().unwrap().get(query.as_str()) {
            return Err(Error::Git(msg.clone()));
        }

        let responses = self.search_responses.lock().unwrap();
        Ok(responses.get(query.as_str()).cloned().unwrap_or_default())
    }

    async fn cherry_pick_no_commit(&self, hash: &str) -> Result<PickAttempt> {
        self.pick_calls.lock().unwrap().push(hash.to_string());
        self.check_git()?;

        let configured = self.pick_responses.lock().unwrap().get(hash).cloned();

        if let Some(plan) = self.conflicts.lock().unwrap().get(hash) {
            *self.pending.lock().unwrap() = Some(PendingConflict {
                paths: plan.paths.clone(),
                remaining_checks: plan.unresolved_checks + 1,
            });
            // Real git exits non-zero on conflict unless told otherwise
            return Ok(configured.unwrap_or_else(|| {
                PickAttempt::failed(format!("error: could not apply {hash}... conflict"))
            }));
        }

        Ok(configured.unwrap_or_else(PickAttempt::ok))
    }

    async fn status(&self) -> Result<RepoStatus> {
        let call = {
            let mut calls = self.status_calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        self.check_git()?;

        if let Some(msg) = self.error_on_status_call.lock().unwrap().get(&call) {
            return Err(Error::Git(msg.clone()));
        }

        let mut pending = self.pending.lock().unwrap();
        if let Some(conflict) = pending.as_mut() {
            if conflict.remaining_checks > 0 {
                conflict.remaining_checks -= 1;
                return Ok(RepoStatus {
                    unmerged_paths: conflict.paths.clone(),
                });
            }
        }
        *pending = None;
        Ok(RepoStatus::clean())
    }

    async fn snapshot_index(&self) -> Result<String> {
        let call = {
            let mut calls = self.snapshot_calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        self.check_git()?;

        if let Some(msg) = self.error_on_snapshot.lock().unwrap().as_ref() {
            return Err(Error::Git(msg.clone()));
        }
        Ok(format!("tree-{call}"))
    }

    async fn abort_pick(&self, snapshot: Option<&str>) -> Result<()> {
        *self.abort_calls.lock().unwrap() += 1;
        self.abort_snapshots
            .lock()
            .unwrap()
            .push(snapshot.map(ToString::to_string));
        self.check_git()?;

        if let Some(msg) = self.error_on_abort.lock().unwrap().as_ref() {
            return Err(Error::Git(msg.clone()));
        }
        *self.pending.lock().unwrap() = None;
        Ok(())
    }

    async fn continue_pick(&self) -> Result<PickAttempt> {
        *self.continue_calls.lock().unwrap() += 1;
        self.check_git()?;

        Ok(self
            .continue_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(PickAttempt::ok))
    }

    async fn git_dir(&self) -> Result<PathBuf> {
        self.check_git()?;
        Ok(PathBuf::from("/mock/repo/.git"))
    }
}
