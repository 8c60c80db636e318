//! cherry-batch - bulk cherry-picking of feature branch commits
//!
//! Finds every non-merge commit whose message mentions one of a set of
//! feature branch names, orders them oldest first, and cherry-picks them
//! onto the current branch without committing. When a pick conflicts the
//! run pauses until the operator resolves the conflicts or aborts.
//!
//! The library is split along the same lines as a run:
//! - [`select`] builds the ordered [`types::CommitSequence`]
//! - [`commit_list`] stores it between selection and picking
//! - [`pick`] drives the cherry-pick state machine
//!
//! Git and the terminal sit behind the [`git::GitService`] and
//! [`prompt::OperatorPrompt`] traits.

pub mod commit_list;
pub mod config;
pub mod error;
pub mod git;
pub mod pick;
pub mod progress;
pub mod prompt;
pub mod select;
pub mod types;
