//! Commit selection
//!
//! Two-phase pattern matching pick/:
//! 1. Gather - search history once per branch query (effectful)
//! 2. Order - merge, de-duplicate and sort the results (pure, testable)

mod gather;
mod order;

pub use gather::select_commits;
pub use order::build_commit_sequence;
