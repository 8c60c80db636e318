//! Commit ordering - pure functions for building the pick sequence
//!
//! No I/O happens here - the per-query search results are passed in,
//! making it easy to unit test.

use crate::types::{CommitRecord, CommitSequence};
use std::collections::HashSet;

/// Build the ordered pick sequence from per-query search results (PURE)
///
/// Batches are visited in query order and each batch in the order git
/// returned it. The first time a hash is seen wins; later copies of the
/// same commit are dropped. The survivors are sorted oldest first. The
/// sort is stable, so commits with equal timestamps keep that discovery
/// order and the result is reproducible for a given repository state.
///
/// # Arguments
/// * `batches` - search results, one batch per branch query
///
/// # Returns
/// Commits sorted ascending by timestamp, no hash repeated
#[must_use]
pub fn build_commit_sequence<I>(batches: I) -> CommitSequence
where
    I: IntoIterator<Item = Vec<CommitRecord>>,
{
    let mut seen = HashSet::new();
    let mut sequence: CommitSequence = batches
        .into_iter()
        .flatten()
        .filter(|commit| seen.insert(commit.hash.clone()))
        .collect();

    // Compares instants, so differing UTC offsets order correctly
    sequence.sort_by_key(|commit| commit.timestamp);
    sequence
}
