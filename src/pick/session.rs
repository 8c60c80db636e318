//! Pick session results

use crate::types::CommitRecord;

/// Final outcome for one commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Applied cleanly
    Applied,
    /// Conflicted, then resolved by the operator
    ConflictResolved,
    /// Pick failed without conflicts (empty diff, already applied, ...)
    Failed {
        /// Short reason taken from git's output
        reason: String,
    },
    /// Operator aborted while this commit was conflicted
    Aborted {
        /// Whether the index and working tree were put back as they were
        /// before the pick
        restored: bool,
    },
}

impl PickOutcome {
    /// Whether the commit's changes ended up in the working tree
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied | Self::ConflictResolved)
    }
}

impl std::fmt::Display for PickOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied => write!(f, "applied"),
            Self::ConflictResolved => write!(f, "applied after resolving conflicts"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
            Self::Aborted { restored: true } => write!(f, "aborted"),
            Self::Aborted { restored: false } => {
                write!(f, "aborted, working tree not restored")
            }
        }
    }
}

/// A processed commit and what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRecord {
    /// The commit
    pub commit: CommitRecord,
    /// Its outcome
    pub outcome: PickOutcome,
}

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every commit in the sequence was processed
    Completed,
    /// Operator aborted while this commit was conflicted
    Cancelled {
        /// Hash of the commit whose pick was aborted
        hash: String,
    },
}

/// Result of one driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSession {
    /// Processed commits in pick order
    pub records: Vec<PickRecord>,
    /// Completion or cancellation
    pub end: SessionEnd,
}

impl PickSession {
    /// Whether the operator cancelled the run
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.end, SessionEnd::Cancelled { .. })
    }

    /// Whether every commit was processed and none failed
    pub fn is_success(&self) -> bool {
        !self.is_cancelled() && self.records.iter().all(|r| r.outcome.is_applied())
    }

    /// Outcomes in pick order
    pub fn outcomes(&self) -> Vec<&PickOutcome> {
        self.records.iter().map(|r| &r.outcome).collect()
    }

    /// Number of commits whose changes were applied
    pub fn applied_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_applied())
            .count()
    }

    /// Whether an aborted pick was undone; `None` unless cancelled
    pub fn abort_restored(&self) -> Option<bool> {
        if !self.is_cancelled() {
            return None;
        }
        match self.records.last().map(|r| &r.outcome) {
            Some(PickOutcome::Aborted { restored }) => Some(*restored),
            _ => None,
        }
    }

    /// Commits that failed softly
    pub fn failed(&self) -> impl Iterator<Item = &PickRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, PickOutcome::Failed { .. }))
    }
}
