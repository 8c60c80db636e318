//! Core types for cherry-batch

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of hex characters shown for abbreviated commit hashes
pub const SHORT_HASH_LEN: usize = 8;

/// A search term used to match commit messages (usually a branch name)
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchQuery(String);

impl BranchQuery {
    /// Build a query from user text, returning `None` for blank input
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The query text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse comma-separated user input into unique branch queries.
///
/// Blank entries are dropped and repeats collapse onto their first
/// occurrence, so `"feat-a, ,feat-b,feat-a"` gives `[feat-a, feat-b]`.
pub fn parse_branch_queries(input: &str) -> Vec<BranchQuery> {
    let mut seen = HashSet::new();
    input
        .split(',')
        .filter_map(BranchQuery::new)
        .filter(|q| seen.insert(q.clone()))
        .collect()
}

/// A commit found in history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full commit hash (hex)
    pub hash: String,
    /// Committer timestamp
    pub timestamp: DateTime<FixedOffset>,
    /// First line of the commit message
    pub summary: String,
}

impl CommitRecord {
    /// Abbreviated hash for display
    pub fn short_hash(&self) -> &str {
        self.hash
            .get(..SHORT_HASH_LEN)
            .unwrap_or(self.hash.as_str())
    }
}

impl std::fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.short_hash(), self.summary)
    }
}

/// Commits in the order they will be picked (oldest first)
pub type CommitSequence = Vec<CommitRecord>;

/// Working tree status as far as the driver cares about it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoStatus {
    /// Paths git reports as unmerged
    pub unmerged_paths: Vec<String>,
}

impl RepoStatus {
    /// A status with no unmerged paths
    pub const fn clean() -> Self {
        Self {
            unmerged_paths: Vec::new(),
        }
    }

    /// A status with the given unmerged paths
    pub fn conflicted<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            unmerged_paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any unresolved conflicts remain
    pub fn has_conflicts(&self) -> bool {
        !self.unmerged_paths.is_empty()
    }
}

/// Result of invoking a cherry-pick (or `--continue`) command
///
/// A non-zero exit is not an error at this level: the driver decides
/// what a failed pick means by looking at repository status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickAttempt {
    /// Whether the command exited successfully
    pub success: bool,
    /// Combined stdout/stderr text
    pub output: String,
}

impl PickAttempt {
    /// A successful attempt with no output
    pub const fn ok() -> Self {
        Self {
            success: true,
            output: String::new(),
        }
    }

    /// A failed attempt with the given output
    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }

    /// First non-empty output line, used as a short failure reason
    pub fn reason(&self) -> String {
        self.output
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("cherry-pick failed")
            .to_string()
    }
}

/// What to do when a pick fails without leaving conflicts behind
/// (empty diff, commit already applied, ...)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the failure and move on to the next commit
    #[default]
    Skip,
    /// Run `git cherry-pick --continue`, then move on
    Continue,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

/// How a branch query is matched against commit messages
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Literal substring match
    Fixed,
    /// Git's basic regular expression match, as plain `git log --grep`
    #[default]
    Regex,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Regex => write!(f, "regex"),
        }
    }
}
