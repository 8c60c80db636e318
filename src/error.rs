//! Error types for cherry-batch

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while selecting or picking commits
#[derive(Debug, Error)]
pub enum Error {
    /// The git executable could not be started
    #[error("git executable not found - is git installed and on PATH?")]
    GitNotFound,

    /// The working directory is not inside a git repository
    #[error("not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    /// A git command ran but reported failure
    #[error("git error: {0}")]
    Git(String),

    /// Output from git could not be understood
    #[error("parse error: {0}")]
    Parse(String),

    /// The ordered commit list could not be read or written
    #[error("commit list error: {0}")]
    CommitList(String),

    /// The configuration file is unreadable or invalid
    #[error("config error: {0}")]
    Config(String),

    /// Reading operator input failed
    #[error("prompt error: {0}")]
    Prompt(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invariant violation inside cherry-batch itself
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error leaves no way to make further progress.
    ///
    /// Fatal errors abort the whole run even where per-item failures
    /// (a single branch query, a single pick) are otherwise tolerated.
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::GitNotFound | Self::NotARepository(_) | Self::Io(_)
        )
    }
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
