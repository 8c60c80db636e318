//! Parsers for git command output

use crate::error::{Error, Result};
use crate::types::{CommitRecord, RepoStatus};
use chrono::DateTime;

/// `git log` format matching [`parse_log_output`]: hash, strict ISO-8601
/// committer date, subject, separated by single spaces.
pub(crate) const LOG_FORMAT: &str = "--format=%H %cI %s";

/// Two-letter porcelain codes for unmerged entries
const UNMERGED_CODES: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

/// Parse a single `<hash> <timestamp> <summary>` line.
///
/// The summary may be empty and may contain spaces.
pub(crate) fn parse_commit_line(line: &str) -> Result<CommitRecord> {
    let mut parts = line.splitn(3, ' ');
    let hash = parts.next().unwrap_or_default();
    let timestamp = parts.next().unwrap_or_default();
    let summary = parts.next().unwrap_or_default();

    if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::Parse(format!("invalid commit hash in line: {line:?}")));
    }

    let timestamp = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|e| Error::Parse(format!("invalid timestamp {timestamp:?}: {e}")))?;

    Ok(CommitRecord {
        hash: hash.to_string(),
        timestamp,
        summary: summary.to_string(),
    })
}

/// Parse `git log` output produced with [`LOG_FORMAT`]
pub fn parse_log_output(output: &str) -> Result<Vec<CommitRecord>> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(parse_commit_line)
        .collect()
}

/// Parse `git status --porcelain=v1` output.
///
/// Only unmerged entries are kept; everything else in the tree is
/// irrelevant to conflict detection.
pub fn parse_porcelain_status(output: &str) -> RepoStatus {
    let unmerged_paths = output
        .lines()
        .filter_map(|line| {
            let code = line.get(..2)?;
            let path = line.get(3..)?;
            UNMERGED_CODES
                .contains(&code)
                .then(|| path.trim().to_string())
        })
        .collect();

    RepoStatus { unmerged_paths }
}
