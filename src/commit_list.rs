//! Persistence for the ordered commit list in `.git/cherry-batch/`.
//!
//! One commit per line as `<hash> <timestamp> <summary>`, oldest first.
//! The file sits between selection and picking so it can be inspected, or
//! trimmed to resume a partial run, before `cherry-batch pick` reads it.

use crate::error::{Error, Result};
use crate::git::parse_commit_line;
use crate::types::{CommitRecord, CommitSequence};
use chrono::SecondsFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name for cherry-batch metadata within the git dir.
const BATCH_DIR: &str = "cherry-batch";

/// Filename for the commit list.
const COMMIT_LIST_FILE: &str = "commit-list.txt";

/// Header written above the records.
const HEADER: &str = "# cherry-batch commit list (oldest first)\n\
# Format: <hash> <timestamp> <summary>. Delete lines to skip commits.\n";

/// Default commit list location for a repository.
pub fn default_commit_list_path(git_dir: &Path) -> PathBuf {
    git_dir.join(BATCH_DIR).join(COMMIT_LIST_FILE)
}

/// Render a sequence in commit list format, header included.
pub fn render_commit_list(sequence: &[CommitRecord]) -> String {
    let mut out = String::from(HEADER);
    for commit in sequence {
        out.push_str(&commit.hash);
        out.push(' ');
        out.push_str(&commit.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true));
        out.push(' ');
        out.push_str(&commit.summary);
        out.push('\n');
    }
    out
}

/// Parse commit list text, keeping file order.
///
/// Blank lines and `#` comments are ignored.
pub fn parse_commit_list(content: &str) -> Result<CommitSequence> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| {
            parse_commit_line(line.trim())
                .map_err(|e| Error::CommitList(format!("line {}: {e}", idx + 1)))
        })
        .collect()
}

/// Load the commit list from disk.
pub fn load_commit_list(path: &Path) -> Result<CommitSequence> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::CommitList(format!("failed to read {}: {e}", path.display())))?;

    parse_commit_list(&content)
}

/// Save the commit list to disk, replacing any earlier list.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_commit_list(path: &Path, sequence: &[CommitRecord]) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                Error::CommitList(format!("failed to create {}: {e}", dir.display()))
            })?;
        }
    }

    fs::write(path, render_commit_list(sequence))
        .map_err(|e| Error::CommitList(format!("failed to write {}: {e}", path.display())))?;

    Ok(())
}
