//! `GitService` backed by the git executable

use super::GitService;
use super::parse::{parse_log_output, parse_porcelain_status, LOG_FORMAT};
use crate::error::{Error, Result};
use crate::types::{BranchQuery, CommitRecord, MatchMode, PickAttempt, RepoStatus};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// Default git executable name
pub const GIT_COMMAND: &str = "git";

/// Runs git commands against one working tree
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: PathBuf,
    match_mode: MatchMode,
}

impl GitCli {
    /// Open the repository containing `path`.
    ///
    /// Fails with [`Error::GitNotFound`] when git cannot be started and
    /// [`Error::NotARepository`] when `path` is outside any work tree.
    pub async fn open(path: &Path, program: Option<&str>, match_mode: MatchMode) -> Result<Self> {
        if !path.is_dir() {
            return Err(Error::NotARepository(path.to_path_buf()));
        }

        let probe = Self {
            program: program.unwrap_or(GIT_COMMAND).to_string(),
            workdir: path.to_path_buf(),
            match_mode,
        };

        let output = probe.output(&["rev-parse", "--show-toplevel"]).await?;
        if !output.status.success() {
            return Err(Error::NotARepository(path.to_path_buf()));
        }

        let root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
        debug!(root = %root.display(), "opened git repository");

        Ok(Self {
            workdir: root,
            ..probe
        })
    }

    async fn output(&self, args: &[&str]) -> Result<Output> {
        debug!(?args, "running git");
        Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .env("GIT_TERMINAL_PROMPT", "0")
            // `cherry-pick --continue` must not block on an editor
            .env("GIT_EDITOR", "true")
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::GitNotFound
                } else {
                    Error::Io(e)
                }
            })
    }

    /// Run git and return stdout, turning a non-zero exit into `Error::Git`
    async fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args).await?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::Git(format!(
                "`git {}` failed: {}",
                args.join(" "),
                stderr.trim()
            )))
        }
    }

    /// Run git and report success plus combined output without failing
    async fn attempt(&self, args: &[&str]) -> Result<PickAttempt> {
        let output = self.output(args).await?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(PickAttempt {
            success: output.status.success(),
            output: text,
        })
    }
}

#[async_trait]
impl GitService for GitCli {
    async fn search_history(&self, query: &BranchQuery) -> Result<Vec<CommitRecord>> {
        let grep = format!("--grep={}", query.as_str());
        let mode = match self.match_mode {
            MatchMode::Fixed => "--fixed-strings",
            MatchMode::Regex => "--basic-regexp",
        };
        let out = self
            .run(&["log", "--all", "--no-merges", LOG_FORMAT, mode, &grep, "--"])
            .await?;
        let commits = parse_log_output(&out)?;
        debug!(query = query.as_str(), count = commits.len(), "searched history");
        Ok(commits)
    }

    async fn cherry_pick_no_commit(&self, hash: &str) -> Result<PickAttempt> {
        let attempt = self.attempt(&["cherry-pick", "--no-commit", hash]).await?;
        debug!(hash, success = attempt.success, "cherry-pick finished");
        Ok(attempt)
    }

    async fn status(&self) -> Result<RepoStatus> {
        let out = self.run(&["status", "--porcelain=v1"]).await?;
        Ok(parse_porcelain_status(&out))
    }

    async fn snapshot_index(&self) -> Result<String> {
        let out = self.run(&["write-tree"]).await?;
        Ok(out.trim().to_string())
    }

    async fn abort_pick(&self, snapshot: Option<&str>) -> Result<()> {
        let attempt = self.attempt(&["cherry-pick", "--abort"]).await?;
        if attempt.success {
            return Ok(());
        }

        let Some(tree) = snapshot else {
            return Err(Error::Git(format!(
                "`git cherry-pick --abort` failed: {}",
                attempt.reason()
            )));
        };
        debug!(tree, reason = %attempt.reason(), "restoring index snapshot");
        self.run(&["read-tree", "--reset", "-u", tree]).await?;
        Ok(())
    }

    async fn continue_pick(&self) -> Result<PickAttempt> {
        self.attempt(&["cherry-pick", "--continue"]).await
    }

    async fn git_dir(&self) -> Result<PathBuf> {
        let out = self.run(&["rev-parse", "--absolute-git-dir"]).await?;
        Ok(PathBuf::from(out.trim()))
    }
}
