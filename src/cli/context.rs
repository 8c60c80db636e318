//! Shared command context for CLI commands
//!
//! Extracts common setup code shared by run, select, and pick commands.

use cherry_batch::commit_list::default_commit_list_path;
use cherry_batch::config::Config;
use cherry_batch::error::Result;
use cherry_batch::git::{GitCli, GitService};
use cherry_batch::pick::PickOptions;
use cherry_batch::types::{FailurePolicy, MatchMode};
use std::path::{Path, PathBuf};

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--list`
    pub commit_list: Option<PathBuf>,
    /// `--on-failure`
    pub failure_policy: Option<FailurePolicy>,
    /// `--match-mode`
    pub match_mode: Option<MatchMode>,
}

/// Shared context for CLI commands
///
/// This struct encapsulates the common setup needed by run/select/pick:
/// - Opening the git repository
/// - Merging config file and command-line settings
/// - Resolving the commit list location
pub struct CommandContext {
    /// Git service for the repository
    pub git: GitCli,
    /// Where the ordered commit list lives
    pub commit_list_path: PathBuf,
    /// Options for the pick session
    pub pick_options: PickOptions,
}

impl CommandContext {
    /// Create a new command context
    pub async fn new(path: &Path, config: Config, overrides: Overrides) -> Result<Self> {
        let match_mode = overrides.match_mode.unwrap_or(config.match_mode);
        let git = GitCli::open(path, config.git_binary.as_deref(), match_mode).await?;

        let commit_list_path = match overrides.commit_list.or(config.commit_list) {
            Some(path) => path,
            None => default_commit_list_path(&git.git_dir().await?),
        };

        let pick_options = PickOptions {
            failure_policy: overrides.failure_policy.unwrap_or(config.failure_policy),
        };

        Ok(Self {
            git,
            commit_list_path,
            pick_options,
        })
    }
}
