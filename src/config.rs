//! User configuration loaded from `config.toml`.

use crate::error::{Error, Result};
use crate::types::{FailurePolicy, MatchMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "CHERRY_BATCH_CONFIG";

/// Directory name under the platform config dir.
const CONFIG_DIR: &str = "cherry-batch";

/// Filename for the config file.
const CONFIG_FILE: &str = "config.toml";

/// Settings read from the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Handling of picks that fail without conflicts
    pub failure_policy: FailurePolicy,
    /// How branch queries match commit messages
    pub match_mode: MatchMode,
    /// Commit list location (default: inside the git dir)
    pub commit_list: Option<PathBuf>,
    /// Git executable to run
    pub git_binary: Option<String>,
}

/// Config file location: `$CHERRY_BATCH_CONFIG`, else the platform config dir.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE)))
}

/// Load configuration from `path`.
///
/// Returns defaults if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}

/// Load configuration from the default location.
pub fn load_default_config() -> Result<Config> {
    config_path().map_or_else(|| Ok(Config::default()), |path| load_config(&path))
}
