//! Config directory resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::loader::BASE_CONFIG_FILE;

/// Environment variable naming the config directory.
pub const CONFIG_DIR_ENV_VAR: &str = "BIDS_CONFIG_DIR";

/// Name of the directory searched for in the current directory's ancestors.
const CONFIG_DIR_NAME: &str = "config";

/// How many ancestors (including the start directory) are searched.
const MAX_SEARCH_DEPTH: usize = 5;

/// Locates the config directory.
///
/// Resolution order:
/// 1. `BIDS_CONFIG_DIR`, when it names an existing directory
/// 2. the nearest `config/` containing `base.toml`, searching the current
///    directory and up to four of its parents
pub fn find_config_dir() -> Result<PathBuf> {
    let env_dir = std::env::var_os(CONFIG_DIR_ENV_VAR).map(PathBuf::from);
    let start = std::env::current_dir().map_err(|e| ConfigError::io(".", e))?;
    find_config_dir_from(env_dir, &start)
}

/// [`find_config_dir`] with the environment value and start directory given.
pub fn find_config_dir_from(env_dir: Option<PathBuf>, start: &Path) -> Result<PathBuf> {
    if let Some(dir) = env_dir {
        if dir.is_dir() {
            debug!(path = %dir.display(), "config directory from {CONFIG_DIR_ENV_VAR}");
            return Ok(dir);
        }
        debug!(path = %dir.display(), "ignoring {CONFIG_DIR_ENV_VAR}: not a directory");
    }

    for ancestor in start.ancestors().take(MAX_SEARCH_DEPTH) {
        let candidate = ancestor.join(CONFIG_DIR_NAME);
        if candidate.join(BASE_CONFIG_FILE).is_file() {
            debug!(path = %candidate.display(), "config directory found by search");
            return Ok(candidate);
        }
    }

    Err(ConfigError::ConfigDirNotFound {
        env_var: CONFIG_DIR_ENV_VAR,
    })
}
