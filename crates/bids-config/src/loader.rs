//! Loading `base.toml` and `local.toml`.

use std::path::Path;

use toml::Table;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::merge::deep_merge;
use crate::paths::find_config_dir;
use crate::settings::Config;

/// Shared settings, required.
pub const BASE_CONFIG_FILE: &str = "base.toml";

/// Machine-specific overrides, optional and usually not version controlled.
pub const LOCAL_CONFIG_FILE: &str = "local.toml";

/// Reads `base.toml` from `config_dir` and merges `local.toml` over it.
pub fn load_config_table(config_dir: &Path) -> Result<Table> {
    let base_path = config_dir.join(BASE_CONFIG_FILE);
    if !base_path.is_file() {
        return Err(ConfigError::MissingBaseConfig { path: base_path });
    }
    let base = read_table(&base_path)?;

    let local_path = config_dir.join(LOCAL_CONFIG_FILE);
    if !local_path.is_file() {
        return Ok(base);
    }
    debug!(path = %local_path.display(), "applying local config overrides");
    let local = read_table(&local_path)?;
    Ok(deep_merge(base, local))
}

/// Loads the merged configuration.
///
/// With `config_dir` unset the directory is located with
/// [`find_config_dir`].
pub fn load_config(config_dir: Option<&Path>) -> Result<Config> {
    let table = match config_dir {
        Some(dir) => load_config_table(dir)?,
        None => load_config_table(&find_config_dir()?)?,
    };
    Config::from_table(table)
}

fn read_table(path: &Path) -> Result<Table> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}
