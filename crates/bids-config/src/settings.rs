//! Typed view of the merged configuration.

use std::path::PathBuf;

use serde::Deserialize;
use toml::{Table, Value};

use crate::error::{ConfigError, Result};

/// `[paths]` section.
///
/// Other keys in the section are only reachable through [`Config::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root of the BIDS dataset.
    pub bids_project_dir: Option<PathBuf>,
    /// Where the inventory TSV is written.
    pub inventory_path: Option<PathBuf>,
}

/// `[inventory]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Subject IDs (without `sub-`) to inventory instead of auto-discovery.
    pub subjects: Option<Vec<String>>,
}

/// Merged configuration.
///
/// Loaded once per invocation and passed around explicitly. Sections other
/// than `[paths]` and `[inventory]` are kept in the raw table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub paths: PathsConfig,
    pub inventory: InventoryConfig,
    raw: Table,
}

#[derive(Deserialize)]
struct Sections {
    #[serde(default)]
    paths: PathsConfig,
    #[serde(default)]
    inventory: InventoryConfig,
}

impl Config {
    pub fn from_table(table: Table) -> Result<Self> {
        let sections: Sections = Value::Table(table.clone())
            .try_into()
            .map_err(|source| ConfigError::Invalid { source })?;
        Ok(Self {
            paths: sections.paths,
            inventory: sections.inventory,
            raw: table,
        })
    }

    /// The merged table as read from disk.
    pub fn raw(&self) -> &Table {
        &self.raw
    }

    /// Looks up a dotted key such as `slurm.email`.
    pub fn get(&self, dotted_key: &str) -> Option<&Value> {
        let mut parts = dotted_key.split('.');
        let first = parts.next()?;
        let mut current = self.raw.get(first)?;
        for part in parts {
            current = current.as_table()?.get(part)?;
        }
        Some(current)
    }
}
