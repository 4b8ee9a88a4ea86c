use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use bids_config::{Config, ConfigError, find_config_dir, load_config};
use bids_ingest::auto_discover_subjects;
use bids_inventory::{InventoryReport, create_inventory};
use bids_model::SUBJECT_PREFIX;

use crate::cli::{Cli, Command, InventoryArgs, SubjectsArgs};
use crate::summary::{print_subjects, print_summary};

/// Inventory location used when neither the command line nor config names one.
const DEFAULT_INVENTORY_PATH: &str = "inventory/bids_file_inventory.tsv";

/// Loads configuration for a CLI run.
///
/// An explicit directory must contain a valid `base.toml`. Without one the
/// usual search runs, and finding nothing yields an empty configuration.
pub fn load_cli_config(config_dir: Option<&Path>) -> Result<Config> {
    if let Some(dir) = config_dir {
        return load_config(Some(dir))
            .with_context(|| format!("load config from {}", dir.display()));
    }
    match find_config_dir() {
        Ok(dir) => {
            load_config(Some(&dir)).with_context(|| format!("load config from {}", dir.display()))
        }
        Err(ConfigError::ConfigDirNotFound { .. }) => {
            debug!("no config directory found, using defaults");
            Ok(Config::default())
        }
        Err(error) => Err(anyhow::Error::new(error).context("locate config directory")),
    }
}

pub fn resolve_bids_root(arg: Option<&Path>, config: &Config) -> PathBuf {
    arg.map(Path::to_path_buf)
        .or_else(|| config.paths.bids_project_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn resolve_output_path(arg: Option<&Path>, config: &Config, bids_root: &Path) -> PathBuf {
    arg.map(Path::to_path_buf)
        .or_else(|| config.paths.inventory_path.clone())
        .unwrap_or_else(|| bids_root.join(DEFAULT_INVENTORY_PATH))
}

/// Strips an optional `sub-` prefix so `sub-01` and `01` are equivalent.
pub fn normalize_subject(id: &str) -> String {
    id.strip_prefix(SUBJECT_PREFIX).unwrap_or(id).to_string()
}

/// Subjects from the command line, then config, then auto-discovery.
pub fn resolve_subjects(
    arg: Option<&[String]>,
    config: &Config,
    bids_root: &Path,
) -> Result<Vec<String>> {
    if let Some(ids) = arg.or(config.inventory.subjects.as_deref()) {
        return Ok(ids.iter().map(|id| normalize_subject(id)).collect());
    }

    info!(bids_root = %bids_root.display(), "auto-discovering subjects");
    let subjects = auto_discover_subjects(bids_root)
        .with_context(|| format!("discover subjects in {}", bids_root.display()))?;
    if subjects.is_empty() {
        bail!("no subjects found in {}", bids_root.display());
    }
    info!(
        subject_count = subjects.len(),
        subjects = %subjects.join(", "),
        "subjects discovered"
    );
    Ok(subjects)
}

/// Loads config, runs the selected command and prints its output.
///
/// Returns the process exit code: 0 on success, 1 on any failure.
pub fn run(cli: Cli) -> i32 {
    let config = match load_cli_config(cli.config_dir.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    match cli.command {
        Command::Inventory(args) => match run_inventory(&args, &config) {
            Ok(report) => match print_summary(&report, args.summary) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("error: failed to render summary: {error}");
                    1
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Subjects(args) => match run_subjects(&args, &config) {
            Ok(subjects) => {
                print_subjects(&subjects);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    }
}

pub fn run_inventory(args: &InventoryArgs, config: &Config) -> Result<InventoryReport> {
    let bids_root = resolve_bids_root(args.bids_root.as_deref(), config);
    let output_path = resolve_output_path(args.output_path.as_deref(), config, &bids_root);
    let subjects = resolve_subjects(args.subjects.as_deref(), config, &bids_root)?;

    info!(
        bids_root = %bids_root.display(),
        output = %output_path.display(),
        subject_count = subjects.len(),
        "creating inventory"
    );
    Ok(create_inventory(&bids_root, &subjects, &output_path)?)
}

pub fn run_subjects(args: &SubjectsArgs, config: &Config) -> Result<Vec<String>> {
    let bids_root = resolve_bids_root(args.bids_root.as_deref(), config);
    let subjects = auto_discover_subjects(&bids_root)
        .with_context(|| format!("discover subjects in {}", bids_root.display()))?;
    if subjects.is_empty() {
        bail!("no subjects found in {}", bids_root.display());
    }
    Ok(subjects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_prefix_is_optional() {
        assert_eq!(normalize_subject("sub-01"), "01");
        assert_eq!(normalize_subject("01"), "01");
        assert_eq!(normalize_subject("control-sub-1"), "control-sub-1");
    }

    #[test]
    fn output_defaults_under_root() {
        let config = Config::default();
        let root = PathBuf::from("/data/bids");
        assert_eq!(
            resolve_output_path(None, &config, &root),
            PathBuf::from("/data/bids/inventory/bids_file_inventory.tsv")
        );
        assert_eq!(resolve_bids_root(None, &config), PathBuf::from("."));
    }
}
