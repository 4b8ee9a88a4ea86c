//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bids-inventory",
    version,
    about = "Inventory which BIDS files exist for each subject",
    long_about = "Scan a BIDS dataset and write a tab-separated inventory with one row per\n\
                  file type instance and one column per subject. Subjects without a file\n\
                  for a row are marked DNE.\n\n\
                  Defaults for the dataset root, output path and subject list are read\n\
                  from config/base.toml and config/local.toml when present."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory holding base.toml and an optional local.toml.
    #[arg(long = "config-dir", value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the BIDS file inventory TSV.
    Inventory(InventoryArgs),

    /// List the subjects found in a BIDS dataset.
    Subjects(SubjectsArgs),
}

#[derive(Parser)]
pub struct InventoryArgs {
    /// BIDS dataset root (default: paths.bids_project_dir from config, else ".").
    #[arg(value_name = "BIDS_ROOT")]
    pub bids_root: Option<PathBuf>,

    /// Output TSV (default: paths.inventory_path from config, else
    /// <BIDS_ROOT>/inventory/bids_file_inventory.tsv).
    #[arg(value_name = "OUTPUT")]
    pub output_path: Option<PathBuf>,

    /// Subject IDs, with or without the "sub-" prefix (e.g. 01 02 03).
    ///
    /// When omitted, inventory.subjects from config is used, and failing
    /// that every sub-* directory under the dataset root.
    #[arg(long = "subjects", value_name = "ID", num_args = 1..)]
    pub subjects: Option<Vec<String>>,

    /// How to print the run summary.
    #[arg(long = "summary", value_enum, default_value = "table")]
    pub summary: SummaryFormatArg,
}

#[derive(Parser)]
pub struct SubjectsArgs {
    /// BIDS dataset root (default: paths.bids_project_dir from config, else ".").
    #[arg(value_name = "BIDS_ROOT")]
    pub bids_root: Option<PathBuf>,
}

/// Summary output choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
    None,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
