//! Integration tests for argument parsing and command execution.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use bids_cli::cli::{Cli, Command, SummaryFormatArg};
use bids_cli::commands::{load_cli_config, run, run_inventory, run_subjects};
use bids_config::Config;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn dataset() -> TempDir {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "sub-01/anat/sub-01_T1w.nii.gz");
    touch(dir.path(), "sub-01/anat/sub-01_T1w.json");
    touch(dir.path(), "sub-02/anat/sub-02_T1w.nii.gz");
    touch(dir.path(), "sub-02/func/sub-02_task-rest_bold.nii.gz");
    dir
}

fn inventory_cli(args: &[&str]) -> Cli {
    let mut argv = vec!["bids-inventory", "inventory"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn parses_inventory_arguments() {
    let cli = inventory_cli(&["data", "out.tsv", "--subjects", "01", "sub-02"]);
    let Command::Inventory(args) = cli.command else {
        panic!("expected inventory command");
    };
    assert_eq!(args.bids_root.as_deref(), Some(Path::new("data")));
    assert_eq!(args.output_path.as_deref(), Some(Path::new("out.tsv")));
    assert_eq!(
        args.subjects,
        Some(vec!["01".to_string(), "sub-02".to_string()])
    );
    assert_eq!(args.summary, SummaryFormatArg::Table);
}

#[test]
fn inventory_arguments_are_optional() {
    let cli = inventory_cli(&["--summary", "json"]);
    let Command::Inventory(args) = cli.command else {
        panic!("expected inventory command");
    };
    assert!(args.bids_root.is_none());
    assert!(args.output_path.is_none());
    assert!(args.subjects.is_none());
    assert_eq!(args.summary, SummaryFormatArg::Json);
}

#[test]
fn global_flags_follow_subcommand() {
    let cli = Cli::try_parse_from([
        "bids-inventory",
        "subjects",
        "data",
        "--log-format",
        "json",
        "--config-dir",
        "cfg",
    ])
    .unwrap();
    assert!(matches!(cli.command, Command::Subjects(_)));
    assert_eq!(cli.config_dir.as_deref(), Some(Path::new("cfg")));
}

#[test]
fn rejects_empty_subject_flag() {
    assert!(Cli::try_parse_from(["bids-inventory", "inventory", "--subjects"]).is_err());
}

#[test]
fn inventory_with_auto_discovered_subjects() {
    let dir = dataset();
    let root = dir.path().to_str().unwrap();
    let cli = inventory_cli(&[root]);
    let Command::Inventory(args) = cli.command else {
        panic!("expected inventory command");
    };

    let report = run_inventory(&args, &Config::default()).unwrap();

    assert_eq!(
        report.output_path,
        dir.path().join("inventory/bids_file_inventory.tsv")
    );
    assert!(report.output_path.is_file());
    assert_eq!(report.subjects(), ["01", "02"]);
    assert_eq!(report.row_count(), 3);
}

#[test]
fn inventory_normalizes_prefixed_subjects() {
    let dir = dataset();
    let out = dir.path().join("out.tsv");
    let cli = inventory_cli(&[
        dir.path().to_str().unwrap(),
        out.to_str().unwrap(),
        "--subjects",
        "sub-02",
    ]);
    let Command::Inventory(args) = cli.command else {
        panic!("expected inventory command");
    };

    let report = run_inventory(&args, &Config::default()).unwrap();

    assert_eq!(report.subjects(), ["02"]);
    let header = fs::read_to_string(&out).unwrap();
    assert!(header.starts_with("shorthand_label\tcount\tfile_format\tdatatype\ttask\tsub-02\tnotes\n"));
}

#[test]
fn inventory_uses_config_subjects() {
    let dir = dataset();
    let cli = inventory_cli(&[dir.path().to_str().unwrap()]);
    let Command::Inventory(args) = cli.command else {
        panic!("expected inventory command");
    };
    let mut config = Config::default();
    config.inventory.subjects = Some(vec!["01".to_string()]);

    let report = run_inventory(&args, &config).unwrap();

    assert_eq!(report.subjects(), ["01"]);
    assert_eq!(report.row_count(), 2);
}

#[test]
fn inventory_without_subjects_fails() {
    let dir = TempDir::new().unwrap();
    let cli = inventory_cli(&[dir.path().to_str().unwrap()]);
    let Command::Inventory(args) = cli.command else {
        panic!("expected inventory command");
    };

    let error = run_inventory(&args, &Config::default()).unwrap_err();

    assert!(error.to_string().contains("no subjects found"));
    assert!(!dir.path().join("inventory").exists());
}

#[test]
fn subjects_command_lists_sorted_ids() {
    let dir = dataset();
    fs::create_dir(dir.path().join("derivatives")).unwrap();
    let cli = Cli::try_parse_from(["bids-inventory", "subjects", dir.path().to_str().unwrap()])
        .unwrap();
    let Command::Subjects(args) = cli.command else {
        panic!("expected subjects command");
    };

    assert_eq!(run_subjects(&args, &Config::default()).unwrap(), ["01", "02"]);
}

#[test]
fn explicit_config_dir_must_have_base() {
    let dir = TempDir::new().unwrap();
    assert!(load_cli_config(Some(dir.path())).is_err());

    fs::write(
        dir.path().join("base.toml"),
        "[inventory]\nsubjects = [\"07\"]\n",
    )
    .unwrap();
    let config = load_cli_config(Some(dir.path())).unwrap();
    assert_eq!(config.inventory.subjects, Some(vec!["07".to_string()]));
}

fn config_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("base.toml"), "").unwrap();
    dir
}

fn exit_code(args: &[&str], config: &Path) -> i32 {
    let mut argv = vec!["bids-inventory"];
    argv.extend_from_slice(args);
    argv.extend_from_slice(&["--config-dir", config.to_str().unwrap()]);
    run(Cli::try_parse_from(argv).unwrap())
}

#[test]
fn exit_code_zero_on_success() {
    let dir = dataset();
    let config = config_dir();
    let root = dir.path().to_str().unwrap();

    assert_eq!(
        exit_code(&["inventory", root, "--summary", "none"], config.path()),
        0
    );
    assert!(dir.path().join("inventory/bids_file_inventory.tsv").is_file());
    assert_eq!(exit_code(&["subjects", root], config.path()), 0);
}

#[test]
fn exit_code_one_when_no_subjects_found() {
    let dir = TempDir::new().unwrap();
    let config = config_dir();
    let root = dir.path().to_str().unwrap();

    assert_eq!(
        exit_code(&["inventory", root, "--summary", "none"], config.path()),
        1
    );
    assert_eq!(exit_code(&["subjects", root], config.path()), 1);
}

#[test]
fn exit_code_one_on_inventory_failure() {
    let dir = TempDir::new().unwrap();
    let config = config_dir();
    let missing = dir.path().join("missing");

    assert_eq!(
        exit_code(
            &["inventory", missing.to_str().unwrap(), "--subjects", "01"],
            config.path()
        ),
        1
    );
}

#[test]
fn exit_code_one_on_config_failure() {
    let dir = dataset();
    let empty_config = TempDir::new().unwrap();

    assert_eq!(
        exit_code(
            &["subjects", dir.path().to_str().unwrap()],
            empty_config.path()
        ),
        1
    );
}
