//! BIDS filename entity parsing.
//!
//! Each entity is located independently by its literal marker (`sub-`,
//! `ses-`, ...) at the start of the filename or right after an underscore.
//! There is no combined grammar: a filename may carry any subset of entities
//! in any order.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

use bids_model::{Datatype, FileEntities};

/// Alphanumeric words joined by single hyphens (`rest`, `rest-eyes-open`).
const HYPHENATED: &str = "[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*";

static SUBJECT: LazyLock<Regex> = LazyLock::new(|| entity_regex("sub", "[A-Za-z0-9]+", ""));
static SESSION: LazyLock<Regex> = LazyLock::new(|| entity_regex("ses", "[A-Za-z0-9]+", ""));
static TASK: LazyLock<Regex> = LazyLock::new(|| entity_regex("task", HYPHENATED, ""));
static RUN: LazyLock<Regex> = LazyLock::new(|| entity_regex("run", HYPHENATED, ""));
// Direction and acquisition must be terminated by the next entity or the extension.
static DIRECTION: LazyLock<Regex> = LazyLock::new(|| entity_regex("dir", "[A-Za-z0-9]+", "[_.]"));
static ACQUISITION: LazyLock<Regex> =
    LazyLock::new(|| entity_regex("acq", "[A-Za-z0-9]+", "[_.]"));
static SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_([A-Za-z0-9]+)\.(?:nii\.gz|json|tsv|bval|bvec)$").expect("Invalid suffix regex")
});

fn entity_regex(marker: &str, value: &str, terminator: &str) -> Regex {
    Regex::new(&format!("(?:^|_){marker}-({value}){terminator}")).expect("Invalid entity regex")
}

/// Parses the BIDS entities of `path`.
///
/// Entities are read from the filename; the datatype comes from the
/// directory components. The function never touches the filesystem.
///
/// ```
/// use bids_ingest::parse_bids_filename;
///
/// let entities = parse_bids_filename("sub-01/ses-02/anat/sub-01_ses-02_T1w.nii.gz");
/// assert_eq!(entities.subject.as_deref(), Some("01"));
/// assert_eq!(entities.session.as_deref(), Some("02"));
/// assert_eq!(entities.suffix.as_deref(), Some("T1w"));
/// assert_eq!(entities.extension, ".nii.gz");
/// ```
pub fn parse_bids_filename(path: impl AsRef<Path>) -> FileEntities {
    let path = path.as_ref();
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let segments: Vec<String> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    FileEntities {
        full_path: path.to_string_lossy().into_owned(),
        extension: file_extension(&filename),
        subject: capture(&SUBJECT, &filename),
        session: capture(&SESSION, &filename),
        task: capture(&TASK, &filename),
        run: capture(&RUN, &filename),
        direction: capture(&DIRECTION, &filename),
        acquisition: capture(&ACQUISITION, &filename),
        datatype: Datatype::from_segments(segments.iter().map(String::as_str)),
        suffix: capture(&SUFFIX, &filename),
    }
}

/// All dotted suffixes of a filename joined together.
///
/// Leading dots are ignored and a name ending in a dot has no extension,
/// so `sub-01_T1w.nii.gz` gives `.nii.gz` and `.bidsignore` gives `""`.
pub fn file_extension(filename: &str) -> String {
    if filename.ends_with('.') {
        return String::new();
    }
    let trimmed = filename.trim_start_matches('.');
    trimmed
        .find('.')
        .map(|idx| trimmed[idx..].to_string())
        .unwrap_or_default()
}

fn capture(pattern: &Regex, filename: &str) -> Option<String> {
    pattern
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().to_string())
}
