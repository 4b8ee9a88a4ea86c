//! Rows of the inventory table.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

use crate::enums::Datatype;
use crate::label::ShorthandLabel;

/// Marker written for a subject that has no file for a row.
pub const MISSING_MARKER: &str = "DNE";

/// Value of the `task` column when the file carries no task entity.
pub const NO_TASK_MARKER: &str = "n/a";

/// Directory and column prefix for subject identifiers.
pub const SUBJECT_PREFIX: &str = "sub-";

/// Identifies one instance of a file type: its (session, run) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct InstanceKey {
    pub session: Option<String>,
    pub run: Option<String>,
}

impl InstanceKey {
    pub fn new(session: Option<String>, run: Option<String>) -> Self {
        Self { session, run }
    }

    /// Numeric ordering key: (session, run).
    ///
    /// Absent values sort as 0. Values that are not plain decimal numbers
    /// (named sessions such as `baseline`, or numbers too large for `u64`)
    /// also sort as 0 and are therefore indistinguishable from `ses-0`.
    pub fn sort_key(&self) -> (u64, u64) {
        (
            numeric_or_zero(self.session.as_deref()),
            numeric_or_zero(self.run.as_deref()),
        )
    }

    /// Compares by [`sort_key`](Self::sort_key) only.
    pub fn cmp_numeric(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

fn numeric_or_zero(value: Option<&str>) -> u64 {
    value.and_then(|v| v.parse::<u64>().ok()).unwrap_or(0)
}

/// One subject's cell in a row: a file path or the missing marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubjectCell {
    Present(String),
    #[default]
    Missing,
}

impl SubjectCell {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Present(path) => path,
            Self::Missing => MISSING_MARKER,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Present(path) => Some(path),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for SubjectCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SubjectCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of the inventory: a single (label, session, run) instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub label: ShorthandLabel,
    /// 1-based rank of the instance within its label.
    pub count: usize,
    pub file_format: String,
    pub datatype: Datatype,
    pub task: Option<String>,
    /// One cell per subject, in subject-list order.
    pub cells: Vec<SubjectCell>,
    pub notes: String,
}

impl InventoryRow {
    /// Task column value.
    pub fn task_display(&self) -> &str {
        self.task.as_deref().unwrap_or(NO_TASK_MARKER)
    }

    /// Renders the row as table fields in header order.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(6 + self.cells.len());
        record.push(self.label.to_string());
        record.push(self.count.to_string());
        record.push(self.file_format.clone());
        record.push(self.datatype.to_string());
        record.push(self.task_display().to_string());
        record.extend(self.cells.iter().map(|cell| cell.as_str().to_string()));
        record.push(self.notes.clone());
        record
    }
}

/// The complete inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Inventory {
    /// Subject identifiers without the `sub-` prefix, in column order.
    pub subjects: Vec<String>,
    pub rows: Vec<InventoryRow>,
}

impl Inventory {
    pub fn new(subjects: Vec<String>) -> Self {
        Self {
            subjects,
            rows: Vec::new(),
        }
    }

    /// Column names in output order.
    pub fn header(&self) -> Vec<String> {
        let mut header: Vec<String> = ["shorthand_label", "count", "file_format", "datatype", "task"]
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        header.extend(
            self.subjects
                .iter()
                .map(|subject| format!("{SUBJECT_PREFIX}{subject}")),
        );
        header.push("notes".to_string());
        header
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
