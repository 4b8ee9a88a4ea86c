//! Subject auto-discovery.

use std::path::Path;

use bids_model::SUBJECT_PREFIX;

use crate::error::{IngestError, Result};

/// Lists the subjects of a dataset: every immediate child directory named
/// `sub-<id>`, returned as sorted `<id>` values.
///
/// Files and non-matching directories are ignored. A directory named exactly
/// `sub-` has no identifier and is ignored as well.
pub fn auto_discover_subjects(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(root).map_err(|e| IngestError::DirectoryRead {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut subjects = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: root.to_path_buf(),
            source: e,
        })?;

        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if let Some(id) = name
            .strip_prefix(SUBJECT_PREFIX)
            .filter(|id| !id.is_empty())
        {
            subjects.push(id.to_string());
        }
    }

    subjects.sort();
    Ok(subjects)
}
