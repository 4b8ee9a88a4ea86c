//! Recursive discovery of BIDS files per subject.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use bids_model::{KnownExtension, SUBJECT_PREFIX};

use crate::error::{IngestError, Result};

/// Discovered files keyed by subject identifier (without `sub-`).
///
/// Subjects whose directory does not exist have no entry.
pub type FilesBySubject = BTreeMap<String, Vec<PathBuf>>;

/// The `sub-<id>` directory for `subject` under `root`.
pub fn subject_dir(root: &Path, subject: &str) -> PathBuf {
    root.join(format!("{SUBJECT_PREFIX}{subject}"))
}

/// Whether a path names a file with one of the collected extensions.
pub fn is_bids_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| KnownExtension::from_filename(&name.to_string_lossy()).is_some())
}

/// Lists every collected file anywhere under `dir`.
///
/// Entries are visited in file-name order, so the result is stable for an
/// unchanged tree. Symlinks are listed by name even when their target is
/// missing, as in annexed datasets whose content has not been fetched.
/// Links to directories are not followed.
pub fn list_bids_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| IngestError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let listed = entry.file_type().is_file() || (entry.path_is_symlink() && !path.is_dir());
        if listed && is_bids_file(path) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Finds the BIDS files of each subject under `root`.
///
/// Subjects without a `sub-<id>` directory are skipped. Traversal errors
/// inside an existing subject directory are returned.
pub fn find_bids_files(root: &Path, subjects: &[String]) -> Result<FilesBySubject> {
    let mut files_by_subject = FilesBySubject::new();

    for subject in subjects {
        let dir = subject_dir(root, subject);
        if !dir.is_dir() {
            debug!(subject = %subject, path = %dir.display(), "subject directory missing, skipping");
            continue;
        }
        let files = list_bids_files(&dir)?;
        debug!(subject = %subject, file_count = files.len(), "discovered subject files");
        files_by_subject.insert(subject.clone(), files);
    }

    Ok(files_by_subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &[
            "sub-01/anat/sub-01_T1w.nii.gz",
            "sub-01/anat/sub-01_T1w.json",
            "sub-01/anat/sub-01_T1w.nii",
            "sub-01/dwi/sub-01_dwi.bval",
            "sub-01/dwi/sub-01_dwi.bvec",
            "sub-01/func/sub-01_task-rest_events.tsv",
            "sub-01/notes.txt",
            "sub-02/ses-01/anat/sub-02_ses-01_T2w.nii.gz",
        ] {
            touch(dir.path(), name);
        }
        dir
    }

    #[test]
    fn test_is_bids_file() {
        assert!(is_bids_file(Path::new("a/sub-01_T1w.nii.gz")));
        assert!(is_bids_file(Path::new("sub-01_dwi.bvec")));
        assert!(!is_bids_file(Path::new("sub-01_T1w.nii")));
        assert!(!is_bids_file(Path::new("README")));
    }

    #[test]
    fn test_list_bids_files_filters_and_sorts() {
        let dir = create_test_dir();
        let files = list_bids_files(&dir.path().join("sub-01")).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "sub-01_T1w.json",
                "sub-01_T1w.nii.gz",
                "sub-01_dwi.bval",
                "sub-01_dwi.bvec",
                "sub-01_task-rest_events.tsv",
            ]
        );
    }

    #[test]
    fn test_find_bids_files_skips_missing_subjects() {
        let dir = create_test_dir();
        let subjects = vec!["01".to_string(), "02".to_string(), "03".to_string()];
        let found = find_bids_files(dir.path(), &subjects).unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found["01"].len(), 5);
        assert_eq!(found["02"].len(), 1);
        assert!(!found.contains_key("03"));
    }

    #[test]
    fn test_list_bids_files_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = list_bids_files(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }
}
