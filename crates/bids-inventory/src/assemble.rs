//! Inventory assembly: grouping files into (label, session, run) rows.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use bids_ingest::{FilesBySubject, parse_bids_filename};
use bids_model::{Inventory, InventoryRow, InstanceKey, ShorthandLabel, SubjectCell};

/// One (session, run) instance of a label, with a cell per subject.
#[derive(Debug)]
struct InstanceGroup {
    key: InstanceKey,
    cells: Vec<SubjectCell>,
}

/// All instances of one label, kept in encounter order.
#[derive(Debug, Default)]
struct LabelGroup {
    instances: Vec<InstanceGroup>,
    positions: HashMap<InstanceKey, usize>,
}

impl LabelGroup {
    /// Cells for `key`, created with every subject missing on first use.
    fn cells_mut(&mut self, key: InstanceKey, subject_count: usize) -> &mut Vec<SubjectCell> {
        let index = match self.positions.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.instances.len();
                self.positions.insert(key.clone(), index);
                self.instances.push(InstanceGroup {
                    key,
                    cells: vec![SubjectCell::Missing; subject_count],
                });
                index
            }
        };
        &mut self.instances[index].cells
    }
}

/// Builds the inventory table for `subjects` from already discovered files.
///
/// Rows are ordered by label, then by the numeric (session, run) key. Ties
/// in the numeric key keep the order in which instances were first seen,
/// walking subjects in list order and each subject's files in list order.
/// Subjects absent from `files_by_subject` still get a column, filled with
/// the missing marker.
pub fn build_inventory(subjects: &[String], files_by_subject: &FilesBySubject) -> Inventory {
    let mut index: BTreeMap<ShorthandLabel, LabelGroup> = BTreeMap::new();

    for (subject_index, subject) in subjects.iter().enumerate() {
        let Some(files) = files_by_subject.get(subject) else {
            continue;
        };
        for path in files {
            let entities = parse_bids_filename(path);
            let label = ShorthandLabel::new(&entities, &entities.extension);
            let cells = index
                .entry(label)
                .or_default()
                .cells_mut(entities.instance_key(), subjects.len());
            let cell = &mut cells[subject_index];
            if let SubjectCell::Present(previous) = cell {
                warn!(
                    subject = %subject,
                    previous = %previous,
                    replacement = %entities.full_path,
                    "multiple files map to the same inventory cell"
                );
            }
            *cell = SubjectCell::Present(entities.full_path);
        }
    }

    let mut inventory = Inventory::new(subjects.to_vec());
    for (label, group) in index {
        let mut instances = group.instances;
        instances.sort_by(|a, b| a.key.cmp_numeric(&b.key));

        for (position, instance) in instances.into_iter().enumerate() {
            let Some(first_path) = instance.cells.iter().find_map(SubjectCell::path) else {
                debug!(label = %label, "instance without any file, skipping row");
                continue;
            };
            let entities = parse_bids_filename(first_path);
            inventory.rows.push(InventoryRow {
                label: label.clone(),
                count: position + 1,
                file_format: entities.extension,
                datatype: entities.datatype,
                task: entities.task,
                cells: instance.cells,
                notes: String::new(),
            });
        }
    }

    inventory
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn files(entries: Vec<(&str, Vec<&str>)>) -> FilesBySubject {
        entries
            .into_iter()
            .map(|(subject, paths)| {
                (
                    subject.to_string(),
                    paths.into_iter().map(PathBuf::from).collect(),
                )
            })
            .collect()
    }

    fn subjects(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    #[test]
    fn missing_subject_gets_marker() {
        let found = files(vec![("01", vec!["bids/sub-01/anat/sub-01_T1w.nii.gz"])]);
        let inventory = build_inventory(&subjects(&["01", "02"]), &found);

        assert_eq!(inventory.rows.len(), 1);
        let row = &inventory.rows[0];
        assert_eq!(row.label.as_str(), "anat_T1w_nii");
        assert_eq!(
            row.cells,
            vec![
                SubjectCell::Present("bids/sub-01/anat/sub-01_T1w.nii.gz".to_string()),
                SubjectCell::Missing,
            ]
        );
    }

    #[test]
    fn instances_sorted_numerically_with_counts() {
        let found = files(vec![(
            "01",
            vec![
                "bids/sub-01/ses-10/anat/sub-01_ses-10_T1w.nii.gz",
                "bids/sub-01/ses-2/anat/sub-01_ses-2_T1w.nii.gz",
                "bids/sub-01/ses-2/anat/sub-01_ses-2_run-3_T1w.nii.gz",
                "bids/sub-01/ses-2/anat/sub-01_ses-2_run-1_T1w.nii.gz",
            ],
        )]);
        let inventory = build_inventory(&subjects(&["01"]), &found);

        let order: Vec<(usize, &str)> = inventory
            .rows
            .iter()
            .map(|row| (row.count, row.cells[0].as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, "bids/sub-01/ses-2/anat/sub-01_ses-2_T1w.nii.gz"),
                (2, "bids/sub-01/ses-2/anat/sub-01_ses-2_run-1_T1w.nii.gz"),
                (3, "bids/sub-01/ses-2/anat/sub-01_ses-2_run-3_T1w.nii.gz"),
                (4, "bids/sub-01/ses-10/anat/sub-01_ses-10_T1w.nii.gz"),
            ]
        );
    }

    #[test]
    fn metadata_comes_from_first_subject_with_file() {
        let found = files(vec![
            ("02", vec!["bids/sub-02/func/sub-02_task-rest_bold.json"]),
            ("03", vec!["bids/sub-03/func/sub-03_task-rest_bold.json"]),
        ]);
        let inventory = build_inventory(&subjects(&["01", "02", "03"]), &found);

        let row = &inventory.rows[0];
        assert_eq!(row.file_format, ".json");
        assert_eq!(row.task.as_deref(), Some("rest"));
        assert!(row.cells[0].is_missing());
        assert_eq!(row.cells[1].as_str(), "bids/sub-02/func/sub-02_task-rest_bold.json");
    }

    #[test]
    fn no_files_yields_empty_inventory() {
        let inventory = build_inventory(&subjects(&["01"]), &FilesBySubject::new());
        assert!(inventory.is_empty());
        assert_eq!(inventory.subjects, vec!["01"]);
    }
}
