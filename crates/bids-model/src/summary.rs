//! Aggregate counts over an inventory.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::enums::Datatype;
use crate::inventory::Inventory;

/// Number of rows for one datatype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatatypeCount {
    pub datatype: Datatype,
    pub rows: usize,
}

/// How many rows a subject has a file for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectCoverage {
    pub subject: String,
    pub present: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InventorySummary {
    pub total_rows: usize,
    /// Sorted by datatype.
    pub by_datatype: Vec<DatatypeCount>,
    /// In subject-list order.
    pub subjects: Vec<SubjectCoverage>,
}

impl InventorySummary {
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let mut by_datatype: BTreeMap<Datatype, usize> = BTreeMap::new();
        let mut subjects: Vec<SubjectCoverage> = inventory
            .subjects
            .iter()
            .map(|subject| SubjectCoverage {
                subject: subject.clone(),
                present: 0,
                missing: 0,
            })
            .collect();

        for row in &inventory.rows {
            *by_datatype.entry(row.datatype).or_default() += 1;
            for (coverage, cell) in subjects.iter_mut().zip(&row.cells) {
                if cell.is_missing() {
                    coverage.missing += 1;
                } else {
                    coverage.present += 1;
                }
            }
        }

        Self {
            total_rows: inventory.rows.len(),
            by_datatype: by_datatype
                .into_iter()
                .map(|(datatype, rows)| DatatypeCount { datatype, rows })
                .collect(),
            subjects,
        }
    }

    /// Total number of missing cells across all subjects.
    pub fn missing_cells(&self) -> usize {
        self.subjects.iter().map(|s| s.missing).sum()
    }
}
