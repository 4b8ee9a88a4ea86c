//! End-to-end inventory creation: validate, discover, assemble, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use bids_ingest::find_bids_files;
use bids_model::{Inventory, InventorySummary};

use crate::assemble::build_inventory;
use crate::error::{InventoryError, Result};
use crate::writer::write_inventory_tsv;

/// Outcome of a successful [`create_inventory`] run.
#[derive(Debug, Clone)]
pub struct InventoryReport {
    pub output_path: PathBuf,
    pub inventory: Inventory,
    pub summary: InventorySummary,
}

impl InventoryReport {
    pub fn row_count(&self) -> usize {
        self.inventory.len()
    }

    pub fn subjects(&self) -> &[String] {
        &self.inventory.subjects
    }
}

/// Creates the inventory TSV for `subjects` under `bids_root` at `output_path`.
///
/// Fails with [`InventoryError::RootNotFound`] when the root does not exist
/// and [`InventoryError::EmptySubjects`] when no subjects are given, before
/// anything is scanned or written. The output directory is created if
/// needed. An inventory without rows is still written (header only) and
/// reported with a warning.
pub fn create_inventory(
    bids_root: &Path,
    subjects: &[String],
    output_path: &Path,
) -> Result<InventoryReport> {
    let span = info_span!("inventory", bids_root = %bids_root.display());
    let _guard = span.enter();

    if !bids_root.exists() {
        return Err(InventoryError::RootNotFound {
            path: bids_root.to_path_buf(),
        });
    }
    if subjects.is_empty() {
        return Err(InventoryError::EmptySubjects);
    }

    ensure_parent_dir(output_path)?;

    let discover_start = Instant::now();
    let files_by_subject = find_bids_files(bids_root, subjects)?;
    let file_count: usize = files_by_subject.values().map(Vec::len).sum();
    info!(
        subject_count = subjects.len(),
        file_count,
        duration_ms = discover_start.elapsed().as_millis(),
        "discovery complete"
    );

    let inventory = build_inventory(subjects, &files_by_subject);
    if inventory.is_empty() {
        warn!(
            subjects = %subjects.join(", "),
            bids_root = %bids_root.display(),
            "no BIDS files found; writing header-only inventory"
        );
    }

    write_inventory_tsv(&inventory, output_path)?;
    info!(
        output = %output_path.display(),
        row_count = inventory.len(),
        "inventory written"
    );

    let summary = InventorySummary::from_inventory(&inventory);
    Ok(InventoryReport {
        output_path: output_path.to_path_buf(),
        inventory,
        summary,
    })
}

fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    debug!(path = %parent.display(), "ensuring output directory");
    std::fs::create_dir_all(parent).map_err(|e| {
        InventoryError::io(parent, e, |path, source| InventoryError::CreateOutputDir {
            path,
            source,
        })
    })
}
