//! Tab-separated output of an inventory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use bids_model::Inventory;

use crate::error::{InventoryError, Result};

/// Writes the header and every row of `inventory` as TSV to `writer`.
pub fn write_inventory<W: Write>(inventory: &Inventory, writer: W) -> csv::Result<()> {
    let mut tsv = WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(writer);
    tsv.write_record(inventory.header())?;
    for row in &inventory.rows {
        tsv.write_record(row.to_record())?;
    }
    tsv.flush()?;
    Ok(())
}

/// Renders `inventory` as a TSV string.
pub fn render_inventory(inventory: &Inventory) -> Result<String> {
    let mut buffer = Vec::new();
    write_inventory(inventory, &mut buffer).map_err(|e| InventoryError::Encode {
        message: e.to_string(),
    })?;
    String::from_utf8(buffer).map_err(|e| InventoryError::Encode {
        message: e.to_string(),
    })
}

/// Writes `inventory` to the file at `path`, replacing it.
///
/// The parent directory must already exist.
pub fn write_inventory_tsv(inventory: &Inventory, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        InventoryError::io(path, e, |path, source| InventoryError::Write { path, source })
    })?;
    write_inventory(inventory, BufWriter::new(file)).map_err(|e| csv_error(path, e))
}

fn csv_error(path: &Path, error: csv::Error) -> InventoryError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => {
            InventoryError::io(path, source, |path, source| InventoryError::Write { path, source })
        }
        _ => InventoryError::Encode { message },
    }
}
