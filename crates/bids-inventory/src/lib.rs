//! Builds the per-subject BIDS file inventory table.
//!
//! [`build_inventory`] is the pure core: it groups discovered files by
//! shorthand label and (session, run) instance. [`create_inventory`] wraps it
//! with validation, discovery and TSV output.

pub mod assemble;
pub mod create;
pub mod error;
pub mod writer;

pub use assemble::build_inventory;
pub use create::{InventoryReport, create_inventory};
pub use error::{InventoryError, Result};
pub use writer::{render_inventory, write_inventory, write_inventory_tsv};
