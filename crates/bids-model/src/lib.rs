//! Data model for BIDS file inventories.
//!
//! Everything in this crate is pure: parsed filename entities, the derived
//! shorthand label, and the rows of the inventory table.

pub mod entities;
pub mod enums;
pub mod inventory;
pub mod label;
pub mod summary;

pub use entities::FileEntities;
pub use enums::{Datatype, KnownExtension};
pub use inventory::{
    InstanceKey, Inventory, InventoryRow, MISSING_MARKER, NO_TASK_MARKER, SUBJECT_PREFIX,
    SubjectCell,
};
pub use label::{ShorthandLabel, create_shorthand_label};
pub use summary::{DatatypeCount, InventorySummary, SubjectCoverage};
