pub mod discovery;
pub mod entities;
pub mod error;
pub mod subjects;

pub use discovery::{FilesBySubject, find_bids_files, is_bids_file, list_bids_files, subject_dir};
pub use entities::{file_extension, parse_bids_filename};
pub use error::{IngestError, Result};
pub use subjects::auto_discover_subjects;
