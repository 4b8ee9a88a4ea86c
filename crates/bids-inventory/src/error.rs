use std::path::PathBuf;

use bids_ingest::IngestError;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("BIDS root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("subject list is empty; provide at least one subject ID")]
    EmptySubjects,

    #[error("unable to write to {path}: {source}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write inventory {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode inventory: {message}")]
    Encode { message: String },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl InventoryError {
    /// Whether the error comes from bad caller input rather than I/O.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::RootNotFound { .. } | Self::EmptySubjects)
    }

    /// Maps an I/O failure on `path`, singling out permission problems.
    pub(crate) fn io(
        path: impl Into<PathBuf>,
        source: std::io::Error,
        other: fn(PathBuf, std::io::Error) -> Self,
    ) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path, source }
        } else {
            other(path, source)
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
