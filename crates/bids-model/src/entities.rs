//! Entities parsed from a single BIDS file path.

use serde::{Deserialize, Serialize};

use crate::enums::{Datatype, KnownExtension};
use crate::inventory::InstanceKey;

/// Attributes extracted from one file path.
///
/// Optional entities are `None` when the filename does not carry the
/// corresponding marker. An absent entity is never represented as an empty
/// string, and absent entities are left out of serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntities {
    /// Path exactly as it was discovered.
    pub full_path: String,
    /// All dotted suffixes of the filename, e.g. `.nii.gz`.
    pub extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition: Option<String>,
    pub datatype: Datatype,
    /// Modality token before the extension (`T1w`, `bold`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl FileEntities {
    /// Entities with only the always-present fields set.
    pub fn new(full_path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
            extension: extension.into(),
            ..Self::default()
        }
    }

    /// Extension if it is one of the five collected ones.
    pub fn known_extension(&self) -> Option<KnownExtension> {
        KnownExtension::from_extension(&self.extension)
    }

    /// The (session, run) pair identifying this file among same-label files.
    pub fn instance_key(&self) -> InstanceKey {
        InstanceKey::new(self.session.clone(), self.run.clone())
    }
}
