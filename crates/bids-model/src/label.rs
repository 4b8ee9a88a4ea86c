//! Shorthand labels: the grouping key for a "file type".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::FileEntities;
use crate::enums::KnownExtension;

/// Grouping key built from datatype, suffix, task, direction, acquisition
/// and extension tag. Session and run are deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShorthandLabel(String);

impl ShorthandLabel {
    /// Builds the label for `entities` using `extension` for the trailing tag.
    ///
    /// An unrecognized extension contributes no tag.
    pub fn new(entities: &FileEntities, extension: &str) -> Self {
        let mut parts: Vec<String> = vec![entities.datatype.as_str().to_string()];

        if let Some(suffix) = present(entities.suffix.as_deref()) {
            parts.push(suffix.to_string());
        }
        if let Some(task) = present(entities.task.as_deref()) {
            parts.push(format!("task-{task}"));
        }
        if let Some(direction) = present(entities.direction.as_deref()) {
            parts.push(format!("dir-{direction}"));
        }
        if let Some(acquisition) = present(entities.acquisition.as_deref()) {
            parts.push(format!("acq-{acquisition}"));
        }
        if let Some(known) = KnownExtension::from_extension(extension) {
            parts.push(known.tag().to_string());
        }

        Self(parts.join("_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShorthandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShorthandLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Convenience wrapper around [`ShorthandLabel::new`].
pub fn create_shorthand_label(entities: &FileEntities, extension: &str) -> ShorthandLabel {
    ShorthandLabel::new(entities, extension)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
