//! Fixed vocabularies used when classifying BIDS files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// BIDS datatype folder a file lives under.
///
/// Only the four folders the inventory groups by are recognized; anything
/// else is [`Datatype::Unknown`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Datatype {
    /// Anatomical imaging (`anat/`).
    Anat,
    /// Functional imaging (`func/`).
    Func,
    /// Diffusion imaging (`dwi/`).
    Dwi,
    /// Field maps (`fmap/`).
    Fmap,
    /// No recognized datatype folder in the path.
    #[default]
    Unknown,
}

impl Datatype {
    /// Known datatype folders in match priority order.
    pub const PRIORITY: [Datatype; 4] = [Self::Anat, Self::Func, Self::Dwi, Self::Fmap];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Anat => "anat",
            Self::Func => "func",
            Self::Dwi => "dwi",
            Self::Fmap => "fmap",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the datatype whose folder name equals `segment` exactly.
    pub fn from_folder(segment: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|datatype| datatype.as_str() == segment)
    }

    /// Picks the datatype for a set of path segments.
    ///
    /// Each known folder is tested against every segment in priority order,
    /// so `anat` wins over `func` regardless of where they appear in the path.
    pub fn from_segments<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let segments: Vec<&str> = segments.into_iter().collect();
        Self::PRIORITY
            .into_iter()
            .find(|datatype| segments.contains(&datatype.as_str()))
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Datatype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Self::Unknown),
            other => Self::from_folder(other).ok_or_else(|| format!("unknown datatype: {s}")),
        }
    }
}

/// File extensions the inventory collects, with their label tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownExtension {
    /// Compressed NIfTI image.
    NiftiGz,
    /// JSON sidecar.
    Json,
    /// Tab-separated table (events, physio, scans).
    Tsv,
    /// Diffusion b-values.
    Bval,
    /// Diffusion b-vectors.
    Bvec,
}

impl KnownExtension {
    pub const ALL: [KnownExtension; 5] = [
        Self::NiftiGz,
        Self::Json,
        Self::Tsv,
        Self::Bval,
        Self::Bvec,
    ];

    /// The dotted extension as it appears on disk.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NiftiGz => ".nii.gz",
            Self::Json => ".json",
            Self::Tsv => ".tsv",
            Self::Bval => ".bval",
            Self::Bvec => ".bvec",
        }
    }

    /// Short tag appended to shorthand labels.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::NiftiGz => "nii",
            Self::Json => "json",
            Self::Tsv => "tsv",
            Self::Bval => "bval",
            Self::Bvec => "bvec",
        }
    }

    /// Looks up an extension string such as `.nii.gz` (exact match).
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|known| known.as_str() == extension)
    }

    /// Returns the known extension `filename` ends with, if any.
    pub fn from_filename(filename: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|known| filename.ends_with(known.as_str()))
    }
}

impl fmt::Display for KnownExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datatype_priority_is_fixed() {
        assert_eq!(
            Datatype::from_segments(["sub-01", "func", "anat", "x.nii.gz"]),
            Datatype::Anat
        );
        assert_eq!(
            Datatype::from_segments(["sub-01", "fmap", "dwi"]),
            Datatype::Dwi
        );
        assert_eq!(Datatype::from_segments(["sub-01", "anatomy"]), Datatype::Unknown);
    }

    #[test]
    fn datatype_round_trips_through_str() {
        for datatype in Datatype::PRIORITY {
            assert_eq!(datatype.as_str().parse::<Datatype>(), Ok(datatype));
        }
        assert_eq!("unknown".parse::<Datatype>(), Ok(Datatype::Unknown));
        assert!("beh".parse::<Datatype>().is_err());
    }

    #[test]
    fn extension_lookup() {
        assert_eq!(
            KnownExtension::from_extension(".nii.gz"),
            Some(KnownExtension::NiftiGz)
        );
        assert_eq!(KnownExtension::from_extension(".nii"), None);
        assert_eq!(
            KnownExtension::from_filename("sub-01_dwi.bvec"),
            Some(KnownExtension::Bvec)
        );
        assert_eq!(KnownExtension::from_filename("sub-01_T1w.nii"), None);
    }
}
