//! Version.
use crate::types::{DocumentId, VersionNumber};
use chrono::prelude::*;
use serde::{Deserialize, Serialize};

// ***************
// *** Version ***
// ***************

/// An immutable, numbered publish of a subset.
///
/// Version numbers start at 1 and strictly increase per subset.
/// Once created, a version and its representations are a read-only
/// historical record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Version {
    pub id: DocumentId,
    pub name: VersionNumber,

    /// Owning subset.
    pub parent: DocumentId,

    pub data: VersionData,
    pub locations: Vec<String>,
}

impl Version {
    pub fn new(name: VersionNumber, parent: DocumentId) -> Version {
        Version {
            id: DocumentId::new(),
            name,
            parent,
            data: VersionData::new(),
            locations: Vec::new(),
        }
    }
}

/// Publish metadata of a version.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VersionData {
    pub time: DateTime<Utc>,
    pub author: Option<String>,

    /// Work file the version was published from.
    pub source: Option<String>,

    pub families: Vec<String>,
}

impl VersionData {
    pub fn new() -> VersionData {
        VersionData {
            time: Utc::now(),
            author: None,
            source: None,
            families: Vec::new(),
        }
    }
}

impl Default for VersionData {
    fn default() -> VersionData {
        VersionData::new()
    }
}

// **********************
// *** Master Version ***
// **********************

/// Pointer to the version a subset treats as its latest,
/// independent of name ordering.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MasterVersion {
    pub id: DocumentId,

    /// Owning subset.
    pub parent: DocumentId,

    /// Version the pointer resolves to.
    pub version_id: DocumentId,
}
