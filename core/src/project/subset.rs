//! Subset.
use crate::types::{DataMap, DocumentId};
use serde::{Deserialize, Serialize};

/// A named deliverable under an asset, e.g. `modelDefault`.
/// Created on first publish of that subset name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Subset {
    pub id: DocumentId,
    pub name: String,

    /// Owning asset.
    pub parent: DocumentId,

    /// Single family, used by older publishes.
    pub family: Option<String>,

    /// Families, used by newer publishes.
    pub families: Vec<String>,

    /// Optional UI grouping label.
    pub subset_group: Option<String>,

    pub data: DataMap,
}

impl Subset {
    pub fn new(name: impl Into<String>, parent: DocumentId) -> Subset {
        Subset {
            id: DocumentId::new(),
            name: name.into(),
            parent,
            family: None,
            families: Vec::new(),
            subset_group: None,
            data: DataMap::new(),
        }
    }

    /// All families of the subset, falling back to the single
    /// `family` field for older publishes.
    pub fn families(&self) -> Vec<String> {
        if !self.families.is_empty() {
            return self.families.clone();
        }

        self.family.clone().into_iter().collect()
    }
}

#[cfg(test)]
#[path = "./subset_test.rs"]
mod subset_test;
