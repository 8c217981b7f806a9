//! Asset.
use crate::types::{DataMap, DocumentId};
use serde::{Deserialize, Serialize};

/// A shot or reusable item tracked in the project hierarchy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Asset {
    pub id: DocumentId,
    pub name: String,

    /// Owning project.
    pub parent: DocumentId,

    /// Legacy top-level grouping, superseded by `visual_parent`.
    pub silo: Option<String>,

    /// Hierarchical parent asset, if any.
    pub visual_parent: Option<DocumentId>,

    pub tasks: Vec<String>,
    pub data: DataMap,
}

impl Asset {
    pub fn new(name: impl Into<String>, parent: DocumentId) -> Asset {
        Asset {
            id: DocumentId::new(),
            name: name.into(),
            parent,
            silo: None,
            visual_parent: None,
            tasks: Vec::new(),
            data: DataMap::new(),
        }
    }

    /// Names of the asset's visual ancestors, outermost first.
    /// Stored denormalized under `data.parents` at publish time.
    pub fn parents(&self) -> Vec<String> {
        let Some(parents) = self.data.get("parents") else {
            return Vec::new();
        };

        let Some(parents) = parents.as_array() else {
            return Vec::new();
        };

        parents
            .iter()
            .filter_map(|name| name.as_str().map(String::from))
            .collect()
    }
}

#[cfg(test)]
#[path = "./asset_test.rs"]
mod asset_test;
