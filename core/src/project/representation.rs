//! Representation.
use crate::types::{DataMap, DocumentId};
use serde::{Deserialize, Serialize};

/// One exported file format of a version.
///
/// `name` is the file extension without the leading dot, e.g. `ma`, `abc`.
/// Immutable once created.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Representation {
    pub id: DocumentId,
    pub name: String,

    /// Owning version.
    pub parent: DocumentId,

    pub label: Option<String>,
    pub data: DataMap,
}

impl Representation {
    pub fn new(name: impl Into<String>, parent: DocumentId) -> Representation {
        Representation {
            id: DocumentId::new(),
            name: name.into(),
            parent,
            label: None,
            data: DataMap::new(),
        }
    }
}
