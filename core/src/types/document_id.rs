//! Document ids.
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Deref;
use std::result::Result as StdResult;
use std::str::FromStr;
use uuid::Uuid;

/// Holds a unique id for a document.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> DocumentId {
        DocumentId(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> StdResult<(), fmt::Error> {
        Display::fmt(&self.0, f)
    }
}

impl Deref for DocumentId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        Ok(Uuid::parse_str(s)?.into())
    }
}

impl From<Uuid> for DocumentId {
    fn from(id: Uuid) -> DocumentId {
        DocumentId(id)
    }
}

impl From<DocumentId> for Uuid {
    fn from(id: DocumentId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
#[path = "./document_id_test.rs"]
mod document_id_test;
