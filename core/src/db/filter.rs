//! Search filter functionality.
use crate::project::{Document, DocumentKind};
use crate::types::{DocumentId, VersionNumber};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// *********************
// *** Search Filter ***
// *********************

/// Filter over stored documents.
/// All set criteria must match.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct SearchFilter {
    pub id: Option<DocumentId>,
    pub kind: Option<DocumentKind>,
    pub name: Option<String>,

    /// Numeric name, matches version documents only.
    pub version: Option<VersionNumber>,

    pub parent: Option<DocumentId>,
}

impl SearchFilter {
    pub fn new() -> SearchFilter {
        SearchFilter::default()
    }

    /// Filter matching a single document by id.
    pub fn by_id(id: DocumentId) -> SearchFilter {
        let mut filter = SearchFilter::new();
        filter.id = Some(id);
        filter
    }

    /// Filter matching all children of `parent` with the given kind.
    pub fn children_of(kind: DocumentKind, parent: DocumentId) -> SearchFilter {
        let mut filter = SearchFilter::new();
        filter.kind = Some(kind);
        filter.parent = Some(parent);
        filter
    }

    /// Returns `true` if the document matches the filter,
    /// otherwise `false`.
    pub fn matches(&self, document: &Document) -> bool {
        if let Some(s_id) = self.id.as_ref() {
            if s_id != document.id() {
                return false;
            }
        }

        if let Some(s_kind) = self.kind.as_ref() {
            if *s_kind != document.kind() {
                return false;
            }
        }

        if let Some(s_name) = self.name.as_ref() {
            if Some(s_name) != document.name().as_ref() {
                return false;
            }
        }

        if let Some(s_version) = self.version.as_ref() {
            if Some(s_version) != document.version_number().as_ref() {
                return false;
            }
        }

        if let Some(s_parent) = self.parent.as_ref() {
            if Some(s_parent) != document.parent() {
                return false;
            }
        }

        // all search criteria matched
        true
    }
}

// ************
// *** Sort ***
// ************

/// Sort order on document names.
/// Versions compare by their numeric name.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    NameAscending,
    NameDescending,
}

impl Sort {
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let ord = match (a.version_number(), b.version_number()) {
            (Some(a_num), Some(b_num)) => a_num.cmp(&b_num),
            _ => a.name().cmp(&b.name()),
        };

        match self {
            Sort::NameAscending => ord,
            Sort::NameDescending => ord.reverse(),
        }
    }
}

#[cfg(test)]
#[path = "./filter_test.rs"]
mod filter_test;
