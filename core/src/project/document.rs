//! Document envelope over the project hierarchy types.
use super::{Asset, MasterVersion, Project, Representation, Subset, Version};
use crate::types::{DocumentId, VersionNumber};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

// *********************
// *** Document Kind ***
// *********************

/// Discriminates the stored document types.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Project,
    Asset,
    Subset,
    Version,
    MasterVersion,
    Representation,
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            DocumentKind::Project => "project",
            DocumentKind::Asset => "asset",
            DocumentKind::Subset => "subset",
            DocumentKind::Version => "version",
            DocumentKind::MasterVersion => "master_version",
            DocumentKind::Representation => "representation",
        };

        f.write_str(kind)
    }
}

// ****************
// *** Document ***
// ****************

/// A stored document of any kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Document {
    Project(Project),
    Asset(Asset),
    Subset(Subset),
    Version(Version),
    MasterVersion(MasterVersion),
    Representation(Representation),
}

impl Document {
    pub fn id(&self) -> &DocumentId {
        match self {
            Document::Project(doc) => &doc.id,
            Document::Asset(doc) => &doc.id,
            Document::Subset(doc) => &doc.id,
            Document::Version(doc) => &doc.id,
            Document::MasterVersion(doc) => &doc.id,
            Document::Representation(doc) => &doc.id,
        }
    }

    /// Parent document id. `None` for projects, which are roots.
    pub fn parent(&self) -> Option<&DocumentId> {
        match self {
            Document::Project(_) => None,
            Document::Asset(doc) => Some(&doc.parent),
            Document::Subset(doc) => Some(&doc.parent),
            Document::Version(doc) => Some(&doc.parent),
            Document::MasterVersion(doc) => Some(&doc.parent),
            Document::Representation(doc) => Some(&doc.parent),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Project(_) => DocumentKind::Project,
            Document::Asset(_) => DocumentKind::Asset,
            Document::Subset(_) => DocumentKind::Subset,
            Document::Version(_) => DocumentKind::Version,
            Document::MasterVersion(_) => DocumentKind::MasterVersion,
            Document::Representation(_) => DocumentKind::Representation,
        }
    }

    /// Display name of the document.
    /// Versions render their number, master versions have no name.
    pub fn name(&self) -> Option<String> {
        match self {
            Document::Project(doc) => Some(doc.name.clone()),
            Document::Asset(doc) => Some(doc.name.clone()),
            Document::Subset(doc) => Some(doc.name.clone()),
            Document::Version(doc) => Some(doc.name.to_string()),
            Document::MasterVersion(_) => None,
            Document::Representation(doc) => Some(doc.name.clone()),
        }
    }

    /// Numeric name, for version documents only.
    pub fn version_number(&self) -> Option<VersionNumber> {
        match self {
            Document::Version(doc) => Some(doc.name),
            _ => None,
        }
    }
}

impl From<Project> for Document {
    fn from(doc: Project) -> Document {
        Document::Project(doc)
    }
}

impl From<Asset> for Document {
    fn from(doc: Asset) -> Document {
        Document::Asset(doc)
    }
}

impl From<Subset> for Document {
    fn from(doc: Subset) -> Document {
        Document::Subset(doc)
    }
}

impl From<Version> for Document {
    fn from(doc: Version) -> Document {
        Document::Version(doc)
    }
}

impl From<MasterVersion> for Document {
    fn from(doc: MasterVersion) -> Document {
        Document::MasterVersion(doc)
    }
}

impl From<Representation> for Document {
    fn from(doc: Representation) -> Document {
        Document::Representation(doc)
    }
}

#[cfg(test)]
#[path = "./document_test.rs"]
mod document_test;
