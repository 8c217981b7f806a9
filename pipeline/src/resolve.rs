//! Parent-chain resolution and addressing.
//!
//! Two directions over the same hierarchy: [`parenthood`] walks bottom-up
//! from any document to the project, and [`locate`] walks top-down from a
//! human-readable address to a representation id.
use crate::error::{Lookup as LookupError, Result};
use slate_core::db::{DocumentStore, SearchFilter, Sort};
use slate_core::project::{
    Asset, Document, DocumentKind, Project, Representation, Subset, Version,
};
use slate_core::types::{DocumentId, VersionNumber};

// ******************************
// *** Representation Context ***
// ******************************

/// Full ancestry of a representation, as loaders consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct RepresentationContext {
    pub project: Project,
    pub asset: Asset,
    pub subset: Subset,
    pub version: Version,
    pub representation: Representation,
}

// ******************
// *** Parenthood ***
// ******************

/// Ancestors of a document, nearest first.
///
/// Walks `parent` links one level at a time. A broken link truncates the
/// result; callers that need the full chain should use
/// [`representation_context`], which surfaces truncation as an error.
/// A `master_version` link is substituted with the version it points at.
pub fn parenthood(store: &dyn DocumentStore, document: &Document) -> Vec<Document> {
    let mut parents = Vec::new();
    let mut current = document.clone();

    while let Some(parent_id) = current.parent() {
        let Some(mut parent) = store.get(parent_id) else {
            break;
        };

        if let Document::MasterVersion(master) = &parent {
            let Some(version @ Document::Version(_)) = store.get(&master.version_id) else {
                break;
            };
            parent = version;
        }

        parents.push(parent.clone());
        current = parent;
    }

    parents
}

/// Resolves a representation id into its full context.
///
/// # Errors
/// + If the representation does not exist.
/// + If any ancestor link up to the project is broken.
pub fn representation_context(
    store: &dyn DocumentStore,
    representation: &DocumentId,
) -> Result<RepresentationContext> {
    let Some(Document::Representation(representation)) = store.get(representation) else {
        return Err(LookupError::DoesNotExist(representation.clone()).into());
    };

    let document = Document::Representation(representation.clone());
    let mut parents = parenthood(store, &document).into_iter();

    let chain = (parents.next(), parents.next(), parents.next(), parents.next());
    let (
        Some(Document::Version(version)),
        Some(Document::Subset(subset)),
        Some(Document::Asset(asset)),
        Some(Document::Project(project)),
    ) = chain
    else {
        return Err(LookupError::BrokenParentChain(representation.id.clone()).into());
    };

    Ok(RepresentationContext {
        project,
        asset,
        subset,
        version,
        representation,
    })
}

// **************
// *** Locate ***
// **************

/// Human-readable address of a representation.
/// A `version` of `None` selects the latest.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentAddress {
    pub project: String,
    pub asset: String,
    pub subset: String,
    pub version: Option<VersionNumber>,
    pub representation: String,
}

/// Resolves an address top-down into a representation id.
/// Returns `None` the moment any level is not found.
pub fn locate(store: &dyn DocumentStore, address: &ContentAddress) -> Option<DocumentId> {
    let mut filter = SearchFilter::new();
    filter.kind = Some(DocumentKind::Project);
    filter.name = Some(address.project.clone());
    let project = store.find_one(&filter, None)?;

    let mut filter = SearchFilter::children_of(DocumentKind::Asset, project.id().clone());
    filter.name = Some(address.asset.clone());
    let asset = store.find_one(&filter, None)?;

    let mut filter = SearchFilter::children_of(DocumentKind::Subset, asset.id().clone());
    filter.name = Some(address.subset.clone());
    let subset = store.find_one(&filter, None)?;

    let mut filter = SearchFilter::children_of(DocumentKind::Version, subset.id().clone());
    let version = match address.version {
        Some(number) => {
            filter.version = Some(number);
            store.find_one(&filter, None)?
        }
        None => store.find_one(&filter, Some(Sort::NameDescending))?,
    };

    let mut filter = SearchFilter::children_of(DocumentKind::Representation, version.id().clone());
    filter.name = Some(address.representation.clone());
    let representation = store.find_one(&filter, None)?;

    Some(representation.id().clone())
}

/// Most recent version of a subset, by descending numeric name.
pub fn latest_version(store: &dyn DocumentStore, subset: &DocumentId) -> Option<Version> {
    let filter = SearchFilter::children_of(DocumentKind::Version, subset.clone());
    match store.find_one(&filter, Some(Sort::NameDescending)) {
        Some(Document::Version(version)) => Some(version),
        _ => None,
    }
}

#[cfg(test)]
#[path = "./resolve_test.rs"]
mod resolve_test;
