//! Publishing versions into the store.
//!
//! Integration is the write side of the pipeline: a subset is ensured on
//! first publish, a version number is allocated, and the version with its
//! representations is inserted as an immutable record.
use crate::error::{Lookup as LookupError, Result};
use slate_core::db::{DocumentStore, SearchFilter};
use slate_core::project::{Document, DocumentKind, Representation, Subset, Version};
use slate_core::types::{DocumentId, VersionNumber};

/// What to publish; see [`publish`].
#[derive(Debug, Clone)]
pub struct Publish {
    /// Asset the subset belongs to.
    pub asset: DocumentId,

    /// Subset name, e.g. `modelDefault`. Created on first publish.
    pub subset: String,

    pub families: Vec<String>,
    pub author: Option<String>,

    /// Work file the version is published from.
    pub source: Option<String>,

    /// Representation names, e.g. `ma`, `abc`.
    pub representations: Vec<String>,
}

/// Result of a publish.
#[derive(Debug, Clone)]
pub struct Published {
    pub subset: Subset,
    pub version: Version,
    pub representations: Vec<Representation>,
}

/// Next version number of a subset.
///
/// Computed as `max(existing) + 1` in a read-then-write with no lock;
/// two publishers hitting the same subset at once can allocate the same
/// number. The pipeline is single-threaded per scene, so this matches
/// the historical behavior.
pub fn next_version_number(store: &dyn DocumentStore, subset: &DocumentId) -> VersionNumber {
    match crate::resolve::latest_version(store, subset) {
        Some(version) => version.name.next(),
        None => VersionNumber::FIRST,
    }
}

/// Publishes a new version of a subset.
///
/// # Errors
/// + If the asset does not exist.
pub fn publish(store: &mut dyn DocumentStore, publish: Publish) -> Result<Published> {
    let Some(Document::Asset(asset)) = store.get(&publish.asset) else {
        return Err(LookupError::DoesNotExist(publish.asset.clone()).into());
    };

    let subset = ensure_subset(store, &asset.id, &publish.subset, &publish.families)?;

    let number = next_version_number(store, &subset.id);
    let mut version = Version::new(number, subset.id.clone());
    version.data.author = publish.author.clone();
    version.data.source = publish.source.clone();
    version.data.families = publish.families.clone();
    store.insert_one(version.clone().into())?;

    let mut representations = Vec::with_capacity(publish.representations.len());
    for name in &publish.representations {
        let representation = Representation::new(name.clone(), version.id.clone());
        store.insert_one(representation.clone().into())?;
        representations.push(representation);
    }

    tracing::info!(
        "published {subset} v{number} of {asset}",
        subset = subset.name,
        asset = asset.name,
    );

    Ok(Published {
        subset,
        version,
        representations,
    })
}

/// Finds the named subset under the asset, creating it on first publish.
fn ensure_subset(
    store: &mut dyn DocumentStore,
    asset: &DocumentId,
    name: &str,
    families: &[String],
) -> Result<Subset> {
    let mut filter = SearchFilter::children_of(DocumentKind::Subset, asset.clone());
    filter.name = Some(name.to_string());

    if let Some(Document::Subset(subset)) = store.find_one(&filter, None) {
        return Ok(subset);
    }

    let mut subset = Subset::new(name, asset.clone());
    subset.families = families.to_vec();
    store.insert_one(subset.clone().into())?;
    Ok(subset)
}

#[cfg(test)]
#[path = "./publish_test.rs"]
mod publish_test;
