//! Defines the document store trait for database implementations to use.
use super::error::Error as DbError;
use super::filter::{SearchFilter, Sort};
use crate::project::Document;
use crate::types::{DataMap, DocumentId};
use serde::{Deserialize, Serialize};
use std::result::Result as StdResult;

type Result<T = ()> = StdResult<T, DbError>;

// ***********************
// *** Document Update ***
// ***********************

/// Mutation applied by [`DocumentStore::update_many`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum DocumentUpdate {
    /// Set the `subset_group` label of matched subsets.
    SubsetGroup(Option<String>),

    /// Merge keys into the free-form `data` of matched documents.
    /// Documents without free-form data are left untouched.
    Data(DataMap),
}

// **********************
// *** Distinct Field ***
// **********************

/// Field selector for [`DocumentStore::distinct`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctField {
    Name,
    Silo,
    Family,
}

// **********************
// *** Document Store ***
// **********************

/// An opaque store of pipeline documents.
///
/// Backends are collection-style databases; the reference implementation
/// is the in-memory [`MemoryStore`](super::MemoryStore).
pub trait DocumentStore {
    /// Finds all documents matching the filter.
    fn find(&self, filter: &SearchFilter) -> Vec<Document>;

    /// Finds a single document matching the filter.
    /// With a sort order, the first document in that order is returned.
    fn find_one(&self, filter: &SearchFilter, sort: Option<Sort>) -> Option<Document>;

    /// Inserts a single document.
    ///
    /// # Errors
    /// + If a document with the same id already exists.
    fn insert_one(&mut self, document: Document) -> Result<DocumentId>;

    /// Applies an update to every document matching the filter.
    ///
    /// # Returns
    /// Number of documents modified.
    fn update_many(&mut self, filter: &SearchFilter, update: &DocumentUpdate) -> Result<usize>;

    /// Distinct values of a field over documents matching the filter.
    fn distinct(&self, field: DistinctField, filter: &SearchFilter) -> Vec<String>;

    /// Finds a document by id.
    fn get(&self, id: &DocumentId) -> Option<Document> {
        self.find_one(&SearchFilter::by_id(id.clone()), None)
    }
}
