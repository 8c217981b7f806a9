//! In-memory document store.
use super::error::Error as DbError;
use super::filter::{SearchFilter, Sort};
use super::store::{DistinctField, DocumentStore, DocumentUpdate};
use crate::project::Document;
use crate::types::DocumentId;
use indexmap::IndexMap;
use std::result::Result as StdResult;

type Result<T = ()> = StdResult<T, DbError>;

/// Reference [`DocumentStore`] holding documents in memory.
///
/// Single-threaded use; writers are expected to be serialized by the
/// caller, matching the GUI-event-driven model of the pipeline.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: IndexMap<DocumentId, Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            documents: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn find(&self, filter: &SearchFilter) -> Vec<Document> {
        self.documents
            .values()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect()
    }

    fn find_one(&self, filter: &SearchFilter, sort: Option<Sort>) -> Option<Document> {
        let mut matched = self.find(filter);
        if let Some(sort) = sort {
            matched.sort_by(|a, b| sort.compare(a, b));
        }

        matched.into_iter().next()
    }

    fn insert_one(&mut self, document: Document) -> Result<DocumentId> {
        let id = document.id().clone();
        if self.documents.contains_key(&id) {
            return Err(DbError::AlreadyExists(id));
        }

        self.documents.insert(id.clone(), document);
        Ok(id)
    }

    fn update_many(&mut self, filter: &SearchFilter, update: &DocumentUpdate) -> Result<usize> {
        let mut modified = 0;
        for document in self.documents.values_mut() {
            if !filter.matches(document) {
                continue;
            }

            if apply_update(document, update) {
                modified += 1;
            }
        }

        Ok(modified)
    }

    fn distinct(&self, field: DistinctField, filter: &SearchFilter) -> Vec<String> {
        let mut values = Vec::new();
        for document in self.documents.values() {
            if !filter.matches(document) {
                continue;
            }

            for value in field_values(document, field) {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }

        values
    }
}

fn apply_update(document: &mut Document, update: &DocumentUpdate) -> bool {
    match update {
        DocumentUpdate::SubsetGroup(group) => {
            let Document::Subset(subset) = document else {
                return false;
            };

            subset.subset_group = group.clone();
            true
        }

        DocumentUpdate::Data(data) => {
            let target = match document {
                Document::Project(doc) => &mut doc.data,
                Document::Asset(doc) => &mut doc.data,
                Document::Subset(doc) => &mut doc.data,
                Document::Representation(doc) => &mut doc.data,

                // versions are an immutable historical record
                Document::Version(_) | Document::MasterVersion(_) => return false,
            };

            for (key, value) in data {
                target.insert(key.clone(), value.clone());
            }
            true
        }
    }
}

fn field_values(document: &Document, field: DistinctField) -> Vec<String> {
    match field {
        DistinctField::Name => document.name().into_iter().collect(),
        DistinctField::Silo => match document {
            Document::Asset(asset) => asset.silo.clone().into_iter().collect(),
            _ => Vec::new(),
        },
        DistinctField::Family => match document {
            Document::Subset(subset) => subset.families(),
            Document::Version(version) => version.data.families.clone(),
            _ => Vec::new(),
        },
    }
}

#[cfg(test)]
#[path = "./memory_test.rs"]
mod memory_test;
