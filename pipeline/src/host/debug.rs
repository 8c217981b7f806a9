//! In-memory host.
//!
//! Keeps a scene as plain maps so the container lifecycle can run
//! without a host application, e.g. from tests or a headless shell.
use super::{Error, Host, Result};
use crate::container::{Container, CONTAINER_ID};
use indexmap::IndexMap;
use serde_json::json;
use slate_core::types::DataMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct Grouping {
    nodes: Vec<String>,
    data: DataMap,
}

#[derive(Debug, Clone)]
struct Reference {
    path: PathBuf,
    namespace: String,
    nodes: Vec<String>,
}

/// Host double backed by in-memory maps.
#[derive(Debug, Default)]
pub struct DebugHost {
    groupings: IndexMap<String, Grouping>,
    references: IndexMap<String, Reference>,
    namespaces: Vec<String>,
    selection: Vec<String>,
}

impl DebugHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active selection, as an artist would in the host.
    pub fn select(&mut self, nodes: Vec<String>) {
        self.selection = nodes;
    }

    /// Whether a namespace is present in the scene.
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.iter().any(|n| n == namespace)
    }
}

impl Host for DebugHost {
    fn name(&self) -> &str {
        "debug"
    }

    fn ls(&self) -> Vec<Container> {
        let mut containers = Vec::new();
        for (name, grouping) in &self.groupings {
            if grouping.data.get("id") != Some(&json!(CONTAINER_ID)) {
                continue;
            }

            match Container::from_data(name.clone(), &grouping.data) {
                Ok(container) => containers.push(container),
                Err(err) => {
                    tracing::warn!("skipping malformed container `{name}`: {err}");
                }
            }
        }

        containers
    }

    fn selection(&self) -> Vec<String> {
        self.selection.clone()
    }

    fn exists(&self, object: &str) -> bool {
        self.groupings.contains_key(object)
    }

    fn create_grouping(&mut self, name: &str, nodes: Vec<String>) -> Result<String> {
        if self.groupings.contains_key(name) {
            return Err(Error::ObjectExists(name.to_string()));
        }

        self.groupings.insert(
            name.to_string(),
            Grouping {
                nodes,
                data: DataMap::new(),
            },
        );

        Ok(name.to_string())
    }

    fn imprint(&mut self, object: &str, data: &DataMap) -> Result<()> {
        let Some(grouping) = self.groupings.get_mut(object) else {
            return Err(Error::ObjectDoesNotExist(object.to_string()));
        };

        for (key, value) in data {
            grouping.data.insert(key.clone(), value.clone());
        }

        Ok(())
    }

    fn read(&self, object: &str) -> Result<DataMap> {
        let Some(grouping) = self.groupings.get(object) else {
            return Err(Error::ObjectDoesNotExist(object.to_string()));
        };

        Ok(grouping.data.clone())
    }

    fn containerise(&mut self, container: &Container, nodes: Vec<String>) -> Result<()> {
        self.create_grouping(&container.object_name, nodes)?;
        self.imprint(&container.object_name, &container.to_data())
    }

    fn create_reference(&mut self, namespace: &str, path: &Path) -> Result<(String, Vec<String>)> {
        let reference_node = format!("{namespace}RN");
        if self.references.contains_key(&reference_node) {
            return Err(Error::ObjectExists(reference_node));
        }

        let Some(file_name) = path.file_name() else {
            return Err(Error::Io(format!("`{}` has no file name", path.display())));
        };

        let nodes = vec![format!("{namespace}:{}", file_name.to_string_lossy())];
        self.references.insert(
            reference_node.clone(),
            Reference {
                path: path.to_path_buf(),
                namespace: namespace.to_string(),
                nodes: nodes.clone(),
            },
        );

        if !self.has_namespace(namespace) {
            self.namespaces.push(namespace.to_string());
        }

        Ok((reference_node, nodes))
    }

    fn reference_node(&self, object: &str) -> Option<String> {
        let grouping = self.groupings.get(object)?;
        grouping
            .nodes
            .iter()
            .find(|node| self.references.contains_key(*node))
            .cloned()
    }

    fn reference_path(&self, reference_node: &str) -> Result<PathBuf> {
        let Some(reference) = self.references.get(reference_node) else {
            return Err(Error::ReferenceDoesNotExist(reference_node.to_string()));
        };

        Ok(reference.path.clone())
    }

    fn load_reference(&mut self, reference_node: &str, path: &Path) -> Result<()> {
        let Some(reference) = self.references.get_mut(reference_node) else {
            return Err(Error::ReferenceDoesNotExist(reference_node.to_string()));
        };

        reference.path = path.to_path_buf();
        Ok(())
    }

    fn remove_reference(&mut self, reference_node: &str) -> Result<()> {
        let Some(reference) = self.references.shift_remove(reference_node) else {
            return Err(Error::ReferenceDoesNotExist(reference_node.to_string()));
        };

        // drop the groupings that held the reference
        self.groupings.retain(|_, grouping| {
            !grouping
                .nodes
                .iter()
                .any(|node| node == reference_node || reference.nodes.contains(node))
        });

        Ok(())
    }

    fn remove_namespace(&mut self, namespace: &str) -> Result<()> {
        let Some(index) = self.namespaces.iter().position(|n| n == namespace) else {
            return Err(Error::NamespaceAlreadyRemoved(namespace.to_string()));
        };

        self.namespaces.remove(index);
        Ok(())
    }
}

#[cfg(test)]
#[path = "./debug_test.rs"]
mod debug_test;
