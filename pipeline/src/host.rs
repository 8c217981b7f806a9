//! Host application seam.
//!
//! A host is the application holding the open scene (Maya, Nuke, ...).
//! The pipeline only ever touches the scene through this trait; the
//! in-memory [`DebugHost`](crate::host::debug::DebugHost) stands in where
//! no real host is running.
use crate::container::Container;
use slate_core::types::DataMap;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;
use thiserror::Error;

pub mod debug;

pub use debug::DebugHost;

// *************
// *** Error ***
// *************

#[derive(Error, Debug)]
pub enum Error {
    #[error("`{0}` already exists")]
    ObjectExists(String),

    #[error("object `{0}` does not exist")]
    ObjectDoesNotExist(String),

    #[error("reference node `{0}` does not exist")]
    ReferenceDoesNotExist(String),

    /// The namespace was already cleaned up by the host.
    /// Callers removing a container tolerate this.
    #[error("namespace `{0}` was already removed")]
    NamespaceAlreadyRemoved(String),

    /// An os-level failure inside the host, e.g. an unreadable file.
    /// Loaders failing this way are skipped; siblings still run.
    #[error("host io error: {0}")]
    Io(String),
}

pub type Result<T = ()> = StdResult<T, Error>;

// ************
// *** Host ***
// ************

/// Scene operations the container lifecycle requires of a host.
pub trait Host {
    /// Name of the host application.
    fn name(&self) -> &str;

    /// Containers present in the open scene, by scanning for objects
    /// carrying container metadata.
    fn ls(&self) -> Vec<Container>;

    /// Currently selected node names.
    fn selection(&self) -> Vec<String>;

    fn exists(&self, object: &str) -> bool;

    /// Creates a grouping object holding `nodes`.
    ///
    /// # Errors
    /// + If an object with the same name already exists.
    fn create_grouping(&mut self, name: &str, nodes: Vec<String>) -> Result<String>;

    /// Writes key-value metadata onto an object as host attributes.
    fn imprint(&mut self, object: &str, data: &DataMap) -> Result<()>;

    /// Reads back the metadata stored on an object.
    fn read(&self, object: &str) -> Result<DataMap>;

    /// Groups loaded `nodes` into a tagged container object.
    ///
    /// # Errors
    /// + If the container object name is taken.
    fn containerise(&mut self, container: &Container, nodes: Vec<String>) -> Result<()>;

    /// Loads `path` into the scene as a file reference under `namespace`.
    ///
    /// # Returns
    /// The created reference node and the nodes it brought in.
    fn create_reference(&mut self, namespace: &str, path: &Path) -> Result<(String, Vec<String>)>;

    /// The reference node backing `object`, if its content was loaded
    /// as a file reference rather than imported.
    fn reference_node(&self, object: &str) -> Option<String>;

    /// File path a reference node currently points at.
    fn reference_path(&self, reference_node: &str) -> Result<PathBuf>;

    /// Re-points a reference node at a different file.
    fn load_reference(&mut self, reference_node: &str, path: &Path) -> Result<()>;

    /// Detaches a reference and deletes its content from the scene.
    fn remove_reference(&mut self, reference_node: &str) -> Result<()>;

    /// Deletes a namespace and its remaining content.
    ///
    /// # Errors
    /// + [`Error::NamespaceAlreadyRemoved`] if the host cleaned the
    ///   namespace up on its own.
    fn remove_namespace(&mut self, namespace: &str) -> Result<()>;
}
