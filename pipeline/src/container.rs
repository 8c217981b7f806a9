//! Scene containers.
//!
//! A container is a tagged grouping of nodes inside the open host scene,
//! tracking which published representation the nodes came from. It lives
//! in the scene only; the database never stores containers.
use crate::error::{Container as ContainerError, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use slate_core::types::{DataMap, DocumentId, VersionNumber};

/// Value of the `id` attribute marking an object as a container.
pub const CONTAINER_ID: &str = "slate.container";

/// Schema tag written onto containers.
pub const CONTAINER_SCHEMA: &str = "slate:container-1.0";

/// Metadata of a loaded representation in the scene.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Container {
    /// Name of the grouping object, unique within the scene.
    pub object_name: String,

    pub name: String,
    pub namespace: String,
    pub asset: String,
    pub subset: String,
    pub version: VersionNumber,

    /// Id of the representation the container was loaded from.
    pub representation: DocumentId,

    /// Name of the loader that produced the container.
    pub loader: String,

    /// Work file the loaded version was published from.
    pub source: Option<String>,
}

impl Container {
    /// Attribute values imprinted onto the grouping object.
    pub fn to_data(&self) -> DataMap {
        let mut data = DataMap::new();
        data.insert(String::from("schema"), json!(CONTAINER_SCHEMA));
        data.insert(String::from("id"), json!(CONTAINER_ID));
        data.insert(String::from("name"), json!(self.name));
        data.insert(String::from("namespace"), json!(self.namespace));
        data.insert(String::from("asset"), json!(self.asset));
        data.insert(String::from("subset"), json!(self.subset));
        data.insert(String::from("version"), json!(*self.version));
        data.insert(
            String::from("representation"),
            json!(self.representation.to_string()),
        );
        data.insert(String::from("loader"), json!(self.loader));
        data.insert(String::from("source"), json!(self.source));
        data
    }

    /// Reads a container back from the attributes stored on an object.
    ///
    /// # Errors
    /// + If a required metadata key is missing or malformed.
    pub fn from_data(object_name: impl Into<String>, data: &DataMap) -> Result<Container> {
        let object_name = object_name.into();

        let representation = required_str(&object_name, data, "representation")?
            .parse::<DocumentId>()
            .map_err(|_| missing(&object_name, "representation"))?;

        let version = data
            .get("version")
            .and_then(|value| value.as_i64())
            .ok_or_else(|| missing(&object_name, "version"))?;

        Ok(Container {
            name: required_str(&object_name, data, "name")?,
            namespace: required_str(&object_name, data, "namespace")?,
            asset: required_str(&object_name, data, "asset")?,
            subset: required_str(&object_name, data, "subset")?,
            version: VersionNumber::new(version),
            representation,
            loader: required_str(&object_name, data, "loader")?,
            source: data
                .get("source")
                .and_then(|value| value.as_str())
                .map(String::from),
            object_name,
        })
    }
}

fn required_str(object_name: &str, data: &DataMap, key: &str) -> Result<String> {
    data.get(key)
        .and_then(|value| value.as_str())
        .map(String::from)
        .ok_or_else(|| missing(object_name, key))
}

fn missing(object_name: &str, key: &str) -> Error {
    Error::Container(ContainerError::MissingMetadata {
        object_name: object_name.to_string(),
        key: key.to_string(),
    })
}

#[cfg(test)]
#[path = "./container_test.rs"]
mod container_test;
