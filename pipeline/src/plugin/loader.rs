//! Loader plugins.
use super::registry::PluginRegistry;
use super::Plugin;
use crate::container::Container;
use crate::error::{Container as ContainerError, Plugin as PluginError, Result};
use crate::host::{Error as HostError, Host};
use crate::resolve::RepresentationContext;
use slate_core::types::DataMap;
use std::path::Path;
use std::sync::Arc;

/// Family or representation entry matching everything.
pub const WILDCARD: &str = "*";

// **************
// *** Loader ***
// **************

/// A plugin that can bring a published representation into the scene.
///
/// A loader opts in to the families and representation names it
/// understands; compatibility is decided by [`is_compatible_loader`].
pub trait Loader: Plugin {
    /// Families this loader understands, e.g. `slate.model`.
    fn families(&self) -> Vec<String>;

    /// Representation names this loader understands, e.g. `ma`, `abc`.
    fn representations(&self) -> Vec<String>;

    /// Mutates the scene to contain the representation.
    ///
    /// # Returns
    /// Names of the nodes produced.
    fn load(
        &self,
        host: &mut dyn Host,
        context: &RepresentationContext,
        name: &str,
        namespace: &str,
        options: &DataMap,
    ) -> Result<Vec<String>>;

    /// Re-points the container's content at a different published file.
    ///
    /// The default implementation swaps the file reference backing the
    /// container; loaders that import rather than reference must
    /// override it.
    fn update(&self, host: &mut dyn Host, container: &Container, path: &Path) -> Result<()> {
        let reference_node = referenced(host, container)?;
        host.load_reference(&reference_node, path)?;
        Ok(())
    }

    /// Detaches the container's content from the scene.
    ///
    /// The default implementation removes the file reference and then the
    /// namespace, tolerating a namespace the host already cleaned up.
    fn remove(&self, host: &mut dyn Host, container: &Container) -> Result<()> {
        let reference_node = referenced(host, container)?;
        host.remove_reference(&reference_node)?;

        match host.remove_namespace(&container.namespace) {
            Ok(()) | Err(HostError::NamespaceAlreadyRemoved(_)) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Re-targets the container at a different representation.
    /// Unsupported unless a loader opts in.
    fn switch(
        &self,
        _host: &mut dyn Host,
        _container: &Container,
        _context: &RepresentationContext,
        _path: &Path,
    ) -> Result<()> {
        Err(PluginError::SwitchNotSupported(self.name().to_string()).into())
    }
}

/// Reference node backing the container.
///
/// # Errors
/// + If the container's content was imported rather than referenced.
fn referenced(host: &dyn Host, container: &Container) -> Result<String> {
    host.reference_node(&container.object_name)
        .ok_or_else(|| ContainerError::NotReferenced(container.object_name.clone()).into())
}

// *********************
// *** Compatibility ***
// *********************

/// Whether a loader can handle the representation in `context`.
///
/// True iff any family of the version intersects the loader's families
/// and the representation's name is among the loader's representations.
/// `"*"` in either list matches everything; a loader with an empty
/// family list is never compatible.
pub fn is_compatible_loader(loader: &dyn Loader, context: &RepresentationContext) -> bool {
    let families = context_families(context);

    let loader_families = loader.families();
    let has_family = loader_families.iter().any(|f| f == WILDCARD)
        || families.iter().any(|f| loader_families.contains(f));

    let representations = loader.representations();
    let has_representation = representations.iter().any(|r| r == WILDCARD)
        || representations.contains(&context.representation.name);

    has_family && has_representation
}

/// All compatible loaders, sorted by `(order, name)` for presentation.
pub fn compatible_loaders(
    registry: &PluginRegistry<dyn Loader>,
    context: &RepresentationContext,
) -> Vec<Arc<dyn Loader>> {
    let mut loaders: Vec<_> = registry
        .discover()
        .into_iter()
        .filter(|loader| is_compatible_loader(loader.as_ref(), context))
        .collect();

    loaders.sort_by(|a, b| {
        a.order()
            .cmp(&b.order())
            .then_with(|| a.name().cmp(b.name()))
    });

    loaders
}

/// Families of the context's version, falling back to the subset for
/// older publishes that only stamped families there.
fn context_families(context: &RepresentationContext) -> Vec<String> {
    if !context.version.data.families.is_empty() {
        return context.version.data.families.clone();
    }

    context.subset.families()
}

#[cfg(test)]
#[path = "./loader_test.rs"]
mod loader_test;
