//! Plugin manifests.
//!
//! A manifest maps plugin identifiers to constructors. Loading a set of
//! identifiers through the manifest replaces the historical "execute every
//! file in a plugin directory" discovery: identifiers are resolved through
//! a lookup table, and a failing constructor degrades discovery instead of
//! aborting it.
use super::registry::PluginRegistry;
use super::Plugin;
use crate::error::{Plugin as PluginError, Result};
use indexmap::IndexMap;
use std::result::Result as StdResult;
use std::sync::Arc;

/// Builds one plugin, or an explanation of why it cannot be built.
pub type Constructor<P> = fn() -> StdResult<Arc<P>, String>;

/// Identifier-to-constructor table for one plugin capability.
pub struct PluginManifest<P: ?Sized> {
    constructors: IndexMap<String, Constructor<P>>,
}

impl<P: Plugin + ?Sized> PluginManifest<P> {
    pub fn new() -> Self {
        Self {
            constructors: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, constructor: Constructor<P>) {
        self.constructors.insert(name.into(), constructor);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Resolves identifiers and registers the built plugins.
    ///
    /// A constructor failure is logged and skipped; the remaining
    /// identifiers still load.
    ///
    /// # Returns
    /// Number of plugins registered.
    ///
    /// # Errors
    /// + If an identifier is not present in the manifest.
    pub fn load(&self, names: &[&str], registry: &mut PluginRegistry<P>) -> Result<usize> {
        let mut loaded = 0;
        for name in names {
            let Some(constructor) = self.constructors.get(*name) else {
                return Err(PluginError::Unknown(name.to_string()).into());
            };

            match constructor() {
                Ok(plugin) => {
                    registry.register(plugin)?;
                    loaded += 1;
                }
                Err(reason) => {
                    tracing::warn!("skipped plug-in `{name}`: {reason}");
                }
            }
        }

        Ok(loaded)
    }
}

impl<P: Plugin + ?Sized> Default for PluginManifest<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "./manifest_test.rs"]
mod manifest_test;
