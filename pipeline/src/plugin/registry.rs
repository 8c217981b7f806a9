//! Static plugin registry.
//!
//! Replaces on-disk plugin discovery: plugins are registered as values,
//! never loaded by executing source files, and `discover` is a pure read
//! with no filesystem side effects.
use super::Plugin;
use crate::error::{Plugin as PluginError, Result};
use indexmap::IndexMap;
use std::sync::Arc;

// ***********************
// *** Conflict Policy ***
// ***********************

/// How a registry resolves two plugins sharing a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Registration fails.
    Error,

    /// The earlier registration is kept.
    FirstWins,

    /// The later registration overwrites, with a warning.
    /// This is the historical behavior and the default.
    #[default]
    LastWins,
}

// ***********************
// *** Plugin Registry ***
// ***********************

/// Registry of one plugin capability.
pub struct PluginRegistry<P: ?Sized> {
    plugins: IndexMap<String, Arc<P>>,
    policy: ConflictPolicy,
}

impl<P: Plugin + ?Sized> PluginRegistry<P> {
    pub fn new() -> Self {
        Self::with_policy(ConflictPolicy::default())
    }

    pub fn with_policy(policy: ConflictPolicy) -> Self {
        Self {
            plugins: IndexMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Registers a plugin under its name.
    /// Re-registering the same plugin value is a no-op; a different
    /// plugin with the same name is resolved by the conflict policy.
    pub fn register(&mut self, plugin: Arc<P>) -> Result<()> {
        let name = plugin.name().to_string();
        if let Some(existing) = self.plugins.get(&name) {
            if Arc::ptr_eq(existing, &plugin) {
                return Ok(());
            }

            match self.policy {
                ConflictPolicy::Error => {
                    return Err(PluginError::Duplicate(name).into());
                }
                ConflictPolicy::FirstWins => {
                    tracing::warn!("duplicate plug-in found: {name}");
                    return Ok(());
                }
                ConflictPolicy::LastWins => {
                    tracing::warn!("overwriting {name}");
                }
            }
        }

        self.plugins.insert(name, plugin);
        Ok(())
    }

    pub fn deregister(&mut self, name: &str) -> Option<Arc<P>> {
        self.plugins.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<P>> {
        self.plugins.get(name).cloned()
    }

    /// All registered plugins, sorted by name.
    pub fn discover(&self) -> Vec<Arc<P>> {
        let mut plugins: Vec<_> = self.plugins.values().cloned().collect();
        plugins.sort_by(|a, b| a.name().cmp(b.name()));
        plugins
    }
}

impl<P: Plugin + ?Sized> Default for PluginRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;
