//! Inventory actions.
use super::registry::PluginRegistry;
use super::Plugin;
use crate::container::Container;
use crate::error::Result;
use crate::host::Host;
use std::sync::Arc;

/// A plugin acting on containers selected in the scene inventory.
pub trait InventoryAction: Plugin {
    /// Whether the action applies to a container.
    fn is_compatible(&self, _container: &Container) -> bool {
        true
    }

    /// Processes the selected containers.
    ///
    /// # Returns
    /// `true` if the inventory should refresh afterwards.
    fn process(&self, host: &mut dyn Host, containers: &[Container]) -> Result<bool>;
}

/// Actions compatible with every given container,
/// sorted by `(order, name)` for presentation.
pub fn compatible_actions(
    registry: &PluginRegistry<dyn InventoryAction>,
    containers: &[Container],
) -> Vec<Arc<dyn InventoryAction>> {
    let mut actions: Vec<_> = registry
        .discover()
        .into_iter()
        .filter(|action| {
            containers
                .iter()
                .all(|container| action.is_compatible(container))
        })
        .collect();

    actions.sort_by(|a, b| {
        a.order()
            .cmp(&b.order())
            .then_with(|| a.name().cmp(b.name()))
    });

    actions
}

#[cfg(test)]
#[path = "./inventory_test.rs"]
mod inventory_test;
