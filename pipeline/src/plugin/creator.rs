//! Creator plugins.
use super::Plugin;
use crate::error::Result;
use crate::host::Host;
use slate_core::types::DataMap;

/// A plugin that marks host content as a new instance to be published.
///
/// Creators are matched to a single family; [`create`](crate::lifecycle)
/// runs every creator registered for the requested family.
pub trait Creator: Plugin {
    /// Family of instances this creator produces.
    fn family(&self) -> String;

    /// Creates the instance grouping in the scene.
    ///
    /// The default implementation groups the active selection when the
    /// `useSelection` option is set, otherwise an empty grouping.
    fn process(&self, host: &mut dyn Host, instance: &str, options: &DataMap) -> Result<String> {
        let use_selection = options
            .get("useSelection")
            .and_then(|value| value.as_bool())
            .unwrap_or(false);

        let nodes = if use_selection {
            host.selection()
        } else {
            Vec::new()
        };

        Ok(host.create_grouping(instance, nodes)?)
    }
}
