//! Plugin capabilities and their registries.
pub mod creator;
pub mod inventory;
pub mod loader;
pub mod manifest;
pub mod registry;

// Re-exports
pub use creator::Creator;
pub use inventory::{compatible_actions, InventoryAction};
pub use loader::{compatible_loaders, is_compatible_loader, Loader};
pub use manifest::PluginManifest;
pub use registry::{ConflictPolicy, PluginRegistry};

/// Behavior common to all plugin capabilities.
///
/// Plugins are identified by name; a registry holds at most one plugin
/// per name, subject to its [`ConflictPolicy`].
pub trait Plugin {
    fn name(&self) -> &str;

    /// Human-facing label, for presentation.
    fn label(&self) -> Option<&str> {
        None
    }

    /// Presentation order among compatible plugins; lower comes first.
    fn order(&self) -> i32 {
        0
    }
}
