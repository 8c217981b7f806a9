//! # Slate Pipeline
//!
//! Versioned-container lifecycle for the Slate suite: an explicit
//! [`PipelineContext`] replaces process-wide registries, static plugin
//! registries replace on-disk plugin execution, and the container
//! create/load/update/switch/remove state machine runs against a
//! [`Host`](host::Host) scene seam and a
//! [`DocumentStore`](slate_core::db::DocumentStore).
pub mod container;
pub mod context;
pub mod error;
pub mod event;
pub mod host;
pub mod lifecycle;
pub mod plugin;
pub mod publish;
pub mod resolve;
pub mod schedule;

#[cfg(test)]
pub mod dev_utils;

// Re-exports
pub use container::Container;
pub use context::PipelineContext;
pub use error::{Error, Result};
pub use event::PipelineEvent;
pub use lifecycle::VersionTarget;
pub use resolve::{ContentAddress, RepresentationContext};
