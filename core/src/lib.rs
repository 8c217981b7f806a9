//! # Slate Core
//!
//! Core document model for the Slate pipeline suite: typed documents for the
//! project hierarchy, a document-store abstraction with an in-memory
//! implementation, session state, and path templates.
pub mod db;
#[cfg(test)]
pub mod dev_utils;
pub mod error;
pub mod project;
pub mod session;
pub mod template;
pub mod types;

// Re-exports
pub use error::{Error, Result};
