//! Common types.
pub mod data;
pub mod document_id;
pub mod version_number;

// Re-exports
pub use data::DataMap;
pub use document_id::DocumentId;
pub use version_number::VersionNumber;
