//! Project hierarchy documents.
pub mod asset;
pub mod document;
pub mod project;
pub mod representation;
pub mod subset;
pub mod version;

// Re-exports
pub use asset::Asset;
pub use document::{Document, DocumentKind};
pub use project::{FamilyConfig, Project, ProjectConfig, Templates};
pub use representation::Representation;
pub use subset::Subset;
pub use version::{MasterVersion, Version, VersionData};
