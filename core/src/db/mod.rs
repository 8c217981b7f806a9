//! Document store functionality.
pub mod error;
pub mod filter;
pub mod memory;
pub mod store;

// Re-exports
pub use error::Error;
pub use filter::{SearchFilter, Sort};
pub use memory::MemoryStore;
pub use store::{DistinctField, DocumentStore, DocumentUpdate};
