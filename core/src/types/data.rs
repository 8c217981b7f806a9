//! Free-form document data.
use indexmap::IndexMap;
use serde_json::Value;

/// Free-form key-value data attached to a document.
/// Insertion order is preserved so serialized documents are stable.
pub type DataMap = IndexMap<String, Value>;
