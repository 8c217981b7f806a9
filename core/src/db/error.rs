//! Document store errors.
use crate::types::DocumentId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Error, Debug)]
pub enum Error {
    /// A document with the given id already exists.
    #[error("document `{0}` already exists")]
    AlreadyExists(DocumentId),

    /// No document with the given id exists.
    #[error("document `{0}` does not exist")]
    DoesNotExist(DocumentId),
}
