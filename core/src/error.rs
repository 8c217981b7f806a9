//! Common error types.
use crate::types::DocumentId;
use serde::{Deserialize, Serialize};
use std::result::Result as StdResult;
use thiserror::Error;

// **********************
// *** Document Error ***
// **********************

#[derive(Serialize, Deserialize, Error, Debug)]
pub enum Document {
    #[error("document `{0}` does not exist")]
    DoesNotExist(DocumentId),

    #[error("id `{0}` already exists")]
    DuplicateId(DocumentId),

    #[error("document `{0}` already exists")]
    AlreadyExists(String),
}

// *********************
// *** Session Error ***
// *********************

#[derive(Serialize, Deserialize, Error, Debug)]
pub enum Session {
    #[error("required session key `{0}` is not set")]
    MissingKey(String),

    #[error("asset `{0}` must exist")]
    UnknownAsset(String),
}

// **********************
// *** Template Error ***
// **********************

#[derive(Serialize, Deserialize, Error, Debug)]
pub enum Template {
    #[error("unclosed placeholder in template `{0}`")]
    Unclosed(String),

    #[error("unsupported format spec `{0}`")]
    UnsupportedSpec(String),

    #[error("template references unavailable data `{0}`")]
    MissingValue(String),
}

// *****************
// *** Error ***
// *****************

#[derive(Serialize, Deserialize, Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Document(#[from] Document),

    #[error("{0}")]
    Session(#[from] Session),

    #[error("{0}")]
    Template(#[from] Template),
}

// *****************
// *** Result ***
// *****************

pub type Result<T = ()> = StdResult<T, Error>;
