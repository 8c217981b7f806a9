//! Pipeline error types.
use slate_core::project::DocumentKind;
use slate_core::types::DocumentId;
use std::result::Result as StdResult;
use thiserror::Error;

// ********************
// *** Plugin Error ***
// ********************

#[derive(Error, Debug)]
pub enum Plugin {
    /// Manifest entry does not resolve to a known plugin constructor.
    #[error("unknown plugin `{0}`")]
    Unknown(String),

    /// Two plugins share a name and the registry's conflict policy
    /// rejects overwrites.
    #[error("duplicate plugin `{0}`")]
    Duplicate(String),

    #[error("loader `{loader}` is incompatible with `{subset}`")]
    Incompatible { loader: String, subset: String },

    #[error("no loaders were run for representation `{0}`")]
    NoLoadersRun(String),

    #[error("loaders produced no nodes for representation `{0}`")]
    NoNodesProduced(String),

    #[error("no creator plug-ins were run for family `{0}`")]
    NoCreatorsRun(String),

    #[error("loader `{0}` does not support switch")]
    SwitchNotSupported(String),
}

// *********************
// *** Lookup Error ***
// *********************

#[derive(Error, Debug)]
pub enum Lookup {
    #[error("no {kind} named `{name}` was found")]
    NotFound { kind: DocumentKind, name: String },

    #[error("document `{0}` does not exist")]
    DoesNotExist(DocumentId),

    /// An ancestor link of the document is missing; the chain up to the
    /// project could not be resolved.
    #[error("broken parent chain above document `{0}`")]
    BrokenParentChain(DocumentId),
}

// ***********************
// *** Container Error ***
// ***********************

#[derive(Error, Debug)]
pub enum Container {
    #[error("`{0}` already exists")]
    AlreadyExists(String),

    #[error("`{0}` is not a valid family")]
    FamilyNotValid(String),

    /// Imported (non-referenced) containers cannot be updated or removed.
    #[error("imported container `{0}` not supported; container must be referenced")]
    NotReferenced(String),

    #[error("container `{object_name}` is missing metadata key `{key}`")]
    MissingMetadata { object_name: String, key: String },

    #[error("invalid dynamic property `{0}`")]
    InvalidDynamicProperty(String),
}

// *************
// *** Error ***
// *************

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] slate_core::Error),

    #[error("{0}")]
    Db(#[from] slate_core::db::Error),

    #[error("{0}")]
    Host(#[from] crate::host::Error),

    #[error("{0}")]
    Plugin(#[from] Plugin),

    #[error("{0}")]
    Lookup(#[from] Lookup),

    #[error("{0}")]
    Container(#[from] Container),

    /// No host has been registered on the context.
    #[error("no host is registered")]
    NoHost,
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;
