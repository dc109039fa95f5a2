//! Error types for the engine and catalog boundaries.
//!
//! Everything here is recoverable where it occurs: navigation faults leave
//! the prior state intact, catalog faults degrade to an empty or partial
//! listing, and nothing escalates to a session-terminating failure.

use thiserror::Error;

/// Faults raised by play-session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A choice or entry point names a node absent from the active graph.
    #[error("no node `{0}` in the active story graph")]
    DanglingReference(String),

    /// A choice was selected before every term was discovered.
    #[error("choices are locked until every vocabulary term is discovered")]
    Locked,

    /// A choice index past the end of the current node's choice list.
    #[error("choice index {0} is out of range")]
    UnknownChoice(usize),

    /// A play operation was invoked with no active story.
    #[error("no story is active")]
    NoSession,
}

/// Faults raised at the catalog boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no story with id `{0}`")]
    NotFound(String),

    #[error("story record has no id")]
    MissingId,

    #[error("failed to encode catalog payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Faults raised by a backing story store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store read failed: {0}")]
    Read(String),

    #[error("store write failed: {0}")]
    Write(String),
}
