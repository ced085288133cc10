//! Error taxonomy for graph store operations

use thiserror::Error;

/// Errors raised by a [`GraphStore`](super::GraphStore).
///
/// `NoSuchRecord` is the only variant callers are expected to branch on; everything
/// else is a store fault.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A single record was expected but the query returned none
    #[error("no record found")]
    NoSuchRecord,

    /// A single record was expected but the query returned several
    #[error("expected a single record, got {0}")]
    MultipleRecords(usize),

    #[error("neo4j driver error: {0}")]
    Driver(#[from] neo4rs::Error),

    #[error("failed to decode record: {0}")]
    Decode(#[from] neo4rs::DeError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NoSuchRecord)
    }
}
