//! Short-lived sessions over the shared Neo4j connection pool
//!
//! A [`Session`] wraps one explicit transaction on a pooled connection. It must be
//! closed with [`close`] (or [`finish`]), which commits or rolls back depending on
//! the access mode and the outcome of the work done inside it.

use super::error::StoreError;
use async_trait::async_trait;
use neo4rs::{Graph, Query, Row, Txn};

/// Whether the queries run in a session may mutate data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

impl AccessMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
        }
    }
}

/// An open transaction bound to an access mode
pub struct Session {
    txn: Txn,
    mode: AccessMode,
}

impl Session {
    /// Open a session on a pooled connection
    pub async fn open(graph: &Graph, mode: AccessMode) -> Result<Self, StoreError> {
        let txn = graph.start_txn().await?;
        tracing::trace!(mode = mode.as_str(), "session opened");
        Ok(Self { txn, mode })
    }

    /// Run a query and materialize every record it returns
    pub async fn fetch(&mut self, q: Query) -> Result<Vec<Row>, StoreError> {
        let mut stream = self.txn.execute(q).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next(self.txn.handle()).await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Run a query and discard its records
    pub async fn consume(&mut self, q: Query) -> Result<(), StoreError> {
        self.txn.run(q).await?;
        Ok(())
    }
}

/// The end of a transaction's life: commit or roll back
#[async_trait]
pub trait Transaction: Send + Sized {
    fn mode(&self) -> AccessMode;
    async fn commit(self) -> Result<(), StoreError>;
    async fn rollback(self) -> Result<(), StoreError>;
}

#[async_trait]
impl Transaction for Session {
    fn mode(&self) -> AccessMode {
        self.mode
    }

    async fn commit(self) -> Result<(), StoreError> {
        self.txn.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), StoreError> {
        self.txn.rollback().await?;
        Ok(())
    }
}

/// End the transaction and hand the connection back to the pool.
///
/// Only a write session whose work succeeded is committed; everything else is
/// rolled back.
pub async fn close<S: Transaction>(session: S, succeeded: bool) -> Result<(), StoreError> {
    let mode = session.mode();
    if succeeded && mode == AccessMode::Write {
        session.commit().await?;
    } else {
        session.rollback().await?;
    }
    tracing::trace!(mode = mode.as_str(), succeeded, "session closed");
    Ok(())
}

/// Close a session according to the outcome of the work done in it.
///
/// A close failure after successful work is reported; after failed work it is only
/// logged so the original error reaches the caller.
pub async fn finish<S, T>(session: S, outcome: Result<T, StoreError>) -> Result<T, StoreError>
where
    S: Transaction,
    T: Send,
{
    match outcome {
        Ok(value) => {
            close(session, true).await?;
            Ok(value)
        }
        Err(e) => {
            let mode = session.mode();
            if let Err(close_err) = close(session, false).await {
                tracing::warn!(
                    mode = mode.as_str(),
                    "Failed to close session after error: {}",
                    close_err
                );
            }
            Err(e)
        }
    }
}

/// Return the only record of a result.
///
/// Fails with [`StoreError::NoSuchRecord`] when there are none and
/// [`StoreError::MultipleRecords`] when there is more than one.
pub fn single<T>(records: Vec<T>) -> Result<T, StoreError> {
    let count = records.len();
    let mut iter = records.into_iter();
    match (iter.next(), count) {
        (None, _) => Err(StoreError::NoSuchRecord),
        (Some(record), 1) => Ok(record),
        (Some(_), n) => Err(StoreError::MultipleRecords(n)),
    }
}
