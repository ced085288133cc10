//! Neo4j client and models for the Fruit graph

pub mod client;
pub mod error;
mod impl_graph_store;
pub mod models;
pub mod session;
pub mod traits;

pub use client::Neo4jClient;
pub use error::StoreError;
pub use models::*;
pub use traits::GraphStore;

#[cfg(test)]
pub(crate) mod mock;
