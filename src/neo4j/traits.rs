//! GraphStore trait definition
//!
//! Defines the abstract interface for the Fruit graph operations.
//! This trait mirrors the public async methods of `Neo4jClient`,
//! enabling testing with mock implementations.

use crate::neo4j::error::StoreError;
use crate::neo4j::models::FruitNode;
use async_trait::async_trait;

/// Abstract interface for graph database operations.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// List all fruits ordered by name ascending
    async fn list_fruits(&self) -> Result<Vec<FruitNode>, StoreError>;

    /// Create a fruit; the store assigns its id
    async fn create_fruit(&self, name: &str) -> Result<FruitNode, StoreError>;

    /// Get exactly one fruit by id, or `StoreError::NoSuchRecord`
    async fn get_fruit(&self, id: i64) -> Result<FruitNode, StoreError>;

    /// Delete a fruit by id; succeeds whether or not it existed
    async fn delete_fruit(&self, id: i64) -> Result<(), StoreError>;

    /// Check if the store is reachable
    async fn health_check(&self) -> Result<bool, StoreError>;
}
