//! `GraphStore` implementation for `Neo4jClient`.
//!
//! Every method simply delegates to the corresponding inherent method on `Neo4jClient`.

use async_trait::async_trait;

use super::client::Neo4jClient;
use super::error::StoreError;
use super::models::FruitNode;
use super::traits::GraphStore;

#[async_trait]
impl GraphStore for Neo4jClient {
    async fn list_fruits(&self) -> Result<Vec<FruitNode>, StoreError> {
        self.list_fruits().await
    }

    async fn create_fruit(&self, name: &str) -> Result<FruitNode, StoreError> {
        self.create_fruit(name).await
    }

    async fn get_fruit(&self, id: i64) -> Result<FruitNode, StoreError> {
        self.get_fruit(id).await
    }

    async fn delete_fruit(&self, id: i64) -> Result<(), StoreError> {
        self.delete_fruit(id).await
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        self.health_check().await
    }
}
