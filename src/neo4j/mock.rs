//! In-memory mock implementation of GraphStore for testing.
//!
//! Keeps fruits in a `tokio::sync::RwLock<HashMap<i64, FruitNode>>` and hands out
//! ids from a counter, the way Neo4j assigns internal node ids.
//! Conditionally compiled with `#[cfg(test)]`.

use crate::neo4j::error::StoreError;
use crate::neo4j::models::FruitNode;
use crate::neo4j::traits::GraphStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::RwLock;

/// In-memory mock implementation of GraphStore for testing.
pub struct MockGraphStore {
    pub fruits: RwLock<HashMap<i64, FruitNode>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
}

impl MockGraphStore {
    /// Create a new empty MockGraphStore.
    pub fn new() -> Self {
        Self {
            fruits: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(0),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent operation fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Insert a fruit with a fixed id, bypassing id assignment
    pub async fn seed(&self, id: i64, name: &str) {
        self.fruits.write().await.insert(
            id,
            FruitNode {
                id,
                name: name.to_string(),
            },
        );
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable(
                "mock store is unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl Default for MockGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphStore for MockGraphStore {
    async fn list_fruits(&self) -> Result<Vec<FruitNode>, StoreError> {
        self.check_available()?;
        let mut fruits: Vec<FruitNode> = self.fruits.read().await.values().cloned().collect();
        fruits.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(fruits)
    }

    async fn create_fruit(&self, name: &str) -> Result<FruitNode, StoreError> {
        self.check_available()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let fruit = FruitNode {
            id,
            name: name.to_string(),
        };
        self.fruits.write().await.insert(id, fruit.clone());
        Ok(fruit)
    }

    async fn get_fruit(&self, id: i64) -> Result<FruitNode, StoreError> {
        self.check_available()?;
        self.fruits
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NoSuchRecord)
    }

    async fn delete_fruit(&self, id: i64) -> Result<(), StoreError> {
        self.check_available()?;
        self.fruits.write().await.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(!self.unavailable.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let store = MockGraphStore::new();
        let a = store.create_fruit("Apple").await.unwrap();
        let b = store.create_fruit("Apple").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_seed_advances_id_counter() {
        let store = MockGraphStore::new();
        store.seed(10, "Fig").await;
        let next = store.create_fruit("Grape").await.unwrap();
        assert_eq!(next.id, 11);
    }

    #[tokio::test]
    async fn test_unavailable_fails_everything() {
        let store = MockGraphStore::new();
        store.set_unavailable(true);
        assert!(store.list_fruits().await.is_err());
        assert!(store.create_fruit("Apple").await.is_err());
        assert!(!store.get_fruit(0).await.unwrap_err().is_not_found());
        assert!(store.delete_fruit(0).await.is_err());
        assert!(!store.health_check().await.unwrap());
    }
}
