//! Neo4j client for the Fruit catalogue

use super::error::StoreError;
use super::models::FruitNode;
use super::session::{finish, single, AccessMode, Session};
use crate::Neo4jSettings;
use anyhow::{Context, Result};
use neo4rs::{query, ConfigBuilder, Graph, Query, Row};
use std::sync::Arc;

/// Client for Neo4j operations.
///
/// Holds the process-wide connection pool. Every operation runs in its own
/// short-lived [`Session`], which is closed on success and failure alike.
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

impl Neo4jClient {
    /// Create a new Neo4j client from the configured settings
    pub async fn connect(settings: &Neo4jSettings) -> Result<Self> {
        let mut builder = ConfigBuilder::default()
            .uri(settings.uri.as_str())
            .user(settings.user.as_str())
            .password(settings.password.as_str())
            .fetch_size(settings.fetch_size)
            .max_connections(settings.max_connections);
        if let Some(db) = settings.database.as_deref() {
            builder = builder.db(db);
        }
        let config = builder.build().context("Invalid Neo4j configuration")?;

        let graph = Graph::connect(config)
            .await
            .with_context(|| format!("Failed to connect to Neo4j at {}", settings.uri))?;

        tracing::info!(
            uri = %settings.uri,
            max_connections = settings.max_connections,
            "Connected to Neo4j"
        );

        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Run a query in a fresh session and return every record
    async fn fetch_in_session(&self, mode: AccessMode, q: Query) -> Result<Vec<Row>, StoreError> {
        let mut session = Session::open(&self.graph, mode).await?;
        let outcome = session.fetch(q).await;
        finish(session, outcome).await
    }

    /// Run a query in a fresh session and discard its records
    async fn consume_in_session(&self, mode: AccessMode, q: Query) -> Result<(), StoreError> {
        let mut session = Session::open(&self.graph, mode).await?;
        let outcome = session.consume(q).await;
        finish(session, outcome).await
    }

    // ========================================================================
    // Fruit operations
    // ========================================================================

    /// List all fruits ordered by name
    pub async fn list_fruits(&self) -> Result<Vec<FruitNode>, StoreError> {
        let q = query(
            r#"
            MATCH (f:Fruit)
            RETURN f
            ORDER BY f.name
            "#,
        );

        let rows = self.fetch_in_session(AccessMode::Read, q).await?;
        rows.iter().map(row_to_fruit).collect()
    }

    /// Create a fruit and return it with its store-assigned id
    pub async fn create_fruit(&self, name: &str) -> Result<FruitNode, StoreError> {
        let q = query(
            r#"
            CREATE (f:Fruit {name: $name})
            RETURN f
            "#,
        )
        .param("name", name);

        let rows = self.fetch_in_session(AccessMode::Write, q).await?;
        row_to_fruit(&single(rows)?)
    }

    /// Get a fruit by its store-assigned id
    pub async fn get_fruit(&self, id: i64) -> Result<FruitNode, StoreError> {
        let q = query(
            r#"
            MATCH (f:Fruit)
            WHERE id(f) = $id
            RETURN f
            "#,
        )
        .param("id", id);

        let rows = self.fetch_in_session(AccessMode::Read, q).await?;
        row_to_fruit(&single(rows)?)
    }

    /// Delete a fruit by id. Deleting an id that matches nothing is not an error.
    pub async fn delete_fruit(&self, id: i64) -> Result<(), StoreError> {
        let q = query(
            r#"
            MATCH (f:Fruit)
            WHERE id(f) = $id
            DELETE f
            "#,
        )
        .param("id", id);

        self.consume_in_session(AccessMode::Write, q).await
    }

    /// Check connectivity with a trivial query
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        let mut result = self.graph.execute(query("RETURN 1 AS ok")).await?;
        Ok(result.next().await?.is_some())
    }
}

/// Helper to convert a row holding a `f` node into a FruitNode
fn row_to_fruit(row: &Row) -> Result<FruitNode, StoreError> {
    let node: neo4rs::Node = row.get("f")?;
    Ok(FruitNode {
        id: node.id(),
        name: node.get("name")?,
    })
}
