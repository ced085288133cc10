//! Test helper factories and mock state builders
#![allow(dead_code)]

use crate::api::{ApiState, ServerState};
use crate::neo4j::mock::MockGraphStore;
use crate::neo4j::GraphStore;
use axum::response::Response;
use std::sync::Arc;

// ============================================================================
// Mock state builders
// ============================================================================

/// Create API state backed by an empty in-memory store
pub fn mock_api_state() -> ApiState {
    mock_api_state_with(Arc::new(MockGraphStore::new()))
}

/// Create API state backed by the given store; keep the `Arc` to seed or break it
pub fn mock_api_state_with(store: Arc<MockGraphStore>) -> ApiState {
    let store: Arc<dyn GraphStore> = store;
    ServerState::new(store)
}

// ============================================================================
// Response helpers
// ============================================================================

/// Read a response body as JSON
pub async fn read_json(resp: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
