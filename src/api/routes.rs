//! API route definitions

use super::fruit_handlers;
use super::handlers::{self, ApiState};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // ====================================================================
        // Fruits
        // ====================================================================
        .route(
            "/fruits",
            get(fruit_handlers::list_fruits).post(fruit_handlers::create_fruit),
        )
        .route(
            "/fruits/{id}",
            get(fruit_handlers::get_fruit).delete(fruit_handlers::delete_fruit),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
