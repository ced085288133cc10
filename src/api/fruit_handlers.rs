//! Fruit API handlers
//!
//! Each handler maps onto exactly one store operation; the store opens and closes
//! its own session per call.

use super::handlers::{ApiJson, ApiPath, ApiState, AppError};
use crate::neo4j::Fruit;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// List all fruits, ordered by name
pub async fn list_fruits(State(state): State<ApiState>) -> Result<Json<Vec<Fruit>>, AppError> {
    let fruits = state.neo4j.list_fruits().await?;
    Ok(Json(fruits.into_iter().map(Fruit::from).collect()))
}

/// Create a fruit. Any `id` in the body is ignored; the store assigns one.
pub async fn create_fruit(
    State(state): State<ApiState>,
    ApiJson(req): ApiJson<Fruit>,
) -> Result<impl IntoResponse, AppError> {
    let name = match req.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(AppError::BadRequest("Fruit name is required".to_string())),
    };

    let fruit = state.neo4j.create_fruit(&name).await?;
    tracing::debug!(id = fruit.id, name = %fruit.name, "Created fruit");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, fruit.location())],
        Json(Fruit::from(fruit)),
    ))
}

/// Get a single fruit by its store-assigned id
pub async fn get_fruit(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Fruit>, AppError> {
    let fruit = match state.neo4j.get_fruit(id).await {
        Ok(fruit) => fruit,
        Err(e) if e.is_not_found() => {
            return Err(AppError::NotFound(format!("Fruit {} not found", id)))
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(fruit.into()))
}

/// Delete a fruit. Answers 204 whether or not the fruit existed.
pub async fn delete_fruit(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.neo4j.delete_fruit(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
