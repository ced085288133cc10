//! HTTP API for the Fruit catalogue

pub mod fruit_handlers;
pub mod handlers;
pub mod routes;

pub use handlers::{ApiState, AppError, ServerState};
pub use routes::create_router;
