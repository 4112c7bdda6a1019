//! # General Route Handlers

use super::MessageResponse;
use axum::Json;

/// The handler for the root (`/`) endpoint.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello MTS".to_string(),
    })
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
