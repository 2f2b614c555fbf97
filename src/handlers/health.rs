//! Health check and example handlers

use crate::models::api::ExampleResponse;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Version information
    pub version: String,
    /// Timestamp
    pub timestamp: String,
}

/// Basic health check
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Executing health check");

    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Static example payload
///
/// GET /api/example
pub async fn example() -> Json<ExampleResponse> {
    Json(ExampleResponse {
        message: "API is working".to_string(),
    })
}
