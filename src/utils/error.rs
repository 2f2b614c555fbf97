//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to clients for every 5xx that is not a provider response error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream provider call failed (network, SDK, HTTP status)
    #[error("Provider call failed: {0:#}")]
    Provider(#[from] anyhow::Error),

    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// Request body over the configured size limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Provider answered but the answer carried no usable text
    #[error("{0}")]
    ExternalApi(String),
}

/// Error response body: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to the client
    ///
    /// Internal failures are collapsed to a generic message; details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::ExternalApi(msg) => msg.clone(),
            AppError::Provider(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether detailed error information should be logged
    pub fn should_log_details(&self) -> bool {
        !matches!(self, AppError::Validation(_) | AppError::PayloadTooLarge(_))
    }

    /// Convert to the wire error body
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.public_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.should_log_details() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self, status);
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create validation error
    pub fn validation_error(message: impl Into<String>) -> AppError {
        AppError::Validation(message.into())
    }

    /// Create external API error
    pub fn external_api_error(message: impl Into<String>) -> AppError {
        AppError::ExternalApi(message.into())
    }
}
