//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gauge::GaugeError;
use health::HealthError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Measurement validation error.
    Health(HealthError),
    /// Gauge rendering error.
    Gauge(GaugeError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Health(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Gauge(err) => {
                tracing::error!(error = %err, "gauge rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<HealthError> for ApiError {
    fn from(err: HealthError) -> Self {
        ApiError::Health(err)
    }
}

impl From<GaugeError> for ApiError {
    fn from(err: GaugeError) -> Self {
        ApiError::Gauge(err)
    }
}
