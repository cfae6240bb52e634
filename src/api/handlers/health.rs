use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

pub const HEALTHY: &str = "healthy";

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health
///
/// Liveness probe: answering at all means the process is up and serving.
pub async fn health_check() -> impl IntoResponse {
    tracing::debug!("/health probe");
    let response = HealthResponse {
        status: HEALTHY.to_string(),
    };

    (StatusCode::OK, Json(response))
}
