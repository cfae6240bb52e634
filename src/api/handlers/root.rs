use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;

pub const RUNNING: &str = "running";

/// Root endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// GET /
///
/// Names the service and reports that it is running.
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::debug!("/ probe");
    let response = RootResponse {
        message: state.config.service_name.clone(),
        status: RUNNING.to_string(),
    };

    (StatusCode::OK, Json(response))
}
