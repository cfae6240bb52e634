use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};
use serde_json::json;

/// Fallback for unknown routes: JSON 404 instead of an empty body
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri.path());
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

/// Known route, unsupported method: JSON 405
pub async fn method_not_allowed(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::debug!("{} not allowed on {}", method, uri.path());
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}
