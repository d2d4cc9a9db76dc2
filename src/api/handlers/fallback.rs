//! Fallbacks for unmatched paths and methods.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Answers any unknown path with a 404 in the same shape as lookup misses.
pub async fn fallback_handler() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

/// Answers a known path called with an unsupported method.
pub async fn method_not_allowed_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}
