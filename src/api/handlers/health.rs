//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The catalog lives in memory and is validated before the server binds, so a
/// serving process is always healthy.
///
/// # Response
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "catalog_entries": 5 }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_entries: state.energy_service.catalog_size(),
    })
}
