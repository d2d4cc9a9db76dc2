//! API route configuration.
//!
//! Every endpoint is public and read-only.

use crate::api::handlers::{
    compare_handler, energy_handler, fallback_handler, health_handler, list_handler,
    method_not_allowed_handler, welcome_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All catalog routes.
///
/// # Endpoints
///
/// - `GET /`                        - Welcome message and endpoint map
/// - `GET /list`                    - All energy type keys
/// - `GET /energy/{energy_type}`    - One energy record
/// - `GET /compare/{type1}/{type2}` - Advantage comparison of two records
/// - `GET /health`                  - Service health
///
/// Unknown paths answer 404 and other methods on these paths answer 405, both
/// with a `{"detail": ...}` body.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/list", get(list_handler))
        .route("/energy/{energy_type}", get(energy_handler))
        .route("/compare/{type1}/{type2}", get(compare_handler))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
}
