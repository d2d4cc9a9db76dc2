//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`                        - Welcome payload
//! - `GET /list`                    - Catalog keys
//! - `GET /energy/{energy_type}`    - Record lookup
//! - `GET /compare/{type1}/{type2}` - Advantage comparison
//! - `GET /health`                  - Health check
//!
//! Unknown paths answer 404 `{"detail": "Not Found"}`; other methods on the
//! paths above answer 405 `{"detail": "Method Not Allowed"}`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origin mirroring or an explicit allow-list
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::config::CorsOrigins;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - origins allowed to call the API from a browser
pub fn app_router(state: AppState, cors_origins: &CorsOrigins) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
