//! Handler for the landing endpoint.

use axum::Json;
use indexmap::IndexMap;

use crate::api::dto::welcome::WelcomeResponse;

/// Returns a static welcome message with a map of the public endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn welcome_handler() -> Json<WelcomeResponse> {
    let endpoints = IndexMap::from([
        ("/list", "List all available energy types"),
        ("/energy/{energy_type}", "Get details for one energy type"),
        (
            "/compare/{type1}/{type2}",
            "Compare the advantages of two energy types",
        ),
        ("/health", "Service health status"),
    ]);

    Json(WelcomeResponse {
        message: "Welcome to the Renewable Energy API",
        endpoints,
    })
}
