//! Handler for the catalog listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::list::ListResponse;
use crate::state::AppState;

/// Lists every energy type in the catalog.
///
/// # Endpoint
///
/// `GET /list`
///
/// # Response
///
/// ```json
/// { "available_sources": ["solar", "wind", "hydro", "geothermal", "biomass"] }
/// ```
pub async fn list_handler(State(state): State<AppState>) -> Json<ListResponse> {
    Json(ListResponse {
        available_sources: state.energy_service.list_all(),
    })
}
