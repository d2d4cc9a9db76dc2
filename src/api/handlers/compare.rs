//! Handler for comparing two energy types.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::compare::CompareResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Compares the advantages of two energy types.
///
/// # Endpoint
///
/// `GET /compare/{type1}/{type2}`
///
/// Both path segments are matched case-insensitively. The three advantage
/// lists are sets; clients should not rely on their order.
///
/// # Response
///
/// ```json
/// {
///   "energy_1": "wind",
///   "energy_2": "hydro",
///   "common_advantages": ["Zero emissions during operation", "Low operational costs"],
///   "unique_to_energy_1": ["Highly scalable for large or small installations", "..."],
///   "unique_to_energy_2": ["Reliable and dispatchable output", "..."]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found with `{"detail": "One or both energy types not found."}`
/// if either type is missing.
pub async fn compare_handler(
    State(state): State<AppState>,
    Path((type1, type2)): Path<(String, String)>,
) -> Result<Json<CompareResponse>, AppError> {
    let comparison = state.energy_service.compare(&type1, &type2)?;

    Ok(Json(comparison.into()))
}
