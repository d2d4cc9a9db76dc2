//! Handler for single energy type lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::EnergyRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full record for one energy type.
///
/// # Endpoint
///
/// `GET /energy/{energy_type}`
///
/// The path segment is matched case-insensitively.
///
/// # Errors
///
/// Returns 404 Not Found with `{"detail": "Energy type not found."}` if the
/// type is not in the catalog.
pub async fn energy_handler(
    State(state): State<AppState>,
    Path(energy_type): Path<String>,
) -> Result<Json<EnergyRecord>, AppError> {
    let record = state.energy_service.lookup(&energy_type)?;

    Ok(Json(record))
}
