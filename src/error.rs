use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned when a single energy type lookup misses.
pub const ENERGY_NOT_FOUND: &str = "Energy type not found.";

/// Message returned when either side of a comparison misses.
pub const COMPARISON_NOT_FOUND: &str = "One or both energy types not found.";

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Errors surfaced by the query service.
///
/// A miss is deterministic and never retried: it propagates straight to the
/// HTTP boundary and becomes a 404 with a fixed message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
