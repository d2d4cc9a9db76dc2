//! DTOs for the welcome endpoint.

use indexmap::IndexMap;
use serde::Serialize;

/// Static landing payload describing the available endpoints.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub endpoints: IndexMap<&'static str, &'static str>,
}
