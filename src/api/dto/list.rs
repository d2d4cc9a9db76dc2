//! DTOs for the catalog listing endpoint.

use serde::Serialize;

/// Every energy type key, in catalog definition order.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub available_sources: Vec<String>,
}
