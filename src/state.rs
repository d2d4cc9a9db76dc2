//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::EnergyService;
use crate::infrastructure::catalog::StaticCatalog;

/// State shared by all request handlers.
///
/// Cloning is cheap; the catalog behind the service is immutable, so
/// concurrent requests read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub energy_service: Arc<EnergyService<StaticCatalog>>,
}

impl AppState {
    /// Wraps an already-built catalog in the query service.
    pub fn new(catalog: Arc<StaticCatalog>) -> Self {
        Self {
            energy_service: Arc::new(EnergyService::new(catalog)),
        }
    }
}
