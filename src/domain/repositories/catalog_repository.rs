//! Repository trait for read-only catalog access.

use crate::domain::entities::EnergyRecord;

/// Read-only access to the energy catalog.
///
/// Keys are lowercase and stable for the process lifetime. Implementations
/// never mutate after construction, so lookups need no locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::StaticCatalog`] - Catalog compiled into the binary
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// Finds a record by its exact (already normalized) key.
    ///
    /// Returns `None` when the key is not in the catalog.
    fn get(&self, key: &str) -> Option<EnergyRecord>;

    /// Lists every key in catalog definition order.
    fn list_keys(&self) -> Vec<String>;

    /// Number of entries in the catalog.
    fn len(&self) -> usize;

    /// Whether the catalog has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
