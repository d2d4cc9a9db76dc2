//! Immutable catalog built once at startup.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Deserialize;
use tracing::debug;

use super::error::CatalogError;
use crate::domain::entities::EnergyRecord;
use crate::domain::repositories::CatalogRepository;

/// Catalog dataset compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../../data/catalog.json");

/// One entry of the serialized dataset: the key followed by the record fields.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    key: String,
    #[serde(flatten)]
    record: EnergyRecord,
}

/// Read-only catalog keyed by lowercase energy type.
///
/// Definition order is preserved so `list_keys` is stable across calls.
/// There is no way to add, remove, or edit entries after construction; a
/// changed dataset means a new build.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    entries: IndexMap<String, EnergyRecord>,
}

impl StaticCatalog {
    /// Builds the catalog from the dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the bundled dataset is malformed or breaks a
    /// catalog invariant.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses a JSON array of entries (`{"key": ..., "type": ..., ...}`).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed JSON, or any validation
    /// error from [`StaticCatalog::from_entries`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries.into_iter().map(|e| (e.key, e.record)))
    }

    /// Builds a catalog from `(key, record)` pairs, keeping their order.
    ///
    /// # Validation
    ///
    /// - Keys must be non-empty and lowercase
    /// - Keys must be unique
    /// - Every record must list at least one advantage
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] encountered.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, EnergyRecord)>,
    {
        let mut map = IndexMap::new();

        for (key, record) in entries {
            if key.is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            if key != key.to_lowercase() {
                return Err(CatalogError::NotLowercase(key));
            }
            if record.advantages.is_empty() {
                return Err(CatalogError::NoAdvantages(key));
            }

            match map.entry(key) {
                Entry::Occupied(occupied) => {
                    return Err(CatalogError::DuplicateKey(occupied.key().clone()));
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(record);
                }
            }
        }

        debug!("Catalog built with {} entries", map.len());

        Ok(Self { entries: map })
    }

    /// Iterates over `(key, record)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnergyRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl CatalogRepository for StaticCatalog {
    fn get(&self, key: &str) -> Option<EnergyRecord> {
        self.entries.get(key).cloned()
    }

    fn list_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
