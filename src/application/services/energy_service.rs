//! Catalog query service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{ComparisonResult, EnergyRecord};
use crate::domain::repositories::CatalogRepository;
use crate::error::{AppError, COMPARISON_NOT_FOUND, ENERGY_NOT_FOUND};

/// Service answering lookups, listings, and comparisons over the catalog.
///
/// The catalog is injected at construction and only ever read, so a single
/// instance is shared across all requests.
pub struct EnergyService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> EnergyService<R> {
    /// Creates a new energy service over the given catalog.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up a record by energy type, ignoring case.
    ///
    /// The input is lowercased but not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the lowercased key is not in the catalog.
    pub fn lookup(&self, energy_type: &str) -> Result<EnergyRecord, AppError> {
        let key = normalize(energy_type);

        self.repository.get(&key).ok_or_else(|| {
            debug!("Energy type '{}' not in catalog", key);
            AppError::not_found(ENERGY_NOT_FOUND)
        })
    }

    /// Lists every energy type in catalog definition order.
    pub fn list_all(&self) -> Vec<String> {
        self.repository.list_keys()
    }

    /// Compares the advantages of two energy types, ignoring case.
    ///
    /// Both keys are resolved before any set operation runs. Comparing a type
    /// with itself is allowed and yields no unique advantages.
    ///
    /// # Errors
    ///
    /// Returns a single [`AppError::NotFound`] if either key is missing.
    pub fn compare(&self, type_a: &str, type_b: &str) -> Result<ComparisonResult, AppError> {
        let key_a = normalize(type_a);
        let key_b = normalize(type_b);

        let (Some(record_a), Some(record_b)) =
            (self.repository.get(&key_a), self.repository.get(&key_b))
        else {
            debug!("Comparison '{}' vs '{}' missing an entry", key_a, key_b);
            return Err(AppError::not_found(COMPARISON_NOT_FOUND));
        };

        Ok(ComparisonResult::between(
            key_a, &record_a, key_b, &record_b,
        ))
    }

    /// Number of entries in the catalog.
    pub fn catalog_size(&self) -> usize {
        self.repository.len()
    }
}

fn normalize(energy_type: &str) -> String {
    energy_type.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{RENEWABLE_ENERGY, Uses};
    use crate::domain::repositories::MockCatalogRepository;
    use crate::infrastructure::catalog::StaticCatalog;
    use std::collections::HashSet;

    fn create_test_record(source: &str, advantages: &[&str]) -> EnergyRecord {
        EnergyRecord::new(
            RENEWABLE_ENERGY,
            source,
            format!("{source} energy"),
            advantages.iter().copied(),
            Uses::new(true, true, true, false),
        )
    }

    fn builtin_service() -> EnergyService<StaticCatalog> {
        EnergyService::new(Arc::new(StaticCatalog::builtin().unwrap()))
    }

    fn as_set(items: &[String]) -> HashSet<&str> {
        items.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_lookup_lowercases_key() {
        let mut mock_repo = MockCatalogRepository::new();

        let record = create_test_record("Sunlight", &["Clean"]);
        mock_repo
            .expect_get()
            .withf(|key| key == "solar")
            .times(1)
            .returning(move |_| Some(record.clone()));

        let service = EnergyService::new(Arc::new(mock_repo));

        let result = service.lookup("SoLaR");

        assert!(result.is_ok());
        assert_eq!(result.unwrap().source, "Sunlight");
    }

    #[test]
    fn test_lookup_does_not_trim() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get()
            .withf(|key| key == " solar ")
            .times(1)
            .returning(|_| None);

        let service = EnergyService::new(Arc::new(mock_repo));

        let result = service.lookup(" Solar ");

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_lookup_not_found_message() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo.expect_get().times(1).returning(|_| None);

        let service = EnergyService::new(Arc::new(mock_repo));

        let err = service.lookup("nonexistent").unwrap_err();

        assert_eq!(err.to_string(), ENERGY_NOT_FOUND);
    }

    #[test]
    fn test_list_all_delegates_in_order() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo
            .expect_list_keys()
            .times(1)
            .returning(|| vec!["wind".to_string(), "solar".to_string()]);

        let service = EnergyService::new(Arc::new(mock_repo));

        assert_eq!(service.list_all(), vec!["wind", "solar"]);
    }

    #[test]
    fn test_compare_resolves_both_keys_before_failing() {
        let mut mock_repo = MockCatalogRepository::new();

        let record = create_test_record("Sunlight", &["Clean"]);
        mock_repo
            .expect_get()
            .withf(|key| key == "solar")
            .times(1)
            .returning(move |_| Some(record.clone()));
        mock_repo
            .expect_get()
            .withf(|key| key == "nonexistent")
            .times(1)
            .returning(|_| None);

        let service = EnergyService::new(Arc::new(mock_repo));

        let err = service.compare("Solar", "NONEXISTENT").unwrap_err();

        assert_eq!(err.to_string(), COMPARISON_NOT_FOUND);
    }

    #[test]
    fn test_compare_both_missing_is_one_error() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo.expect_get().times(2).returning(|_| None);

        let service = EnergyService::new(Arc::new(mock_repo));

        let result = service.compare("nope", "nada");

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_compare_normalizes_keys_in_result() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo
            .expect_get()
            .returning(|key| Some(create_test_record(key, &["Shared", key])));

        let service = EnergyService::new(Arc::new(mock_repo));

        let result = service.compare("HYDRO", "Wind").unwrap();

        assert_eq!(result.first, "hydro");
        assert_eq!(result.second, "wind");
        assert_eq!(result.common, vec!["Shared"]);
        assert_eq!(result.unique_to_first, vec!["hydro"]);
        assert_eq!(result.unique_to_second, vec!["wind"]);
    }

    #[test]
    fn test_lookup_every_builtin_key() {
        let service = builtin_service();

        for key in service.list_all() {
            let record = service.lookup(&key).unwrap();
            assert!(!record.advantages.is_empty());
            assert_eq!(record.uses.iter().count(), 4);
        }
    }

    #[test]
    fn test_lookup_case_insensitive_builtin() {
        let service = builtin_service();

        let lower = service.lookup("solar").unwrap();
        assert_eq!(service.lookup("Solar").unwrap(), lower);
        assert_eq!(service.lookup("SOLAR").unwrap(), lower);
    }

    #[test]
    fn test_list_all_has_no_duplicates() {
        let service = builtin_service();
        let keys = service.list_all();
        let unique: HashSet<&String> = keys.iter().collect();

        assert_eq!(unique.len(), keys.len());
        assert_eq!(keys.len(), service.catalog_size());
    }

    #[test]
    fn test_compare_solar_wind_disjoint() {
        let service = builtin_service();

        let result = service.compare("solar", "wind").unwrap();

        assert!(result.common.is_empty());
        assert_eq!(
            as_set(&result.unique_to_first),
            HashSet::from([
                "Clean and sustainable",
                "Reduces electricity bills",
                "Low maintenance costs",
                "Reduces carbon footprint",
            ])
        );
        assert_eq!(
            as_set(&result.unique_to_second),
            HashSet::from([
                "Zero emissions during operation",
                "Highly scalable for large or small installations",
                "Efficient use of land space (e.g., farms)",
                "Low operational costs",
            ])
        );
    }

    #[test]
    fn test_compare_wind_hydro_overlap() {
        let service = builtin_service();

        let result = service.compare("wind", "hydro").unwrap();

        assert_eq!(
            as_set(&result.common),
            HashSet::from(["Zero emissions during operation", "Low operational costs"])
        );
    }

    #[test]
    fn test_compare_self_for_every_key() {
        let service = builtin_service();

        for key in service.list_all() {
            let record = service.lookup(&key).unwrap();
            let result = service.compare(&key, &key).unwrap();

            assert_eq!(as_set(&result.common), as_set(&record.advantages));
            assert!(result.unique_to_first.is_empty());
            assert!(result.unique_to_second.is_empty());
        }
    }

    #[test]
    fn test_compare_is_symmetric() {
        let service = builtin_service();
        let keys = service.list_all();

        for a in &keys {
            for b in &keys {
                let ab = service.compare(a, b).unwrap();
                let ba = service.compare(b, a).unwrap();

                assert_eq!(as_set(&ab.common), as_set(&ba.common));
                assert_eq!(as_set(&ab.unique_to_first), as_set(&ba.unique_to_second));
                assert_eq!(as_set(&ab.unique_to_second), as_set(&ba.unique_to_first));
            }
        }
    }

    #[test]
    fn test_compare_solar_nonexistent() {
        let service = builtin_service();

        let result = service.compare("solar", "nonexistent");

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
