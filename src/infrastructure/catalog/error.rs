//! Errors raised while building a catalog.

use thiserror::Error;

/// Errors that can occur while loading or validating catalog entries.
///
/// These only surface at startup (or from the `catalog validate` command);
/// once a catalog is built it cannot fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog key must not be empty")]
    EmptyKey,

    #[error("Catalog key '{0}' must be lowercase")]
    NotLowercase(String),

    #[error("Duplicate catalog key '{0}'")]
    DuplicateKey(String),

    #[error("Catalog entry '{0}' has no advantages")]
    NoAdvantages(String),
}
