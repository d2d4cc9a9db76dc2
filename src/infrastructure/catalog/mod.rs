//! Catalog storage backing the query service.
//!
//! Provides [`StaticCatalog`], the [`crate::domain::repositories::CatalogRepository`]
//! implementation built from the dataset bundled at `data/catalog.json`.

mod error;
mod static_catalog;

pub use error::CatalogError;
pub use static_catalog::StaticCatalog;
