//! Repository trait definitions for the domain layer.
//!
//! The catalog is the only data source. Its contract lives here and the
//! concrete implementation lives in `crate::infrastructure::catalog`.
//!
//! # Testing
//!
//! A mock implementation is auto-generated via `mockall` for service tests.

pub mod catalog_repository;

pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
