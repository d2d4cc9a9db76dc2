//! Data Transfer Objects for API responses.
//!
//! Catalog records are served as-is from [`crate::domain::entities::EnergyRecord`],
//! whose serialized form is the public record shape. Everything else that
//! crosses the wire is defined here.

pub mod compare;
pub mod health;
pub mod list;
pub mod welcome;
