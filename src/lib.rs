//! # Energy Catalog
//!
//! A small read-only information service exposing a fixed catalog of
//! renewable energy sources over HTTP, with a comparison view of the
//! advantages two sources share and do not share.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Energy records, comparison, and the catalog trait
//! - **Application Layer** ([`application`]) - Lookup, listing, and comparison queries
//! - **Infrastructure Layer** ([`infrastructure`]) - The immutable built-in catalog
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service on 0.0.0.0:8000
//! cargo run
//!
//! # Query it
//! curl http://localhost:8000/compare/solar/wind
//!
//! # Or use the command-line front-end
//! cargo run --bin catalog -- compare solar wind
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::EnergyService;
    pub use crate::domain::entities::{ComparisonResult, EnergyRecord, Uses};
    pub use crate::domain::repositories::CatalogRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::catalog::{CatalogError, StaticCatalog};
    pub use crate::state::AppState;
}
