//! Application layer services implementing the catalog queries.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the command-line front-end.
//!
//! # Available Services
//!
//! - [`services::energy_service::EnergyService`] - Lookup, listing, and comparison

pub mod services;
