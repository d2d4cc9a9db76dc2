//! Domain layer containing catalog entities and the repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - Energy records and the derived comparison
//! - [`repositories`] - Catalog access trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The repository trait is implemented by the infrastructure layer
//! - Query logic is exposed through [`crate::application::services`]

pub mod entities;
pub mod repositories;
