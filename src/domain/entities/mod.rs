//! Core domain entities representing the catalog data model.
//!
//! Entities are plain data structures. The only behavior living here is the
//! advantage comparison, which is a pure function of two records.
//!
//! # Entity Types
//!
//! - [`EnergyRecord`] - A catalog entry describing one energy source
//! - [`Uses`] - Applicability of a source to the fixed capabilities
//! - [`ComparisonResult`] - Shared and unique advantages of two entries

pub mod comparison;
pub mod energy;

pub use comparison::ComparisonResult;
pub use energy::{EnergyRecord, RENEWABLE_ENERGY, Uses};
