//! Business logic services for the application layer.

pub mod energy_service;

pub use energy_service::EnergyService;
