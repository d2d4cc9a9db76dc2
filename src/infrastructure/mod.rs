//! Infrastructure layer implementing the domain repository contract.
//!
//! # Modules
//!
//! - [`catalog`] - Immutable in-memory catalog loaded at startup

pub mod catalog;
