//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod compare;
pub mod energy;
pub mod fallback;
pub mod health;
pub mod list;
pub mod welcome;

pub use compare::compare_handler;
pub use energy::energy_handler;
pub use fallback::{fallback_handler, method_not_allowed_handler};
pub use health::health_handler;
pub use list::list_handler;
pub use welcome::welcome_handler;
