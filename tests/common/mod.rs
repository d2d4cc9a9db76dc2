#![allow(dead_code)]

use axum_test::TestServer;
use energy_catalog::api::routes::public_routes;
use energy_catalog::infrastructure::catalog::StaticCatalog;
use energy_catalog::state::AppState;
use std::sync::Arc;

pub const SOLAR_ADVANTAGES: [&str; 4] = [
    "Clean and sustainable",
    "Reduces electricity bills",
    "Low maintenance costs",
    "Reduces carbon footprint",
];

pub const WIND_ADVANTAGES: [&str; 4] = [
    "Zero emissions during operation",
    "Highly scalable for large or small installations",
    "Efficient use of land space (e.g., farms)",
    "Low operational costs",
];

pub fn create_test_state() -> AppState {
    let catalog = StaticCatalog::builtin().unwrap();
    AppState::new(Arc::new(catalog))
}

pub fn make_server() -> TestServer {
    let app = public_routes().with_state(create_test_state());

    TestServer::new(app).unwrap()
}

/// Reads a JSON array of strings into a sorted vector for order-free comparison.
pub fn sorted_strings(value: &serde_json::Value) -> Vec<String> {
    let mut items: Vec<String> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    items.sort();
    items
}

pub fn sorted(items: &[&str]) -> Vec<String> {
    let mut items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    items.sort();
    items
}
