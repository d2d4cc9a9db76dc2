//! DTOs for the comparison endpoint.

use serde::Serialize;

use crate::domain::entities::ComparisonResult;

/// Shared and unique advantages of two energy types.
///
/// `energy_1` and `energy_2` are the lowercased keys that were compared.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub energy_1: String,
    pub energy_2: String,
    pub common_advantages: Vec<String>,
    pub unique_to_energy_1: Vec<String>,
    pub unique_to_energy_2: Vec<String>,
}

impl From<ComparisonResult> for CompareResponse {
    fn from(result: ComparisonResult) -> Self {
        Self {
            energy_1: result.first,
            energy_2: result.second,
            common_advantages: result.common,
            unique_to_energy_1: result.unique_to_first,
            unique_to_energy_2: result.unique_to_second,
        }
    }
}
