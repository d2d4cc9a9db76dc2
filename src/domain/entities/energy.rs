//! Domain entity describing a single renewable energy source.

use serde::{Deserialize, Serialize};

/// Classification label shared by every entry of the built-in catalog.
pub const RENEWABLE_ENERGY: &str = "Renewable Energy";

/// A catalog entry describing one energy source.
///
/// `advantages` keeps the order in which the entry was defined so the detail
/// endpoint renders it consistently. Comparisons treat it as a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub description: String,
    pub advantages: Vec<String>,
    pub uses: Uses,
}

impl EnergyRecord {
    /// Creates a new EnergyRecord instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let record = EnergyRecord::new(
    ///     RENEWABLE_ENERGY,
    ///     "Sunlight",
    ///     "Solar energy is energy from the sun.",
    ///     ["Clean and sustainable"],
    ///     Uses::new(true, true, true, false),
    /// );
    /// ```
    pub fn new<I, S>(
        kind: impl Into<String>,
        source: impl Into<String>,
        description: impl Into<String>,
        advantages: I,
        uses: Uses,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: kind.into(),
            source: source.into(),
            description: description.into(),
            advantages: advantages.into_iter().map(Into::into).collect(),
            uses,
        }
    }
}

/// Applicability of an energy source to each fixed capability.
///
/// Deserialization rejects unknown capability names and requires all four,
/// so a serialized record always carries exactly these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Uses {
    pub electricity: bool,
    pub heating: bool,
    pub lighting: bool,
    pub transportation: bool,
}

impl Uses {
    /// Names of the capabilities, in serialization order.
    pub const CAPABILITIES: [&'static str; 4] =
        ["electricity", "heating", "lighting", "transportation"];

    pub fn new(electricity: bool, heating: bool, lighting: bool, transportation: bool) -> Self {
        Self {
            electricity,
            heating,
            lighting,
            transportation,
        }
    }

    /// Returns `(capability, applicable)` pairs in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        Self::CAPABILITIES.into_iter().zip([
            self.electricity,
            self.heating,
            self.lighting,
            self.transportation,
        ])
    }
}
