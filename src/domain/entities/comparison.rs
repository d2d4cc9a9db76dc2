//! Derived comparison between two catalog entries.

use indexmap::IndexSet;

use super::energy::EnergyRecord;

/// Advantages shared by and unique to two energy sources.
///
/// Computed fresh for every request and never stored. The three collections
/// have set semantics: duplicates collapse, and each keeps the first-occurrence
/// order of the advantage list it is drawn from (`common` and `unique_to_first`
/// follow the first record, `unique_to_second` follows the second).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub first: String,
    pub second: String,
    pub common: Vec<String>,
    pub unique_to_first: Vec<String>,
    pub unique_to_second: Vec<String>,
}

impl ComparisonResult {
    /// Compares the advantages of two records identified by their normalized keys.
    pub fn between(
        first: impl Into<String>,
        first_record: &EnergyRecord,
        second: impl Into<String>,
        second_record: &EnergyRecord,
    ) -> Self {
        let a = advantage_set(first_record);
        let b = advantage_set(second_record);

        Self {
            first: first.into(),
            second: second.into(),
            common: to_owned(a.intersection(&b)),
            unique_to_first: to_owned(a.difference(&b)),
            unique_to_second: to_owned(b.difference(&a)),
        }
    }
}

fn advantage_set(record: &EnergyRecord) -> IndexSet<&str> {
    record.advantages.iter().map(String::as_str).collect()
}

fn to_owned<'a, 'b: 'a>(items: impl Iterator<Item = &'a &'b str>) -> Vec<String> {
    items.map(|s| (*s).to_string()).collect()
}
