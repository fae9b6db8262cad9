//! Country name normalization.
//!
//! Historical names are merged into their successor so that aggregation counts
//! them together. Matching is exact string equality on the whole cell.

use crate::model::FinalRecord;

/// Legacy name to current name substitutions.
pub const NAME_SUBSTITUTIONS: &[(&str, &str)] = &[("West Germany", "Germany")];

/// Map a single country name through the substitution table.
pub fn normalize_country(name: &str) -> &str {
    NAME_SUBSTITUTIONS
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map(|(_, current)| *current)
        .unwrap_or(name)
}

/// Apply the substitutions to every winner and runner-up value.
///
/// Years are left untouched.
pub fn normalize_records(records: Vec<FinalRecord>) -> Vec<FinalRecord> {
    records
        .into_iter()
        .map(|r| FinalRecord {
            winner: normalize_country(&r.winner).to_string(),
            runner_up: normalize_country(&r.runner_up).to_string(),
            year: r.year,
        })
        .collect()
}
