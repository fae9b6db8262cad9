//! Win aggregation over finals records.

use std::collections::HashMap;

use crate::model::{CountryWinCount, FinalRecord};

/// Count finals won per country.
///
/// Countries without a win are absent. The result is ordered by wins descending,
/// then country name ascending.
pub fn count_wins(records: &[FinalRecord]) -> Vec<CountryWinCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for record in records {
        *counts.entry(record.winner.as_str()).or_default() += 1;
    }

    let mut out: Vec<CountryWinCount> = counts
        .into_iter()
        .map(|(country, wins)| CountryWinCount { country: country.to_string(), wins })
        .collect();

    out.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.country.cmp(&b.country)));
    out
}
