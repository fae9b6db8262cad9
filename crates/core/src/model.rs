//! Finals data model.
//!
//! The dataset is built once from the parsed source page and then only read.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::count_wins;
use crate::normalize::normalize_records;

/// One World Cup final: year label, winner and runner-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FinalRecord {
    pub year: String,
    pub winner: String,
    pub runner_up: String,
}

impl FinalRecord {
    pub fn new(year: impl Into<String>, winner: impl Into<String>, runner_up: impl Into<String>) -> Self {
        Self { year: year.into(), winner: winner.into(), runner_up: runner_up.into() }
    }
}

/// Number of finals a country has won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CountryWinCount {
    pub country: String,
    pub wins: u32,
}

/// Immutable finals table plus its derived win counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Header cells of the source table, as found.
    pub headers: Vec<String>,
    /// Normalized records in source order.
    pub records: Vec<FinalRecord>,
    /// Wins per country, computed from `records`.
    pub win_counts: Vec<CountryWinCount>,
    /// Where the HTML came from (URL or file path).
    pub source: String,
    /// RFC 3339 timestamp of when the dataset was built.
    pub loaded_at: String,
}

impl Dataset {
    /// Build the dataset from raw extracted records.
    ///
    /// Applies name normalization before aggregating, so merged names count together.
    pub fn build(headers: Vec<String>, raw: Vec<FinalRecord>, source: impl Into<String>) -> Self {
        Self::build_at(headers, raw, source, Utc::now())
    }

    fn build_at(headers: Vec<String>, raw: Vec<FinalRecord>, source: impl Into<String>, at: DateTime<Utc>) -> Self {
        let records = normalize_records(raw);
        let win_counts = count_wins(&records);

        tracing::debug!(records = records.len(), countries = win_counts.len(), "built finals dataset");

        Self {
            headers,
            records,
            win_counts,
            source: source.into(),
            loaded_at: at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        }
    }

    /// First record whose year label equals `year`.
    pub fn final_for_year(&self, year: &str) -> Option<&FinalRecord> {
        self.records.iter().find(|r| r.year == year)
    }

    /// Number of records won by `country`.
    pub fn wins_for(&self, country: &str) -> u32 {
        self.records.iter().filter(|r| r.winner == country).count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::build(
            vec!["Year".into(), "Winners".into()],
            vec![
                FinalRecord::new("1954", "West Germany", "Hungary"),
                FinalRecord::new("1958", "Brazil", "Sweden"),
                FinalRecord::new("1974", "West Germany", "Netherlands"),
                FinalRecord::new("2014", "Germany", "Argentina"),
            ],
            "fixture",
        )
    }

    #[test]
    fn test_build_normalizes_before_counting() {
        let ds = sample();
        assert_eq!(ds.records[0].winner, "Germany");
        assert_eq!(ds.wins_for("Germany"), 3);
        assert_eq!(ds.wins_for("West Germany"), 0);
        assert_eq!(ds.win_counts[0], CountryWinCount { country: "Germany".into(), wins: 3 });
    }

    #[test]
    fn test_final_for_year() {
        let ds = sample();
        let rec = ds.final_for_year("1958").unwrap();
        assert_eq!(rec.winner, "Brazil");
        assert_eq!(rec.runner_up, "Sweden");
        assert!(ds.final_for_year("1930").is_none());
    }

    #[test]
    fn test_loaded_at_format() {
        let at = DateTime::parse_from_rfc3339("2026-06-11T18:00:00Z").unwrap().with_timezone(&Utc);
        let ds = Dataset::build_at(Vec::new(), Vec::new(), "fixture", at);
        assert_eq!(ds.loaded_at, "2026-06-11T18:00:00Z");
        assert!(ds.is_empty());
        assert!(ds.win_counts.is_empty());
    }
}
