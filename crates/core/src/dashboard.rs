//! Dashboard lookups.
//!
//! Every front end (HTTP page, MCP tools, CLI) answers the same three questions
//! against the immutable [`Dataset`]: the win map, how often a country won, and
//! who played a given final. All functions here are pure reads.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::model::Dataset;

pub const DASHBOARD_TITLE: &str = "FIFA Soccer World Cup Dashboard";
pub const MAP_TITLE: &str = "World Cup Wins by Country";
pub const COUNTRY_PLACEHOLDER: &str = "Select World Cup winner";
pub const YEAR_PLACEHOLDER: &str = "Select World Cup year";

/// Dropdown contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DropdownOptions {
    /// Distinct winners, sorted.
    pub countries: Vec<String>,
    /// Distinct year labels, sorted.
    pub years: Vec<String>,
}

/// A single sentence rendered under a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextOutput {
    pub text: String,
}

impl From<String> for TextOutput {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// Distinct winners in lexical order.
pub fn country_options(dataset: &Dataset) -> Vec<String> {
    let set: BTreeSet<&str> = dataset.records.iter().map(|r| r.winner.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Distinct year labels in lexical order.
pub fn year_options(dataset: &Dataset) -> Vec<String> {
    let set: BTreeSet<&str> = dataset.records.iter().map(|r| r.year.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

pub fn dropdown_options(dataset: &Dataset) -> DropdownOptions {
    DropdownOptions { countries: country_options(dataset), years: year_options(dataset) }
}

/// Plotly choropleth of wins by country.
///
/// The selected country is accepted for symmetry with the other callbacks but
/// does not change the figure.
pub fn win_map_figure(dataset: &Dataset, _selected_country: Option<&str>) -> Value {
    let countries: Vec<&str> = dataset.win_counts.iter().map(|c| c.country.as_str()).collect();
    let wins: Vec<u32> = dataset.win_counts.iter().map(|c| c.wins).collect();

    json!({
        "data": [{
            "type": "choropleth",
            "locations": countries,
            "locationmode": "country names",
            "z": wins,
            "hovertext": countries,
            "colorscale": "Blues",
            "reversescale": true,
            "colorbar": { "title": { "text": "Wins" } },
        }],
        "layout": {
            "title": { "text": MAP_TITLE },
            "geo": { "showframe": false },
            "margin": { "l": 0, "r": 0, "t": 48, "b": 0 },
        },
    })
}

/// Sentence describing how many finals `selected_country` has won.
///
/// Empty when nothing is selected.
pub fn country_wins_text(dataset: &Dataset, selected_country: Option<&str>) -> String {
    match selected_country.filter(|c| !c.is_empty()) {
        Some(country) => {
            let wins = dataset.wins_for(country);
            format!("{country} has won the World Cup {wins} time(s).")
        }
        None => String::new(),
    }
}

/// Sentence describing the final of `selected_year`.
///
/// Empty when nothing is selected or the year has no final.
pub fn final_result_text(dataset: &Dataset, selected_year: Option<&str>) -> String {
    selected_year
        .filter(|y| !y.is_empty())
        .and_then(|year| dataset.final_for_year(year))
        .map(|r| format!("{} -> Winner = {}, Runner-up = {}", r.year, r.winner, r.runner_up))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FinalRecord;

    fn dataset() -> Dataset {
        Dataset::build(
            Vec::new(),
            vec![
                FinalRecord::new("1934", "Italy", "Czechoslovakia"),
                FinalRecord::new("1930", "Uruguay", "Argentina"),
                FinalRecord::new("1938", "Italy", "Hungary"),
                FinalRecord::new("1954", "West Germany", "Hungary"),
            ],
            "fixture",
        )
    }

    #[test]
    fn test_dropdown_options_sorted_unique() {
        let opts = dropdown_options(&dataset());
        assert_eq!(opts.countries, vec!["Germany", "Italy", "Uruguay"]);
        assert_eq!(opts.years, vec!["1930", "1934", "1938", "1954"]);
    }

    #[test]
    fn test_country_wins_text() {
        let ds = dataset();
        assert_eq!(country_wins_text(&ds, Some("Italy")), "Italy has won the World Cup 2 time(s).");
        assert_eq!(country_wins_text(&ds, Some("Germany")), "Germany has won the World Cup 1 time(s).");
    }

    #[test]
    fn test_country_wins_text_unknown_country() {
        assert_eq!(country_wins_text(&dataset(), Some("Wales")), "Wales has won the World Cup 0 time(s).");
    }

    #[test]
    fn test_country_wins_text_no_selection() {
        let ds = dataset();
        assert_eq!(country_wins_text(&ds, None), "");
        assert_eq!(country_wins_text(&ds, Some("")), "");
    }

    #[test]
    fn test_final_result_text() {
        assert_eq!(
            final_result_text(&dataset(), Some("1930")),
            "1930 -> Winner = Uruguay, Runner-up = Argentina"
        );
    }

    #[test]
    fn test_final_result_text_uses_selected_year() {
        assert_eq!(
            final_result_text(&dataset(), Some("1954")),
            "1954 -> Winner = Germany, Runner-up = Hungary"
        );
    }

    #[test]
    fn test_final_result_text_missing() {
        let ds = dataset();
        assert_eq!(final_result_text(&ds, Some("2030")), "");
        assert_eq!(final_result_text(&ds, None), "");
    }

    #[test]
    fn test_win_map_figure() {
        let fig = win_map_figure(&dataset(), None);
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locationmode"], "country names");
        assert_eq!(trace["locations"][0], "Italy");
        assert_eq!(trace["z"][0], 2);
        assert_eq!(trace["colorscale"], "Blues");
        assert_eq!(fig["layout"]["title"]["text"], MAP_TITLE);
    }

    #[test]
    fn test_win_map_figure_ignores_selection() {
        let ds = dataset();
        assert_eq!(win_map_figure(&ds, None), win_map_figure(&ds, Some("Italy")));
    }
}
