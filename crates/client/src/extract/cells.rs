//! Cell text helpers.

use scraper::{ElementRef, Selector};

/// All text under `element`, concatenated and trimmed.
pub fn cell_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of every `th` and `td` in a row, in document order.
pub fn row_cells(row: &ElementRef<'_>) -> Vec<String> {
    let cell_selector = Selector::parse("th, td").expect("invalid selector");
    row.select(&cell_selector).map(|cell| cell_text(&cell)).collect()
}
