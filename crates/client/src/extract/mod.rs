//! Finals table extraction.
//!
//! ### Table lookup
//! - Candidates are `table.wikitable` elements in document order.
//! - The first one whose `<caption>` text contains the configured substring wins.
//!
//! ### Row policy
//! - Row 0 is the header row; its `<th>` texts become the headers.
//! - Every later row is read as the trimmed text of all `<th>`/`<td>` cells.
//! - Rows with at least [`MIN_CELLS`] cells yield `(cell 0, cell 1, cell 3)`.
//! - Shorter rows (spanned cells, footers, notes) are skipped without error.
//!
//! Values are returned exactly as found; name normalization happens when the
//! dataset is built.

mod cells;

pub use cells::{cell_text, row_cells};

use cupdash_core::{Error, FinalRecord};
use scraper::{ElementRef, Html, Selector};

/// Rows shorter than this are not finals.
pub const MIN_CELLS: usize = 7;

const YEAR_CELL: usize = 0;
const WINNER_CELL: usize = 1;
const RUNNER_UP_CELL: usize = 3;

/// Raw contents of the finals table before normalization.
#[derive(Debug, Clone, Default)]
pub struct ExtractedTable {
    pub headers: Vec<String>,
    pub records: Vec<FinalRecord>,
    /// Data rows dropped for having fewer than [`MIN_CELLS`] cells.
    pub skipped_rows: usize,
}

/// Find the first wikitable whose caption contains `caption`.
pub fn find_finals_table<'a>(document: &'a Html, caption: &str) -> Option<ElementRef<'a>> {
    let table_selector = Selector::parse("table.wikitable").expect("invalid selector");
    let caption_selector = Selector::parse("caption").expect("invalid selector");

    document.select(&table_selector).find(|table| {
        table
            .select(&caption_selector)
            .next()
            .is_some_and(|c| c.text().collect::<String>().contains(caption))
    })
}

/// Turn one data row's cells into a record, if it is long enough.
pub fn record_from_cells(cells: &[String]) -> Option<FinalRecord> {
    if cells.len() < MIN_CELLS {
        return None;
    }

    Some(FinalRecord::new(
        cells[YEAR_CELL].clone(),
        cells[WINNER_CELL].clone(),
        cells[RUNNER_UP_CELL].clone(),
    ))
}

/// Extract the finals table from an HTML document.
///
/// # Errors
///
/// Returns `Error::TableNotFound` if no wikitable caption contains `caption`.
pub fn extract_finals(html: &str, caption: &str) -> Result<ExtractedTable, Error> {
    let document = Html::parse_document(html);
    let table = find_finals_table(&document, caption).ok_or_else(|| Error::TableNotFound(caption.to_string()))?;

    let row_selector = Selector::parse("tr").expect("invalid selector");
    let header_selector = Selector::parse("th").expect("invalid selector");

    let mut rows = table.select(&row_selector);
    let headers: Vec<String> = rows
        .next()
        .map(|header_row| header_row.select(&header_selector).map(|th| cell_text(&th)).collect())
        .unwrap_or_default();

    let mut out = ExtractedTable { headers, ..Default::default() };
    for row in rows {
        match record_from_cells(&row_cells(&row)) {
            Some(record) => out.records.push(record),
            None => out.skipped_rows += 1,
        }
    }

    tracing::debug!(records = out.records.len(), skipped = out.skipped_rows, "parsed finals rows");

    Ok(out)
}
