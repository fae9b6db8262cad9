//! Client code for cupdash.
//!
//! This crate provides the one-shot source load (HTTP fetch or local file),
//! finals table extraction, and dataset construction shared by the server and CLI.

pub mod extract;
pub mod fetch;
pub mod source;

pub use extract::{ExtractedTable, MIN_CELLS, extract_finals, find_finals_table};
pub use fetch::{FetchClient, FetchConfig, FetchResponse, UrlSource};
pub use source::{FileSource, PageSource, SourcePage, load_dataset, source_from_config};
