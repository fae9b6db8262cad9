//! Where the finals page comes from, and turning it into a [`Dataset`].

use std::path::PathBuf;

use async_trait::async_trait;
use cupdash_core::{AppConfig, Dataset, Error};

use crate::extract::extract_finals;
use crate::fetch::{FetchClient, FetchConfig, UrlSource};

/// HTML document plus a description of its origin.
#[derive(Debug, Clone)]
pub struct SourcePage {
    /// Final URL or file path.
    pub origin: String,
    pub html: String,
}

/// Stable seam between dataset loading and the transport that produces HTML.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn load(&self) -> Result<SourcePage, Error>;
}

/// Reads a saved copy of the page from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PageSource for FileSource {
    async fn load(&self) -> Result<SourcePage, Error> {
        let html = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::SourceRead(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(path = %self.path.display(), bytes = html.len(), "read source page from file");

        Ok(SourcePage { origin: self.path.display().to_string(), html })
    }
}

/// Pick the page source the configuration asks for.
///
/// `source_file` wins over `source_url` when both are set.
pub fn source_from_config(config: &AppConfig) -> Result<Box<dyn PageSource>, Error> {
    match &config.source_file {
        Some(path) => Ok(Box::new(FileSource::new(path.clone()))),
        None => {
            let client = FetchClient::new(FetchConfig::from(config))?;
            Ok(Box::new(UrlSource::new(client, config.source_url.clone())))
        }
    }
}

/// Load the page once, extract the finals table, and build the dataset.
///
/// # Errors
///
/// Returns `Error::TableNotFound` when no table caption contains `caption`;
/// transport errors from the source are passed through.
pub async fn load_dataset(source: &dyn PageSource, caption: &str) -> Result<Dataset, Error> {
    let page = source.load().await?;
    let table = extract_finals(&page.html, caption)?;

    tracing::info!(
        origin = %page.origin,
        rows = table.records.len(),
        skipped = table.skipped_rows,
        "extracted finals table"
    );

    Ok(Dataset::build(table.headers, table.records, page.origin))
}
