//! Unified error types for cupdash.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for loading and serving the finals dataset.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No table caption contained the expected substring.
    #[error("TABLE_NOT_FOUND: no table caption contains {0:?}")]
    TableNotFound(String),

    /// Invalid input parameters (e.g., empty year).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Fetch response too large.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),

    /// HTTP error response or transport failure.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Local HTML source could not be read.
    #[error("SOURCE_READ: {0}")]
    SourceRead(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::TableNotFound(_) => (-32000, err.to_string()),
            Error::InvalidUrl(msg) => (-32003, msg.clone()),
            Error::FetchTooLarge(msg) => (-32007, msg.clone()),
            Error::HttpError(msg) => (-32008, msg.clone()),
            Error::SourceRead(msg) => (-32013, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
