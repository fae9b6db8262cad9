//! Source URL canonicalization.

/// Error type for URL canonicalization failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Canonicalize the configured source URL before fetching.
///
/// Whitespace is trimmed, a missing scheme defaults to `https`, the host is
/// lowercased and any fragment is dropped. Path and query are kept as written,
/// since wiki page titles are case sensitive.
pub fn canonicalize(input: &str) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let with_scheme = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };
    let mut parsed = url::Url::parse(&with_scheme).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UrlError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    let host = parsed
        .host_str()
        .map(str::to_lowercase)
        .ok_or_else(|| UrlError::MissingHost(trimmed.to_string()))?;
    parsed.set_host(Some(&host)).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
    parsed.set_fragment(None);

    Ok(parsed)
}
