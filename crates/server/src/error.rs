//! Structured errors for the dashboard HTTP surface.

use hyper::{Method, StatusCode};

/// Request-level failures that map to an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// No route matches the path.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// Only GET is served.
    #[error("METHOD_NOT_ALLOWED: {0}")]
    MethodNotAllowed(Method),

    /// Response body could not be serialized.
    #[error("INTERNAL: {0}")]
    Internal(String),
}

impl RouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::NotFound(_) => StatusCode::NOT_FOUND,
            RouteError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            RouteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        RouteError::Internal(err.to_string())
    }
}
