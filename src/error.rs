//! Error types for EC2 inventory enumeration

use std::time::Duration;
use thiserror::Error;

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Remote(#[from] RemoteQueryError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Failures reported by the remote inventory API.
///
/// These are surfaced to callers untouched; nothing in this crate retries them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteQueryError {
    #[error("Authentication failed. Check the configured credentials.")]
    Unauthorized,

    #[error("Access denied for {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request throttled. Retry after {0:?}")]
    Throttled(Duration),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Page delivery that breaks the pagination contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("{operation}: page {page} delivered after the last page was signalled")]
    PageAfterLastPage { operation: &'static str, page: usize },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
