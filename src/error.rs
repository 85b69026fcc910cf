//! Error types for brave_search.
//!
//! Every variant is terminal for the invocation: nothing is retried, and the
//! binary turns any of them into a one-line message and a non-zero exit.

use reqwest::StatusCode;

/// Errors that can occur while searching, extracting, or printing results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The endpoint could not be reached or the body could not be read
    /// (DNS, connection refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status code.
    #[error("HTTP status error: {status}")]
    HttpStatus { status: StatusCode },

    /// A matched result container lacks an expected sub-element.
    #[error("malformed result #{index}: missing {missing}")]
    MalformedResult { index: usize, missing: &'static str },

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Writing rendered output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for brave_search results.
pub type Result<T> = std::result::Result<T, SearchError>;
