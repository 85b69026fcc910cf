//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] is built from the parsed [`Cli`] in the binary; tests
//! construct it directly to point the endpoint at a local mock server.

use crate::cli::Cli;
use crate::error::SearchError;
use std::time::Duration;
use url::Url;

/// Brave's HTML results page.
pub const DEFAULT_ENDPOINT: &str = "https://search.brave.com/search";

/// Upper bound on the single request, connect through body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of results extracted when no `--limit` is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Configuration for one search invocation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Results page the query is sent to.
    pub endpoint: Url,
    /// Total request timeout.
    pub timeout: Duration,
    /// Maximum number of results to extract.
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL"),
            timeout: DEFAULT_TIMEOUT,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Map parsed command-line arguments onto a config.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            limit: cli.limit,
            ..Default::default()
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout` must be non-zero
    /// - `endpoint` must use `http` or `https`
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout.is_zero() {
            return Err(SearchError::Config("timeout must be greater than 0".into()));
        }
        match self.endpoint.scheme() {
            "http" | "https" => Ok(()),
            other => Err(SearchError::Config(format!(
                "endpoint scheme must be http or https, got {other}"
            ))),
        }
    }
}
