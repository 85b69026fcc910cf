//! HTTP client construction for the results-page request.

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Identifies this client to the endpoint, like any HTTP library's default.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for a single search request.
///
/// The client has a total timeout from `config`, follows a bounded number of
/// redirects, and keeps no cookies between requests.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))
}
