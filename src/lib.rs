//! # brave_search
//!
//! Search Brave from the command line. One query goes out as a single HTTP
//! `GET`; the results page comes back as HTML and is reduced to a list of
//! [`SearchResult`] records (title, link, description, optional freshness
//! label), which are printed as styled console blocks or CSV.
//!
//! ## Pipeline
//!
//! 1. **Fetching**: [`scrapers::brave::fetch_results_page`] sends the query
//! 2. **Extracting**: [`scrapers::brave::extract_results`] parses the HTML
//! 3. **Rendering**: [`outputs::render`] writes console or CSV output
//!
//! Nothing is retried, paged, cached, or run concurrently.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod outputs;
pub mod scrapers;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use models::SearchResult;
pub use outputs::OutputMode;

use tracing::instrument;

/// Fetch the results page for `query` and extract up to `config.limit` results.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid config, and otherwise
/// whatever [`scrapers::brave::fetch_results_page`] or
/// [`scrapers::brave::extract_results`] return.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> brave_search::Result<()> {
/// let config = brave_search::SearchConfig::default();
/// let results = brave_search::search("rust programming", &config).await?;
/// for result in &results {
///     println!("{}: {}", result.title, result.href);
/// }
/// # Ok(())
/// # }
/// ```
#[instrument(level = "info", skip(config), fields(limit = config.limit))]
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
    config.validate()?;
    let html = scrapers::brave::fetch_results_page(config, query).await?;
    scrapers::brave::extract_results(&html, config.limit)
}
