//! Search engine scrapers.
//!
//! Each scraper exposes the same two-step shape:
//!
//! 1. **Fetching**: `fetch_results_page(config, query)` issues one request and
//!    returns the raw HTML body
//! 2. **Extracting**: `extract_results(html, limit)` parses the body into
//!    [`SearchResult`](crate::models::SearchResult) records
//!
//! Extraction is a pure function of its input so it can be tested against
//! canned HTML without any network access.

pub mod brave;
