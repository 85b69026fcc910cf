//! Data model for one extracted search hit.
//!
//! A [`SearchResult`] lives for one invocation: built by the extractor,
//! consumed by the presenter, then dropped.

/// A single search result scraped from the results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Zero-based position among all result containers on the page.
    pub index: usize,
    /// Display title, trimmed.
    pub title: String,
    /// Link target exactly as it appears in the markup.
    pub href: String,
    /// Snippet text with any freshness label removed, trimmed.
    pub desc: String,
    /// Freshness label such as `"3 days ago"`; empty when absent.
    pub time: String,
}

/// Split a snippet into its freshness label and description body.
///
/// Splits on the first `-`; the left side is the label, the right side the
/// body, both trimmed. Without a `-` the label is empty and the body is the
/// whole text. The split knows nothing about dates, so a hyphen inside an
/// undated snippet lands part of it in the label.
///
/// ```
/// use brave_search::models::split_freshness;
///
/// assert_eq!(
///     split_freshness("3 days ago - A tool for searching"),
///     ("3 days ago".to_string(), "A tool for searching".to_string())
/// );
/// assert_eq!(
///     split_freshness("A tool for searching"),
///     (String::new(), "A tool for searching".to_string())
/// );
/// ```
pub fn split_freshness(full_desc: &str) -> (String, String) {
    match full_desc.split_once('-') {
        Some((time, desc)) => (time.trim().to_string(), desc.trim().to_string()),
        None => (String::new(), full_desc.trim().to_string()),
    }
}
