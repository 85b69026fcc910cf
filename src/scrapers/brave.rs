//! Brave Search results-page scraper.
//!
//! Sends one `GET` to the results page and turns the returned HTML into
//! [`SearchResult`] records. Each hit on the page is a
//! `<div class="snippet fdb">` holding a `<span>` title, an `<a>` link and a
//! `<p>` description whose text may start with a freshness label:
//!
//! ```text
//! <div class="snippet fdb">
//!   <a href="https://www.rust-lang.org/"><span>Rust Programming Language</span></a>
//!   <p>3 days ago - A language empowering everyone</p>
//! </div>
//! ```

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::models::{SearchResult, split_freshness};
use scraper::{ElementRef, Html};
use tracing::{debug, info, instrument, trace};

/// Tag name of a result container.
pub const CONTAINER_TAG: &str = "div";

/// Class tokens a result container must carry; extra tokens are allowed.
pub const CONTAINER_CLASSES: &[&str] = &["snippet", "fdb"];

const TITLE_TAG: &str = "span";
const LINK_TAG: &str = "a";
const DESC_TAG: &str = "p";

/// Query-string parameter carrying the search terms.
const QUERY_PARAM: &str = "q";

/// Fetch the raw results page for `query`.
///
/// # Errors
///
/// - [`SearchError::Network`] if the endpoint cannot be reached, the request
///   times out, or the body cannot be read.
/// - [`SearchError::HttpStatus`] if the response status is not a success.
#[instrument(level = "info", skip_all, fields(endpoint = %config.endpoint))]
pub async fn fetch_results_page(config: &SearchConfig, query: &str) -> Result<String, SearchError> {
    let client = http::build_client(config)?;

    let mut url = config.endpoint.clone();
    url.query_pairs_mut().append_pair(QUERY_PARAM, query);
    debug!(query, "Requesting results page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SearchError::Network(format!("request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::HttpStatus { status });
    }

    let html = response
        .text()
        .await
        .map_err(|e| SearchError::Network(format!("response read failed: {e}")))?;

    info!(%status, bytes = html.len(), "Fetched results page");
    Ok(html)
}

/// Extract at most `limit` results from a results page, in document order.
///
/// A page with no result containers yields an empty vector. Containers past
/// `limit` are never inspected.
///
/// # Errors
///
/// Returns [`SearchError::MalformedResult`] if a container within the limit
/// lacks its title, link, link target, or description. One bad container
/// fails the whole call.
pub fn extract_results(html: &str, limit: usize) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let results = result_containers(&document)
        .enumerate()
        .take(limit)
        .map(|(index, container)| extract_result(index, container))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = results.len(), limit, "Extracted results");
    Ok(results)
}

/// Elements matching [`CONTAINER_TAG`] and carrying every [`CONTAINER_CLASSES`] token.
fn result_containers(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(is_result_container)
}

fn is_result_container(element: &ElementRef<'_>) -> bool {
    let value = element.value();
    value.name() == CONTAINER_TAG
        && CONTAINER_CLASSES
            .iter()
            .all(|required| value.classes().any(|class| class == *required))
}

/// First element below `element` (excluding itself) with the given tag.
fn first_descendant<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == tag)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn extract_result(index: usize, container: ElementRef<'_>) -> Result<SearchResult, SearchError> {
    let malformed = |missing: &'static str| SearchError::MalformedResult { index, missing };

    let title = first_descendant(container, TITLE_TAG)
        .map(text_of)
        .ok_or_else(|| malformed("title <span>"))?;

    let href = first_descendant(container, LINK_TAG)
        .ok_or_else(|| malformed("link <a>"))?
        .value()
        .attr("href")
        .ok_or_else(|| malformed("link href"))?
        .to_string();

    let full_desc = first_descendant(container, DESC_TAG)
        .map(text_of)
        .ok_or_else(|| malformed("description <p>"))?;
    let (time, desc) = split_freshness(&full_desc);

    trace!(index, %href, "Extracted result");
    Ok(SearchResult {
        index,
        title,
        href,
        desc,
        time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(title: &str, href: &str, desc: &str) -> String {
        format!(
            r#"<div class="snippet fdb"><a href="{href}"><span>{title}</span></a><p>{desc}</p></div>"#
        )
    }

    fn page(containers: &[String]) -> String {
        format!(
            "<html><body><main id=\"results\">{}</main></body></html>",
            containers.concat()
        )
    }

    fn numbered_page(count: usize) -> String {
        let containers: Vec<String> = (0..count)
            .map(|i| {
                container(
                    &format!("Title {i}"),
                    &format!("https://example.com/{i}"),
                    &format!("{i} hours ago - Description {i}"),
                )
            })
            .collect();
        page(&containers)
    }

    #[test]
    fn three_containers_under_limit() {
        let results = extract_results(&numbered_page(3), 10).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(
            results.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(results[1].title, "Title 1");
        assert_eq!(results[1].href, "https://example.com/1");
        assert_eq!(results[1].time, "1 hours ago");
        assert_eq!(results[1].desc, "Description 1");
    }

    #[test]
    fn limit_truncates_in_order() {
        let results = extract_results(&numbered_page(15), 5).unwrap();
        assert_eq!(results.len(), 5);
        for (position, result) in results.iter().enumerate() {
            assert_eq!(result.index, position);
            assert_eq!(result.title, format!("Title {position}"));
        }
    }

    #[test]
    fn returns_min_of_containers_and_limit() {
        for containers in [0, 1, 4, 9] {
            for limit in [0, 1, 4, 10] {
                let results = extract_results(&numbered_page(containers), limit).unwrap();
                assert_eq!(results.len(), containers.min(limit));
            }
        }
    }

    #[test]
    fn no_containers_is_empty_not_error() {
        let html = "<html><body><p>No results found for your query.</p></body></html>";
        assert!(extract_results(html, 10).unwrap().is_empty());
        assert!(extract_results("", 10).unwrap().is_empty());
    }

    #[test]
    fn freshness_label_split() {
        let html = page(&[container(
            "Searcher",
            "https://example.com",
            "3 days ago - A tool for searching",
        )]);
        let results = extract_results(&html, 10).unwrap();
        assert_eq!(results[0].time, "3 days ago");
        assert_eq!(results[0].desc, "A tool for searching");
    }

    #[test]
    fn description_without_label() {
        let html = page(&[container(
            "Searcher",
            "https://example.com",
            "  A tool for searching ",
        )]);
        let results = extract_results(&html, 10).unwrap();
        assert_eq!(results[0].time, "");
        assert_eq!(results[0].desc, "A tool for searching");
    }

    #[test]
    fn container_matches_class_superset_only() {
        let html = r#"
            <div class="fdb snippet standalone"><a href="/a"><span>Superset</span></a><p>kept</p></div>
            <div class="snippet"><a href="/b"><span>Partial</span></a><p>skipped</p></div>
            <section class="snippet fdb"><a href="/c"><span>Wrong tag</span></a><p>skipped</p></section>
            <div class="snippet-fdb"><a href="/d"><span>Joined</span></a><p>skipped</p></div>
        "#;
        let results = extract_results(html, 10).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Superset");
    }

    #[test]
    fn title_and_description_collect_nested_text() {
        let html = r#"<div class="snippet fdb">
            <div class="url"><a href="https://www.rust-lang.org/">
                <span> Rust <strong>Programming</strong> Language </span>
            </a></div>
            <p class="snippet-description"><span class="age">Jan 5, 2024</span> - A <b>fast</b> language</p>
        </div>"#;
        let results = extract_results(html, 10).unwrap();
        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].time, "Jan 5, 2024");
        assert_eq!(results[0].desc, "A fast language");
    }

    #[test]
    fn href_taken_verbatim() {
        let html = page(&[container("Relative", "/search?q=a%20b&amp;x=1", "desc")]);
        let results = extract_results(&html, 10).unwrap();
        assert_eq!(results[0].href, "/search?q=a%20b&x=1");
    }

    #[test]
    fn missing_title_aborts() {
        let html = page(&[
            container("Good", "https://example.com", "fine"),
            r#"<div class="snippet fdb"><a href="https://example.com/bad">no span</a><p>x</p></div>"#
                .to_string(),
        ]);
        let err = extract_results(&html, 10).unwrap_err();
        assert!(matches!(
            err,
            SearchError::MalformedResult {
                index: 1,
                missing: "title <span>"
            }
        ));
    }

    #[test]
    fn missing_link_and_description_abort() {
        let no_link = r#"<div class="snippet fdb"><span>T</span><p>x</p></div>"#;
        assert!(matches!(
            extract_results(no_link, 10).unwrap_err(),
            SearchError::MalformedResult { index: 0, missing: "link <a>" }
        ));

        let no_href = r#"<div class="snippet fdb"><a><span>T</span></a><p>x</p></div>"#;
        assert!(matches!(
            extract_results(no_href, 10).unwrap_err(),
            SearchError::MalformedResult { index: 0, missing: "link href" }
        ));

        let no_desc = r#"<div class="snippet fdb"><a href="/"><span>T</span></a></div>"#;
        assert!(matches!(
            extract_results(no_desc, 10).unwrap_err(),
            SearchError::MalformedResult { index: 0, missing: "description <p>" }
        ));
    }

    #[test]
    fn malformed_container_past_limit_is_ignored() {
        let html = page(&[
            container("First", "https://example.com/1", "one"),
            r#"<div class="snippet fdb"><p>broken</p></div>"#.to_string(),
        ]);
        let results = extract_results(&html, 1).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "First");
    }

    #[test]
    fn extraction_is_idempotent() {
        let html = numbered_page(7);
        assert_eq!(
            extract_results(&html, 4).unwrap(),
            extract_results(&html, 4).unwrap()
        );
    }
}
