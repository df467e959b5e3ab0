//! HTML parser for extracting links and visible text
//!
//! Links are returned raw (trimmed, but neither resolved nor validated); the
//! crawler runs them through the URL sanitizer against the page they were
//! found on.

use scraper::{Html, Node, Selector};
use std::collections::HashSet;

/// Elements whose text content is never visible on the page
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracts the set of hyperlink targets from an HTML document
///
/// Every `<a href="...">` value is collected with surrounding whitespace
/// removed. Empty values are skipped. Duplicates collapse because the result
/// is a set; order is not significant.
///
/// # Example
///
/// ```
/// use site_indexer::crawler::extract_links;
///
/// let links = extract_links(r#"<a href=" /page ">A</a><a href="/page">B</a>"#);
/// assert_eq!(links.len(), 1);
/// assert!(links.contains("/page"));
/// ```
pub fn extract_links(html: &str) -> HashSet<String> {
    let document = Html::parse_document(html);
    let mut links = HashSet::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                let href = href.trim();
                if !href.is_empty() {
                    links.insert(href.to_string());
                }
            }
        }
    }

    links
}

/// Extracts the visible text of an HTML document
///
/// Text nodes are joined with a single space, so adjacent tags never glue
/// words together: `<div>Some<strong>Text</strong></div>` becomes
/// `Some Text`. Text inside `script`, `style`, `noscript` and `template`
/// is dropped. Malformed markup is tolerated.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut pieces: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map(|element| HIDDEN_ELEMENTS.contains(&element.name()))
                .unwrap_or(false)
        });

        if !hidden {
            pieces.push(&**text);
        }
    }

    pieces.join(" ")
}
