//! Selector-based extraction from rendered HTML
//!
//! For each requested tag the document is queried in document order and one
//! string is extracted per element: the `src` attribute (with a `data-src`
//! lazy-load fallback) for images, trimmed text content for everything else.
//! Empty strings are dropped. Every requested tag keeps an entry in the
//! result, empty or not; completeness is judged by the responder, not here.

use crate::error::{ExtractionError, Result};
use scraper::{Html, Selector};
use tracing::{debug, instrument};

/// Tags extracted when a request does not name any
pub const DEFAULT_ELEMENTS: &[&str] = &["h3", "p"];

/// Per-tag extracted strings, in request order.
///
/// Outer order matches the order tags were requested in; inner order is
/// document order. Invariant: every requested tag has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    entries: Vec<(String, Vec<String>)>,
}

impl ExtractionResult {
    /// Iterate entries in request order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(tag, values)| (tag.as_str(), values.as_slice()))
    }

    /// Extracted strings for a tag, if it was requested
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, values)| values.as_slice())
    }

    /// Tags whose extraction produced no strings, in request order
    pub fn empty_tags(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, values)| values.is_empty())
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    /// Every extracted string joined with single spaces, tag-then-document
    /// order. This is the blob the analyzer scores.
    pub fn joined_text(&self) -> String {
        self.entries
            .iter()
            .flat_map(|(_, values)| values.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extracts per-tag strings from rendered HTML
pub struct SelectorExtractor;

impl SelectorExtractor {
    /// Extract strings for each tag from the given HTML.
    ///
    /// A tag that matches nothing yields an empty entry rather than an error.
    /// A tag that is not a parseable selector is an error (surfaced as 400).
    #[instrument(skip(html))]
    pub fn extract(html: &str, tags: &[String]) -> Result<ExtractionResult> {
        let document = Html::parse_document(html);
        let mut entries = Vec::with_capacity(tags.len());

        for tag in tags {
            // Duplicate requested tags collapse to their first occurrence, so
            // the analytics blob and the empty-tag report count each tag once
            if entries.iter().any(|(existing, _)| existing == tag) {
                continue;
            }

            let selector = Selector::parse(tag)
                .map_err(|e| ExtractionError::InvalidSelector(format!("{}: {}", tag, e)))?;

            let mut values = Vec::new();
            for element in document.select(&selector) {
                let text = if tag == "img" {
                    element
                        .value()
                        .attr("src")
                        .or_else(|| element.value().attr("data-src"))
                        .unwrap_or_default()
                        .to_string()
                } else {
                    element.text().collect::<String>().trim().to_string()
                };

                if !text.is_empty() {
                    values.push(text);
                }
            }

            debug!("Extracted {} strings for tag '{}'", values.len(), tag);
            entries.push((tag.clone(), values));
        }

        Ok(ExtractionResult { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extracts_in_document_order() {
        let html = "<h3>first</h3><p>middle</p><h3>second</h3>";
        let result = SelectorExtractor::extract(html, &tags(&["h3"])).unwrap();
        assert_eq!(result.get("h3").unwrap(), &["first", "second"]);
    }

    #[test]
    fn test_trims_text_and_drops_whitespace_only() {
        let html = "<p>  padded  </p><p>   </p><p></p>";
        let result = SelectorExtractor::extract(html, &tags(&["p"])).unwrap();
        assert_eq!(result.get("p").unwrap(), &["padded"]);
    }

    #[test]
    fn test_img_src_with_data_src_fallback() {
        let html = r#"<img src="/a.png"><img data-src="/lazy.png"><img alt="none">"#;
        let result = SelectorExtractor::extract(html, &tags(&["img"])).unwrap();
        assert_eq!(result.get("img").unwrap(), &["/a.png", "/lazy.png"]);
    }

    #[test]
    fn test_img_prefers_src_over_data_src() {
        let html = r#"<img src="/eager.png" data-src="/lazy.png">"#;
        let result = SelectorExtractor::extract(html, &tags(&["img"])).unwrap();
        assert_eq!(result.get("img").unwrap(), &["/eager.png"]);
    }

    #[test]
    fn test_unmatched_tag_keeps_empty_entry() {
        let html = "<h3>only heading</h3>";
        let result = SelectorExtractor::extract(html, &tags(&["h3", "p"])).unwrap();
        assert_eq!(result.get("p").unwrap(), &[] as &[String]);
        assert_eq!(result.empty_tags(), vec!["p"]);
    }

    #[test]
    fn test_invalid_selector_errors() {
        let html = "<p>text</p>";
        assert!(SelectorExtractor::extract(html, &tags(&["h3["])).is_err());
    }

    #[test]
    fn test_joined_text_tag_then_document_order() {
        let html = "<p>beta</p><h3>alpha</h3>";
        let result = SelectorExtractor::extract(html, &tags(&["h3", "p"])).unwrap();
        assert_eq!(result.joined_text(), "alpha beta");
    }

    #[test]
    fn test_nested_text_is_flattened() {
        let html = "<p>outer <b>bold</b> tail</p>";
        let result = SelectorExtractor::extract(html, &tags(&["p"])).unwrap();
        assert_eq!(result.get("p").unwrap(), &["outer bold tail"]);
    }

    #[test]
    fn test_duplicate_tags_collapse_to_one_entry() {
        let html = "<p>repeated request</p>";
        let result = SelectorExtractor::extract(html, &tags(&["p", "p"])).unwrap();
        assert_eq!(result.iter().count(), 1);
        assert_eq!(result.joined_text(), "repeated request");
    }

    #[test]
    fn test_duplicate_empty_tags_reported_once() {
        let html = "<h3>heading only</h3>";
        let result = SelectorExtractor::extract(html, &tags(&["p", "p"])).unwrap();
        assert_eq!(result.empty_tags(), vec!["p"]);
    }

    #[test]
    fn test_idempotent_over_identical_html() {
        let html = "<h3>One</h3><p>Two words here</p>";
        let first = SelectorExtractor::extract(html, &tags(&["h3", "p"])).unwrap();
        let second = SelectorExtractor::extract(html, &tags(&["h3", "p"])).unwrap();
        assert_eq!(first, second);
    }
}
