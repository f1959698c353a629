//! Text analytics module
//!
//! Lexicon sentiment scoring, word counting, and frequency-ranked keyword
//! extraction over the text pulled out of a page. The analyzer is built once
//! at process start (materializing the English stop-word set) and shared by
//! reference across requests; it is stateless per call.

pub mod keywords;
pub mod sentiment;

pub use keywords::TOP_KEYWORDS;
pub use sentiment::SentimentLabel;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Analytics derived from one extraction blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalytics {
    /// Overall polarity of the text
    pub sentiment: SentimentLabel,
    /// Count of space-separated segments in the raw text.
    ///
    /// Deliberately counts segments of a plain `' '` split, so runs of
    /// whitespace inside element text produce empty segments that still
    /// count. Keyword extraction uses its own normalized token stream.
    #[serde(rename = "wordCount")]
    pub word_count: usize,
    /// Up to [`TOP_KEYWORDS`] tokens, highest frequency first
    pub keywords: Vec<String>,
}

/// Sentiment, word count, and keyword analytics over a text blob
pub struct TextAnalyzer {
    stop_words: HashSet<String>,
}

impl TextAnalyzer {
    /// Build an analyzer with the English stop-word set
    pub fn new() -> Self {
        let stop_words = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();
        Self { stop_words }
    }

    /// Build an analyzer with a caller-supplied stop-word set (for tests and
    /// non-default lexicons)
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self { stop_words }
    }

    /// Run the full analytics pass over one blob of extracted text
    #[instrument(skip(self, text))]
    pub fn analyze(&self, text: &str) -> TextAnalytics {
        let sentiment = sentiment::score(text);
        let word_count = text.split(' ').count();
        let keywords = keywords::top_keywords(text, &self.stop_words, TOP_KEYWORDS);

        debug!(
            ?sentiment,
            word_count,
            keyword_count = keywords.len(),
            "Analytics computed"
        );

        TextAnalytics {
            sentiment,
            word_count,
            keywords,
        }
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer_without_stop_words() -> TextAnalyzer {
        TextAnalyzer::with_stop_words(HashSet::new())
    }

    #[test]
    fn test_word_count_counts_space_segments() {
        let analyzer = analyzer_without_stop_words();
        let analytics = analyzer.analyze("one two three");
        assert_eq!(analytics.word_count, 3);
    }

    #[test]
    fn test_word_count_counts_empty_segments() {
        // Double space yields an empty segment that still counts
        let analyzer = analyzer_without_stop_words();
        let analytics = analyzer.analyze("one  two");
        assert_eq!(analytics.word_count, 3);
    }

    #[test]
    fn test_sentiment_label_in_domain() {
        let analyzer = analyzer_without_stop_words();
        let analytics = analyzer.analyze("the quarterly infrastructure report");
        assert!(matches!(
            analytics.sentiment,
            SentimentLabel::Positive | SentimentLabel::Neutral | SentimentLabel::Negative
        ));
    }

    #[test]
    fn test_keywords_capped_at_top_k() {
        let analyzer = analyzer_without_stop_words();
        let analytics =
            analyzer.analyze("alpha bravo charlie delta echo foxtrot golf hotel india");
        assert!(analytics.keywords.len() <= TOP_KEYWORDS);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let analyzer = TextAnalyzer::new();
        let text = "Rust services render pages quickly and render pages reliably";
        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
    }

    #[test]
    fn test_analytics_serialization_uses_camel_case_word_count() {
        let analytics = TextAnalytics {
            sentiment: SentimentLabel::Neutral,
            word_count: 7,
            keywords: vec!["render".to_string()],
        };
        let json = serde_json::to_string(&analytics).unwrap();
        assert!(json.contains("\"wordCount\":7"));
        assert!(json.contains("\"sentiment\":\"neutral\""));
    }
}
