//! Lexicon-based sentiment scoring
//!
//! Wraps the AFINN-based `sentiment` crate: the blob gets a numeric polarity
//! score which collapses to a three-way label. Zero is neutral, not a
//! midpoint of some band.

use serde::{Deserialize, Serialize};

/// Three-way sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Lexicon score above zero
    Positive,
    /// Lexicon score of exactly zero
    Neutral,
    /// Lexicon score below zero
    Negative,
}

impl SentimentLabel {
    /// Map a raw lexicon score to its label
    pub fn from_score(score: f32) -> Self {
        if score == 0.0 {
            SentimentLabel::Neutral
        } else if score > 0.0 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        }
    }
}

/// Score a text blob and collapse to a label
pub fn score(text: &str) -> SentimentLabel {
    let analysis = ::sentiment::analyze(text.to_string());
    SentimentLabel::from_score(analysis.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_zero_is_neutral() {
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_from_score_signs() {
        assert_eq!(SentimentLabel::from_score(2.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-1.0), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.5), SentimentLabel::Positive);
    }

    #[test]
    fn test_positive_text_scores_positive() {
        assert_eq!(score("this is a wonderful happy great day"), SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_text_scores_negative() {
        assert_eq!(score("this is a terrible horrible awful disaster"), SentimentLabel::Negative);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Neutral).unwrap(),
            "\"neutral\""
        );
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Negative).unwrap(),
            "\"negative\""
        );
    }
}
