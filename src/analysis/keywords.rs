//! Frequency-ranked keyword extraction
//!
//! Tokens are normalized (punctuation stripped, lowercased), filtered down to
//! meaningful words (longer than three characters, not stop words), counted,
//! and ranked by frequency. Equal counts keep first-appearance order, so the
//! ranking is stable for identical input.

use std::collections::HashSet;

/// How many keywords a response carries at most
pub const TOP_KEYWORDS: usize = 3;

/// Shortest token length that survives filtering (strictly greater than)
const MIN_TOKEN_LEN: usize = 3;

/// Punctuation characters stripped during normalization
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

/// Strip the punctuation class and lowercase one raw token
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Extract up to `k` keywords from `text`, highest frequency first.
///
/// The token stream is the raw text split on single spaces; normalization and
/// filtering happen per token. Ties rank by first appearance in the stream.
pub fn top_keywords(text: &str, stop_words: &HashSet<String>, k: usize) -> Vec<String> {
    // First-seen order preserved: lookup is linear over the surviving
    // vocabulary, which is small for a single page
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in text.split(' ') {
        let word = normalize_token(token);
        if word.is_empty() || word.chars().count() <= MIN_TOKEN_LEN {
            continue;
        }
        if stop_words.contains(&word) {
            continue;
        }

        match counts.iter_mut().find(|(w, _)| *w == word) {
            Some((_, count)) => *count += 1,
            None => counts.push((word, 1)),
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(k).map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_stop_words() -> HashSet<String> {
        HashSet::new()
    }

    fn stop_words(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_strips_punctuation_and_lowercases() {
        assert_eq!(normalize_token("Hello,"), "hello");
        assert_eq!(normalize_token("(World)!"), "world");
        assert_eq!(normalize_token("semi-colon;"), "semicolon");
    }

    #[test]
    fn test_normalize_can_empty_a_token() {
        assert_eq!(normalize_token("---"), "");
        assert_eq!(normalize_token("()"), "");
    }

    #[test]
    fn test_short_tokens_dropped() {
        // "word" (4 chars) survives, "the" and "a" do not
        let result = top_keywords("the a word word", &no_stop_words(), 5);
        assert_eq!(result, vec!["word"]);
    }

    #[test]
    fn test_four_char_token_survives() {
        let result = top_keywords("tiny tiny", &no_stop_words(), 5);
        assert_eq!(result, vec!["tiny"]);
    }

    #[test]
    fn test_stop_words_removed() {
        let result = top_keywords(
            "about about rendering rendering",
            &stop_words(&["about"]),
            5,
        );
        assert_eq!(result, vec!["rendering"]);
    }

    #[test]
    fn test_frequency_ordering() {
        let text = "browser browser browser engine engine lexicon";
        let result = top_keywords(text, &no_stop_words(), 5);
        assert_eq!(result, vec!["browser", "engine", "lexicon"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let text = "zebra apple zebra apple mango";
        let result = top_keywords(text, &no_stop_words(), 5);
        // zebra and apple both appear twice; zebra was seen first
        assert_eq!(result, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_top_k_limit() {
        let text = "alpha bravo charlie delta echo";
        let result = top_keywords(text, &no_stop_words(), 3);
        assert_eq!(result.len(), 3);
        assert_eq!(result, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_case_folding_merges_counts() {
        let text = "Browser browser BROWSER engine";
        let result = top_keywords(text, &no_stop_words(), 2);
        assert_eq!(result, vec!["browser", "engine"]);
    }

    #[test]
    fn test_punctuation_only_tokens_ignored() {
        let result = top_keywords("--- () word word", &no_stop_words(), 5);
        assert_eq!(result, vec!["word"]);
    }
}
