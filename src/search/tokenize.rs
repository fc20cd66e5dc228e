//! Text normalization and search-term extraction

use super::StopWordSet;

/// Tokens this short or shorter never become search terms
const MIN_TERM_LEN: usize = 2;

/// Lowercase text and strip everything except ASCII word characters and whitespace
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Whether `term` appears as a whole whitespace-delimited token of `text`
pub fn has_token(text: &str, term: &str) -> bool {
    text.split_whitespace().any(|token| token == term)
}

/// Extract scoring terms from an utterance.
///
/// Normalizes, splits on whitespace, drops short tokens and stop words.
/// Duplicates are kept so a repeated word weighs more.
pub fn search_terms(utterance: &str, stop_words: &StopWordSet) -> Vec<String> {
    normalize(utterance)
        .split_whitespace()
        .filter(|token| token.len() > MIN_TERM_LEN)
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Where's my E-Scooter?!"), "wheres my escooter");
        assert_eq!(normalize("snake_case stays"), "snake_case stays");
        assert_eq!(normalize("café"), "caf");
    }

    #[test]
    fn test_search_terms_filters_short_and_stop_words() {
        let terms = search_terms("What is the maintenance schedule interval?", &StopWordSet::default());
        assert_eq!(terms, vec!["maintenance", "schedule", "interval"]);
    }

    #[test]
    fn test_search_terms_keep_three_letter_tokens() {
        assert_eq!(search_terms("xyz qq", &StopWordSet::default()), vec!["xyz"]);
    }

    #[test]
    fn test_search_terms_all_short() {
        assert!(search_terms("qq a b", &StopWordSet::default()).is_empty());
    }

    #[test]
    fn test_has_token_requires_whole_word() {
        assert!(has_token("battery range test", "range"));
        assert!(!has_token("arrangement", "range"));
    }
}
