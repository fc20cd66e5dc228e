//! Stop words excluded from FAQ search terms

use std::collections::HashSet;

/// Common English words that carry no meaning for FAQ lookup.
///
/// Tokens of two characters or fewer are already dropped by the tokenizer,
/// so the list only needs longer words.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "its", "may", "new", "now", "old",
    "see", "two", "who", "boy", "did", "way", "she", "use", "your", "what", "when", "where",
    "will", "with",
];

/// Set of lowercase stop words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Build a set from arbitrary words (lowercased on insert)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// An empty set; every token is kept
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::from_words(STOP_WORDS.iter().copied())
    }
}
