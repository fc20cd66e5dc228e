//! FAQ search with synonym expansion and weighted scoring
//!
//! This module provides:
//! - Tokenization with stop-word filtering
//! - A one-directional synonym table for query expansion
//! - The FAQ matcher with its confidence threshold
//! - Hand-tuned domain rules for maintenance and delay questions

mod matcher;
pub mod rules;
mod stop_words;
mod synonyms;
mod tokenize;

pub use matcher::{
    default_matcher, match_faq, minimum_threshold, FaqMatcher, PreparedQuery, GENERIC_FALLBACK,
    MIN_THRESHOLD,
};
pub use stop_words::{StopWordSet, STOP_WORDS};
pub use synonyms::{default_synonyms, SynonymTable, SYNONYM_ENTRIES};
pub use tokenize::{has_token, normalize, search_terms};
