//! FAQ matcher: weighted term scoring with synonym expansion
//!
//! Scoring per candidate:
//! - original terms: exact question token 15, question substring 8,
//!   exact response token 3, response substring 1 (first tier only)
//! - synonym terms: exact question token 5, question substring 2
//! - bonus for several matching terms and for covering half the query
//! - domain rules from [`super::rules`]
//!
//! The best candidate is returned only if it reaches
//! `max(12, terms * 4)`.

use std::sync::LazyLock;

use rayon::prelude::*;

use super::rules::domain_adjustment;
use super::tokenize::{has_token, normalize, search_terms};
use super::{default_synonyms, StopWordSet, SynonymTable};
use crate::types::{FaqEntry, MatchResult, ScoredCandidate};

/// Reply used when nothing matches confidently
pub const GENERIC_FALLBACK: &str = "Thank you for contacting MotoRise support. I'm here to help with any issues you're experiencing with your electric scooter.";

const QUESTION_TOKEN_WEIGHT: i64 = 15;
const QUESTION_SUBSTRING_WEIGHT: i64 = 8;
const RESPONSE_TOKEN_WEIGHT: i64 = 3;
const RESPONSE_SUBSTRING_WEIGHT: i64 = 1;
const SYNONYM_TOKEN_WEIGHT: i64 = 5;
const SYNONYM_SUBSTRING_WEIGHT: i64 = 2;
const MULTI_TERM_BONUS: i64 = 3;

/// Lowest threshold regardless of query length
pub const MIN_THRESHOLD: i64 = 12;
const THRESHOLD_PER_TERM: i64 = 4;

/// Candidate count above which scoring runs on the rayon pool
const PARALLEL_SCORING_THRESHOLD: usize = 1000;

static DEFAULT_MATCHER: LazyLock<FaqMatcher> = LazyLock::new(FaqMatcher::default);

/// Acceptance threshold for a query with `term_count` search terms
pub fn minimum_threshold(term_count: usize) -> i64 {
    MIN_THRESHOLD.max(term_count as i64 * THRESHOLD_PER_TERM)
}

/// Match with the built-in synonym table and stop words, returning the reply text
pub fn match_faq(utterance: &str, entries: &[FaqEntry]) -> String {
    DEFAULT_MATCHER.match_faq(utterance, entries).into_response()
}

/// The process-wide matcher built from the default tables
pub fn default_matcher() -> &'static FaqMatcher {
    &DEFAULT_MATCHER
}

/// Utterance prepared once per matching call
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    /// Raw utterance, lowercased but otherwise untouched
    pub lowered: String,
    /// Filtered search terms
    pub terms: Vec<String>,
    /// Synonyms of the search terms that are not search terms themselves
    pub synonyms: Vec<String>,
}

impl PreparedQuery {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn threshold(&self) -> i64 {
        minimum_threshold(self.terms.len())
    }
}

/// Ranks FAQ entries against an utterance
#[derive(Debug, Clone)]
pub struct FaqMatcher {
    synonyms: SynonymTable,
    stop_words: StopWordSet,
}

impl Default for FaqMatcher {
    fn default() -> Self {
        Self::new(default_synonyms(), StopWordSet::default())
    }
}

impl FaqMatcher {
    /// Create a matcher with custom tables
    pub fn new(synonyms: SynonymTable, stop_words: StopWordSet) -> Self {
        Self {
            synonyms,
            stop_words,
        }
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Tokenize the utterance and expand its terms
    pub fn prepare(&self, utterance: &str) -> PreparedQuery {
        let terms = search_terms(utterance, &self.stop_words);
        let synonyms = self
            .synonyms
            .expand(&terms)
            .into_iter()
            .filter(|synonym| !terms.contains(synonym))
            .collect();

        PreparedQuery {
            lowered: utterance.to_lowercase(),
            terms,
            synonyms,
        }
    }

    /// Relevance score of one entry for a prepared query
    pub fn score(&self, query: &PreparedQuery, entry: &FaqEntry) -> i64 {
        let question = normalize(&entry.question);
        let response = normalize(&entry.response);
        let mut score = 0;

        for term in &query.terms {
            score += if has_token(&question, term) {
                QUESTION_TOKEN_WEIGHT
            } else if question.contains(term.as_str()) {
                QUESTION_SUBSTRING_WEIGHT
            } else if has_token(&response, term) {
                RESPONSE_TOKEN_WEIGHT
            } else if response.contains(term.as_str()) {
                RESPONSE_SUBSTRING_WEIGHT
            } else {
                0
            };
        }

        for synonym in &query.synonyms {
            score += if has_token(&question, synonym) {
                SYNONYM_TOKEN_WEIGHT
            } else if question.contains(synonym.as_str()) {
                SYNONYM_SUBSTRING_WEIGHT
            } else {
                0
            };
        }

        let total = query.terms.len() as i64;
        let matching = query
            .terms
            .iter()
            .filter(|term| question.contains(term.as_str()) || response.contains(term.as_str()))
            .count() as i64;

        if matching > 1 {
            score += matching * MULTI_TERM_BONUS;
        }

        // matching / total >= 0.5, then floor(ratio * 10), in integers
        if total > 0 && matching * 2 >= total {
            score += matching * 10 / total;
        }

        score + domain_adjustment(&query.lowered, &question, &response)
    }

    /// Score every entry, preserving input order
    pub fn score_all(&self, query: &PreparedQuery, entries: &[FaqEntry]) -> Vec<ScoredCandidate> {
        if query.is_empty() {
            return Vec::new();
        }

        let score_one = |entry: &FaqEntry| ScoredCandidate {
            entry: entry.clone(),
            score: self.score(query, entry),
        };

        if entries.len() > PARALLEL_SCORING_THRESHOLD {
            entries.par_iter().map(score_one).collect()
        } else {
            entries.iter().map(score_one).collect()
        }
    }

    /// Highest-scoring candidate; the earliest one wins ties
    pub fn best_candidate(
        &self,
        query: &PreparedQuery,
        entries: &[FaqEntry],
    ) -> Option<ScoredCandidate> {
        let mut best: Option<ScoredCandidate> = None;
        let mut best_score = 0;

        for candidate in self.score_all(query, entries) {
            if candidate.score > best_score {
                best_score = candidate.score;
                best = Some(candidate);
            }
        }

        best
    }

    /// Find the FAQ response for an utterance, or the generic fallback
    pub fn match_faq(&self, utterance: &str, entries: &[FaqEntry]) -> MatchResult {
        let query = self.prepare(utterance);
        if query.is_empty() {
            tracing::debug!(utterance, "no usable search terms");
            return MatchResult::NoMatch(GENERIC_FALLBACK.to_string());
        }

        let threshold = query.threshold();
        match self.best_candidate(&query, entries) {
            Some(best) if best.score >= threshold => {
                tracing::info!(
                    utterance,
                    score = best.score,
                    threshold,
                    faq_id = %best.entry.id,
                    "FAQ match found"
                );
                MatchResult::Matched(best.entry.response)
            }
            best => {
                tracing::info!(
                    utterance,
                    best_score = best.map(|b| b.score).unwrap_or(0),
                    threshold,
                    terms = ?query.terms,
                    "No relevant FAQ found"
                );
                MatchResult::NoMatch(GENERIC_FALLBACK.to_string())
            }
        }
    }
}
