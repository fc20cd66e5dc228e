//! FAQ matching result types

use serde::Serialize;

use super::FaqEntry;

/// A candidate FAQ with its relevance score for one matching call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub entry: FaqEntry,
    pub score: i64,
}

/// Outcome of FAQ matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "response", rename_all = "snake_case")]
pub enum MatchResult {
    /// A candidate cleared the threshold; carries its response
    Matched(String),
    /// No confident match; carries the generic fallback
    NoMatch(String),
}

impl MatchResult {
    /// The reply text regardless of outcome
    pub fn response(&self) -> &str {
        match self {
            MatchResult::Matched(text) | MatchResult::NoMatch(text) => text,
        }
    }

    pub fn into_response(self) -> String {
        match self {
            MatchResult::Matched(text) | MatchResult::NoMatch(text) => text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }
}
