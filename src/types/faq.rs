//! FAQ entry types

use serde::{Deserialize, Serialize};

/// A stored question/response pair available for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub response: String,
}

impl FaqEntry {
    /// Create a new FAQ entry
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            response: response.into(),
        }
    }
}

/// FAQ record as it arrives from storage, before validation.
///
/// Question and response may be absent in malformed data; see
/// [`crate::validation::validate_faq_record`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

impl From<FaqEntry> for FaqRecord {
    fn from(entry: FaqEntry) -> Self {
        Self {
            id: entry.id,
            question: Some(entry.question),
            response: Some(entry.response),
        }
    }
}
