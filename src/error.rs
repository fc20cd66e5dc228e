//! Error types for the support engine

use thiserror::Error;

/// Result type for support operations
pub type SupportResult<T> = Result<T, SupportError>;

/// Errors raised by the stores, the chat pipeline and the HTTP layer.
///
/// Only [`SupportError::InvalidFaq`] and [`SupportError::InvalidInput`] ever
/// escape `classify_and_respond`; store failures there become apology replies.
#[derive(Error, Debug)]
pub enum SupportError {
    #[error("Order lookup failed: {0}")]
    OrderLookup(String),

    #[error("FAQ store unavailable: {0}")]
    FaqStore(String),

    #[error("FAQ record '{id}' is missing its {field}")]
    InvalidFaq { id: String, field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    #[error("Chat already escalated: {0}")]
    AlreadyEscalated(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SupportError {
    /// True for errors that mean the caller handed us broken data,
    /// as opposed to a backend that is temporarily unavailable.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            SupportError::InvalidFaq { .. } | SupportError::InvalidInput(_)
        )
    }
}
