//! Support ticket types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SupportError;

/// Lifecycle state of a support ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    /// Status after an admin responds: an open ticket moves to in progress
    pub fn after_response(self) -> TicketStatus {
        match self {
            TicketStatus::Open => TicketStatus::InProgress,
            other => other,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
        };
        f.write_str(s)
    }
}

impl FromStr for TicketStatus {
    type Err = SupportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            other => Err(SupportError::InvalidInput(format!(
                "unknown ticket status '{}'",
                other
            ))),
        }
    }
}

/// Ticket content derived from an unsatisfying chat exchange, not yet stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    #[serde(rename = "chatId")]
    pub chat_id: String,
    #[serde(rename = "userPhone")]
    pub user_phone: String,
    pub title: String,
    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// A stored support ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    #[serde(rename = "chatId")]
    pub chat_id: String,
    #[serde(rename = "userPhone")]
    pub user_phone: String,
    pub title: String,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Admin reply to a ticket, not yet stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDraft {
    #[serde(rename = "adminPhone")]
    pub admin_phone: String,
    #[serde(rename = "responseText", default)]
    pub response_text: Option<String>,
    #[serde(rename = "responseFileUrl", default)]
    pub response_file_url: Option<String>,
}

/// A stored admin reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub id: String,
    #[serde(rename = "ticketId")]
    pub ticket_id: String,
    #[serde(rename = "adminPhone")]
    pub admin_phone: String,
    #[serde(rename = "responseText", default)]
    pub response_text: Option<String>,
    #[serde(rename = "responseFileUrl", default)]
    pub response_file_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// The chat a ticket was raised from, as shown next to the ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketChat {
    pub question: String,
    #[serde(rename = "botResponse")]
    pub bot_response: Option<String>,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
}

/// Ticket joined with its originating chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub chat: Option<TicketChat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_wire_names() {
        assert_eq!("open".parse::<TicketStatus>().unwrap(), TicketStatus::Open);
        assert_eq!(
            "IN_PROGRESS".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
        assert!("closed".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert_eq!(TicketStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn test_response_moves_only_open_tickets() {
        assert_eq!(TicketStatus::Open.after_response(), TicketStatus::InProgress);
        assert_eq!(TicketStatus::InProgress.after_response(), TicketStatus::InProgress);
        assert_eq!(TicketStatus::Resolved.after_response(), TicketStatus::Resolved);
    }
}
