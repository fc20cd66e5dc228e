//! Chat exchange types

use serde::{Deserialize, Serialize};

use super::TicketChat;

/// One user message and the bot's reply to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub id: String,
    #[serde(rename = "userPhone")]
    pub user_phone: String,
    pub question: String,
    #[serde(rename = "botResponse", default)]
    pub bot_response: Option<String>,
    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(rename = "isUnsatisfied", default)]
    pub is_unsatisfied: bool,
    #[serde(default)]
    pub resolved: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl ChatExchange {
    /// The parts of this exchange shown alongside its ticket
    pub fn ticket_chat(&self) -> TicketChat {
        TicketChat {
            question: self.question.clone(),
            bot_response: self.bot_response.clone(),
            file_url: self.file_url.clone(),
        }
    }
}
