//! Chat message handling

use crate::error::SupportResult;
use crate::types::ChatExchange;
use crate::utils::{next_id, now_rfc3339};
use crate::validation::validate_chat_input;

use super::SupportDesk;

/// Answer one chat message and store the exchange.
///
/// A message with only an attachment is answered as "File uploaded".
pub fn send_message(
    desk: &SupportDesk,
    phone: &str,
    message: &str,
    file_url: Option<String>,
) -> SupportResult<ChatExchange> {
    let question = validate_chat_input(phone, message, file_url.is_some())?;
    let reply = desk.classify_and_respond(&question, phone)?;

    let exchange = ChatExchange {
        id: next_id("chat"),
        user_phone: phone.to_string(),
        question,
        bot_response: Some(reply),
        file_url,
        is_unsatisfied: false,
        resolved: false,
        created_at: now_rfc3339(),
    };
    desk.chats.save_chat(exchange)
}
