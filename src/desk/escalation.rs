//! Escalating unsatisfying answers to support tickets

use serde::Serialize;

use crate::error::SupportResult;
use crate::types::{ChatExchange, Ticket, TicketDraft, TicketView};

use super::SupportDesk;

/// Longest ticket title taken verbatim from the question
pub const MAX_TITLE_CHARS: usize = 50;

/// The flagged exchange and the ticket opened for it
#[derive(Debug, Clone, Serialize)]
pub struct Escalation {
    pub exchange: ChatExchange,
    pub ticket: Ticket,
}

/// Ticket title from the user's question, cut to 50 characters plus "..."
pub fn ticket_title(question: &str) -> String {
    if question.chars().count() > MAX_TITLE_CHARS {
        let head: String = question.chars().take(MAX_TITLE_CHARS).collect();
        format!("{}...", head)
    } else {
        question.to_string()
    }
}

/// Ticket content for an exchange
pub fn draft_ticket(exchange: &ChatExchange) -> TicketDraft {
    TicketDraft {
        chat_id: exchange.id.clone(),
        user_phone: exchange.user_phone.clone(),
        title: ticket_title(&exchange.question),
        file_url: exchange.file_url.clone(),
    }
}

/// Mark a stored chat unsatisfied and open a ticket for it.
///
/// Each chat is escalated at most once. If the ticket cannot be created the
/// flag is cleared again.
pub fn escalate(desk: &SupportDesk, chat_id: &str) -> SupportResult<Escalation> {
    let exchange = desk.chats.mark_unsatisfied(chat_id)?;

    match desk.tickets.create_ticket(draft_ticket(&exchange)) {
        Ok(ticket) => {
            tracing::info!(chat_id, ticket_id = %ticket.id, "chat escalated");
            Ok(Escalation { exchange, ticket })
        }
        Err(e) => {
            if let Err(undo) = desk.chats.clear_unsatisfied(chat_id) {
                tracing::error!(chat_id, error = %undo, "failed to clear unsatisfied flag");
            }
            Err(e)
        }
    }
}

/// Tickets with their originating chat, newest first
pub fn ticket_views(desk: &SupportDesk, phone: Option<&str>) -> SupportResult<Vec<TicketView>> {
    desk.tickets
        .list_tickets(phone)?
        .into_iter()
        .map(|ticket| -> SupportResult<TicketView> {
            let chat = desk.chats.find_chat(&ticket.chat_id)?;
            Ok(TicketView {
                chat: chat.as_ref().map(ChatExchange::ticket_chat),
                ticket,
            })
        })
        .collect()
}
