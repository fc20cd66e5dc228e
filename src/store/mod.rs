//! Collaborator interfaces and the bundled JSONL store
//!
//! The chat pipeline only talks to the traits below. `JsonlStore` implements
//! all of them on top of a single JSON-lines file.

mod jsonl;

pub use jsonl::{JsonlStore, StoredRecord};

use crate::error::SupportResult;
use crate::types::{
    ChatExchange, FaqEntry, Order, ResponseDraft, Ticket, TicketDraft, TicketResponse,
    TicketStatus,
};

/// Source of customer orders
pub trait OrderStore: Send + Sync {
    /// Orders placed from `phone`, newest first
    fn lookup_orders(&self, phone: &str) -> SupportResult<Vec<Order>>;
}

/// Source of FAQ entries
pub trait FaqStore: Send + Sync {
    /// Every FAQ entry; fails with `InvalidFaq` on a malformed record
    fn load_all_faqs(&self) -> SupportResult<Vec<FaqEntry>>;
}

/// Chat history
pub trait ChatStore: Send + Sync {
    fn save_chat(&self, exchange: ChatExchange) -> SupportResult<ChatExchange>;

    fn find_chat(&self, id: &str) -> SupportResult<Option<ChatExchange>>;

    /// Chats from `phone`, oldest first
    fn chat_history(&self, phone: &str) -> SupportResult<Vec<ChatExchange>>;

    /// Flag a chat as unsatisfying.
    ///
    /// Fails with `ChatNotFound` for an unknown id and `AlreadyEscalated`
    /// when the flag is already set.
    fn mark_unsatisfied(&self, id: &str) -> SupportResult<ChatExchange>;

    /// Undo [`ChatStore::mark_unsatisfied`]
    fn clear_unsatisfied(&self, id: &str) -> SupportResult<()>;
}

/// Sink for escalated support tickets
pub trait TicketStore: Send + Sync {
    fn create_ticket(&self, draft: TicketDraft) -> SupportResult<Ticket>;

    /// Tickets, newest first; all of them when `phone` is `None`
    fn list_tickets(&self, phone: Option<&str>) -> SupportResult<Vec<Ticket>>;

    fn update_ticket_status(&self, id: &str, status: TicketStatus) -> SupportResult<Ticket>;

    /// Store an admin reply; an open ticket moves to in progress
    fn respond_to_ticket(&self, ticket_id: &str, draft: ResponseDraft)
        -> SupportResult<TicketResponse>;

    /// Replies to a ticket, oldest first
    fn list_responses(&self, ticket_id: &str) -> SupportResult<Vec<TicketResponse>>;
}
