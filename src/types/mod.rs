//! Data types for the support engine
//!
//! This module contains the core data structures shared by the router,
//! the matcher, the stores and the HTTP layer.

mod chat;
mod faq;
mod intent;
mod match_result;
mod order;
mod ticket;

pub use chat::ChatExchange;
pub use faq::{FaqEntry, FaqRecord};
pub use intent::{Classification, Intent};
pub use match_result::{MatchResult, ScoredCandidate};
pub use order::Order;
pub use ticket::{
    ResponseDraft, Ticket, TicketChat, TicketDraft, TicketResponse, TicketStatus, TicketView,
};
