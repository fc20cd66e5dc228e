//! Scooter Support Chat Engine
//!
//! The customer-support chat engine for an electric-scooter brand. Each
//! message is routed to an order-status lookup or to a keyword-scored FAQ
//! match, and answered in plain text.
//!
//! # Features
//!
//! - **Intent Routing**: order status, order placement help, or general FAQ
//! - **FAQ Matching**: stop words, synonym expansion, weighted scoring and a
//!   confidence threshold with a generic fallback
//! - **Order Replies**: single-order and multi-order status text
//! - **Chat History**: every exchange is stored per phone number
//! - **Escalation**: unsatisfying exchanges become support tickets that
//!   admins answer
//! - **HTTP API**: Axum REST endpoints over a JSONL data file
//!
//! # Modules
//!
//! - `types`: Core data structures (FaqEntry, Order, ChatExchange, Ticket)
//! - `router`: Intent classification and order-status replies
//! - `search`: FAQ matcher with synonym expansion
//! - `desk`: The chat engine facade tying routing and matching together
//! - `store`: Collaborator traits and the JSONL store
//! - `validation`: FAQ record and chat input checks
//! - `api`: HTTP router and REST handlers
//! - `config`, `logging`: Environment configuration and tracing setup
//! - `utils`: Timestamps, ids and atomic file writes
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use scooter_support::{JsonlStore, SupportDesk};
//!
//! fn main() -> scooter_support::SupportResult<()> {
//!     let store = Arc::new(JsonlStore::open("support.jsonl")?);
//!     let desk = SupportDesk::from_store(store);
//!     let reply = desk.classify_and_respond("Where is my order ORD4821B?", "555-0100")?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod desk;
pub mod error;
pub mod logging;
pub mod router;
pub mod search;
pub mod store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::SupportConfig;
pub use desk::{Escalation, SupportDesk, PROCESSING_FAILURE_REPLY};
pub use error::{SupportError, SupportResult};
pub use router::{classify, format_order_reply, LOOKUP_FAILURE_REPLY, NO_ORDERS_REPLY};
pub use search::{match_faq, FaqMatcher, GENERIC_FALLBACK};
pub use store::{ChatStore, FaqStore, JsonlStore, OrderStore, TicketStore};
pub use types::{
    ChatExchange, Classification, FaqEntry, FaqRecord, Intent, MatchResult, Order, ResponseDraft,
    Ticket, TicketResponse, TicketStatus, TicketView,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
