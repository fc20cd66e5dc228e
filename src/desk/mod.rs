//! Support desk - the chat engine facade
//!
//! `SupportDesk` wires the intent router and FAQ matcher to the order, FAQ,
//! chat and ticket collaborators. It holds no per-conversation state of its
//! own; chat history lives in the chat store.

mod chat;
mod escalation;
mod respond;

pub use escalation::{draft_ticket, ticket_title, Escalation, MAX_TITLE_CHARS};
pub use respond::PROCESSING_FAILURE_REPLY;

use std::sync::Arc;

use crate::error::SupportResult;
use crate::search::FaqMatcher;
use crate::store::{ChatStore, FaqStore, JsonlStore, OrderStore, TicketStore};
use crate::types::{
    ChatExchange, Classification, FaqEntry, MatchResult, ResponseDraft, Ticket, TicketResponse,
    TicketStatus, TicketView,
};

/// Chat engine over injected collaborators
pub struct SupportDesk {
    pub(crate) orders: Arc<dyn OrderStore>,
    pub(crate) faqs: Arc<dyn FaqStore>,
    pub(crate) tickets: Arc<dyn TicketStore>,
    pub(crate) chats: Arc<dyn ChatStore>,
    pub(crate) matcher: FaqMatcher,
}

impl SupportDesk {
    /// Create a desk with the default synonym table and stop words
    pub fn new(
        orders: Arc<dyn OrderStore>,
        faqs: Arc<dyn FaqStore>,
        tickets: Arc<dyn TicketStore>,
        chats: Arc<dyn ChatStore>,
    ) -> Self {
        Self {
            orders,
            faqs,
            tickets,
            chats,
            matcher: FaqMatcher::default(),
        }
    }

    /// Create a desk backed entirely by one JSONL store
    pub fn from_store(store: Arc<JsonlStore>) -> Self {
        Self::new(store.clone(), store.clone(), store.clone(), store)
    }

    /// Replace the matcher (custom synonyms or stop words)
    pub fn with_matcher(mut self, matcher: FaqMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn matcher(&self) -> &FaqMatcher {
        &self.matcher
    }

    /// Classify an utterance without answering it
    pub fn classify(&self, utterance: &str) -> Classification {
        crate::router::classify(utterance)
    }

    /// Full pipeline: route, look up orders or match FAQs, return reply text
    pub fn classify_and_respond(&self, utterance: &str, phone: &str) -> SupportResult<String> {
        respond::classify_and_respond(self, utterance, phone)
    }

    /// Match an utterance against the given entries only
    pub fn match_faq(&self, utterance: &str, entries: &[FaqEntry]) -> MatchResult {
        self.matcher.match_faq(utterance, entries)
    }

    /// Load the current FAQ set
    pub fn faqs(&self) -> SupportResult<Vec<FaqEntry>> {
        self.faqs.load_all_faqs()
    }

    // Chat operations (from chat.rs)
    pub fn send_message(
        &self,
        phone: &str,
        message: &str,
        file_url: Option<String>,
    ) -> SupportResult<ChatExchange> {
        chat::send_message(self, phone, message, file_url)
    }

    /// Chat history for a phone number, oldest first
    pub fn chat_history(&self, phone: &str) -> SupportResult<Vec<ChatExchange>> {
        self.chats.chat_history(phone)
    }

    // Ticket operations (from escalation.rs)
    pub fn escalate(&self, chat_id: &str) -> SupportResult<Escalation> {
        escalation::escalate(self, chat_id)
    }

    pub fn list_tickets(&self, phone: Option<&str>) -> SupportResult<Vec<Ticket>> {
        self.tickets.list_tickets(phone)
    }

    /// Tickets joined with the chat they were raised from
    pub fn ticket_views(&self, phone: Option<&str>) -> SupportResult<Vec<TicketView>> {
        escalation::ticket_views(self, phone)
    }

    pub fn update_ticket_status(&self, id: &str, status: TicketStatus) -> SupportResult<Ticket> {
        self.tickets.update_ticket_status(id, status)
    }

    pub fn respond_to_ticket(
        &self,
        ticket_id: &str,
        draft: ResponseDraft,
    ) -> SupportResult<TicketResponse> {
        self.tickets.respond_to_ticket(ticket_id, draft)
    }

    pub fn ticket_responses(&self, ticket_id: &str) -> SupportResult<Vec<TicketResponse>> {
        self.tickets.list_responses(ticket_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SupportError;
    use crate::router::LOOKUP_FAILURE_REPLY;
    use crate::search::GENERIC_FALLBACK;
    use crate::types::{FaqRecord, Order};

    const PHONE: &str = "+15550100";

    struct FailingBackend;

    impl OrderStore for FailingBackend {
        fn lookup_orders(&self, _phone: &str) -> SupportResult<Vec<Order>> {
            Err(SupportError::OrderLookup("connection reset".to_string()))
        }
    }

    impl FaqStore for FailingBackend {
        fn load_all_faqs(&self) -> SupportResult<Vec<FaqEntry>> {
            Err(SupportError::FaqStore("connection reset".to_string()))
        }
    }

    struct BrokenFaqs;

    impl FaqStore for BrokenFaqs {
        fn load_all_faqs(&self) -> SupportResult<Vec<FaqEntry>> {
            crate::validation::validate_faq_records(vec![FaqRecord {
                id: "7".to_string(),
                question: Some("Battery?".to_string()),
                response: None,
            }])
        }
    }

    fn faqs() -> Vec<FaqEntry> {
        vec![
            FaqEntry::new(
                "place",
                "How do I place an order?",
                "Order online from the shop page and pay at checkout.",
            ),
            FaqEntry::new(
                "charge",
                "How long does the battery take to charge?",
                "A full charge takes about 4 hours.",
            ),
        ]
    }

    fn desk_with(orders: Vec<Order>) -> SupportDesk {
        SupportDesk::from_store(Arc::new(JsonlStore::with_data(faqs(), orders)))
    }

    #[test]
    fn test_order_status_single_order() {
        let desk = desk_with(vec![Order::new(
            "ORD4821B",
            "Scooter X",
            "Shipped",
            "2024-01-01",
            PHONE,
        )]);
        let reply = desk
            .classify_and_respond("Where is my order ORD4821B?", PHONE)
            .unwrap();
        assert!(reply.contains("ORD4821B"));
        assert!(reply.contains("Scooter X"));
        assert!(reply.contains("Shipped"));
    }

    #[test]
    fn test_placement_question_goes_to_faq() {
        let desk = desk_with(vec![Order::new("ORD1", "Helmet", "Shipped", "2024-01-01", PHONE)]);
        let reply = desk
            .classify_and_respond("How do I place an order for ORD1?", PHONE)
            .unwrap();
        assert_eq!(reply, "Order online from the shop page and pay at checkout.");
    }

    #[test]
    fn test_lookup_failure_becomes_apology() {
        let backend = Arc::new(FailingBackend);
        let store = Arc::new(JsonlStore::with_data(faqs(), vec![]));
        let desk = SupportDesk::new(backend.clone(), store.clone(), store.clone(), store);
        let reply = desk.classify_and_respond("tracking ORD5", PHONE).unwrap();
        assert_eq!(reply, LOOKUP_FAILURE_REPLY);
    }

    #[test]
    fn test_faq_store_failure_becomes_apology() {
        let backend = Arc::new(FailingBackend);
        let store = Arc::new(JsonlStore::in_memory());
        let desk = SupportDesk::new(backend.clone(), backend, store.clone(), store);
        let reply = desk
            .classify_and_respond("battery charge time", PHONE)
            .unwrap();
        assert_eq!(reply, PROCESSING_FAILURE_REPLY);
    }

    #[test]
    fn test_malformed_faq_fails_fast() {
        let store = Arc::new(JsonlStore::in_memory());
        let desk = SupportDesk::new(store.clone(), Arc::new(BrokenFaqs), store.clone(), store);
        let err = desk
            .classify_and_respond("battery charge time", PHONE)
            .unwrap_err();
        assert!(matches!(err, SupportError::InvalidFaq { .. }));
    }

    #[test]
    fn test_missing_phone_skips_order_lookup() {
        let desk = desk_with(vec![]);
        let reply = desk
            .classify_and_respond("shipment status please", "")
            .unwrap();
        assert_eq!(reply, GENERIC_FALLBACK);
    }

    #[test]
    fn test_send_message_and_escalate() {
        let desk = desk_with(vec![]);
        let exchange = desk
            .send_message(PHONE, "How long does the battery take to charge?", None)
            .unwrap();
        assert_eq!(
            exchange.bot_response.as_deref(),
            Some("A full charge takes about 4 hours.")
        );
        assert!(!exchange.is_unsatisfied);

        assert_eq!(desk.chat_history(PHONE).unwrap(), vec![exchange.clone()]);

        let escalation = desk.escalate(&exchange.id).unwrap();
        assert!(escalation.exchange.is_unsatisfied);
        assert_eq!(escalation.ticket.chat_id, exchange.id);
        assert_eq!(escalation.ticket.status, TicketStatus::Open);
        assert_eq!(desk.list_tickets(Some(PHONE)).unwrap().len(), 1);
        assert!(desk.chat_history(PHONE).unwrap()[0].is_unsatisfied);
    }

    #[test]
    fn test_escalation_requires_a_stored_chat() {
        let desk = desk_with(vec![]);
        assert!(matches!(
            desk.escalate("never-sent"),
            Err(SupportError::ChatNotFound(_))
        ));
        assert!(desk.list_tickets(None).unwrap().is_empty());
    }

    #[test]
    fn test_second_escalation_is_refused() {
        let desk = desk_with(vec![]);
        let exchange = desk.send_message(PHONE, "Brakes squeak", None).unwrap();

        desk.escalate(&exchange.id).unwrap();
        assert!(matches!(
            desk.escalate(&exchange.id),
            Err(SupportError::AlreadyEscalated(_))
        ));
        assert_eq!(desk.list_tickets(None).unwrap().len(), 1);
    }

    #[test]
    fn test_failed_ticket_creation_unflags_chat() {
        struct RejectingTickets;

        impl TicketStore for RejectingTickets {
            fn create_ticket(&self, _draft: crate::types::TicketDraft) -> SupportResult<Ticket> {
                Err(SupportError::InvalidInput("ticket desk offline".to_string()))
            }
            fn list_tickets(&self, _phone: Option<&str>) -> SupportResult<Vec<Ticket>> {
                Ok(Vec::new())
            }
            fn update_ticket_status(&self, id: &str, _status: TicketStatus) -> SupportResult<Ticket> {
                Err(SupportError::TicketNotFound(id.to_string()))
            }
            fn respond_to_ticket(
                &self,
                ticket_id: &str,
                _draft: ResponseDraft,
            ) -> SupportResult<TicketResponse> {
                Err(SupportError::TicketNotFound(ticket_id.to_string()))
            }
            fn list_responses(&self, ticket_id: &str) -> SupportResult<Vec<TicketResponse>> {
                Err(SupportError::TicketNotFound(ticket_id.to_string()))
            }
        }

        let store = Arc::new(JsonlStore::with_data(faqs(), vec![]));
        let desk = SupportDesk::new(store.clone(), store.clone(), Arc::new(RejectingTickets), store);
        let exchange = desk.send_message(PHONE, "Brakes squeak", None).unwrap();

        assert!(desk.escalate(&exchange.id).is_err());
        assert!(!desk.chat_history(PHONE).unwrap()[0].is_unsatisfied);
    }

    #[test]
    fn test_ticket_views_carry_chat_and_responses() {
        let desk = desk_with(vec![]);
        let exchange = desk
            .send_message(PHONE, "", Some("https://files.example/crack.jpg".to_string()))
            .unwrap();
        let ticket = desk.escalate(&exchange.id).unwrap().ticket;

        let views = desk.ticket_views(Some(PHONE)).unwrap();
        assert_eq!(views.len(), 1);
        let chat = views[0].chat.as_ref().unwrap();
        assert_eq!(chat.question, "File uploaded");
        assert_eq!(chat.file_url.as_deref(), Some("https://files.example/crack.jpg"));

        let reply = ResponseDraft {
            admin_phone: "+15550999".to_string(),
            response_text: Some("Please send the frame number".to_string()),
            response_file_url: None,
        };
        desk.respond_to_ticket(&ticket.id, reply).unwrap();
        assert_eq!(desk.ticket_responses(&ticket.id).unwrap().len(), 1);
        assert_eq!(
            desk.ticket_views(None).unwrap()[0].ticket.status,
            TicketStatus::InProgress
        );
    }

    #[test]
    fn test_attachment_only_message() {
        let desk = desk_with(vec![]);
        let exchange = desk
            .send_message(PHONE, "", Some("https://files.example/photo.jpg".to_string()))
            .unwrap();
        assert_eq!(exchange.question, "File uploaded");
        assert_eq!(exchange.bot_response.as_deref(), Some(GENERIC_FALLBACK));
    }
}
