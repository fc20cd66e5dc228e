//! Integration tests for the Scooter Support chat engine

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use scooter_support::store::JsonlStore;
use scooter_support::types::{FaqEntry, Intent, ResponseDraft, TicketStatus};
use scooter_support::{
    classify, match_faq, ChatStore, SupportDesk, SupportError, TicketStore, GENERIC_FALLBACK,
    LOOKUP_FAILURE_REPLY, NO_ORDERS_REPLY,
};
use tempfile::TempDir;

const SEED: &str = r#"{"type":"faq","id":"maint","question":"What is the recommended maintenance schedule?","response":"Every 500 km or 3 months."}
{"type":"faq","id":"delay","question":"Why was my service delayed?","response":"Service appointments can be delayed by parts shortages."}
{"type":"faq","id":"place","question":"How do I place an order?","response":"Choose a model on our website and check out."}
{"type":"faq","id":"battery","question":"How long does the battery last?","response":"A full charge lasts about 60 km."}
{"type":"order","orderId":"ORD4821B","product":"Scooter X","status":"Shipped","createdAt":"2024-01-01","phoneNumber":"555-0100"}
{"type":"order","orderId":"ORD1001","product":"Scooter Lite","status":"Processing","createdAt":"2024-02-10T09:30:00Z","phoneNumber":"555-0200"}
{"type":"order","orderId":"ORD1002","product":"Helmet","status":"Delivered","createdAt":"2024-03-15T12:00:00Z","phoneNumber":"555-0200"}
"#;

fn setup_test_desk() -> (SupportDesk, Arc<JsonlStore>, TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("support.jsonl");
    fs::write(&path, SEED).unwrap();

    let store = Arc::new(JsonlStore::open(path.clone()).unwrap());
    let desk = SupportDesk::from_store(Arc::clone(&store));
    (desk, store, dir, path)
}

#[test]
fn test_single_order_status() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    let reply = desk
        .classify_and_respond("Where is my order ORD4821B?", "555-0100")
        .unwrap();

    assert_eq!(
        reply,
        "Your order ORD4821B for Scooter X is currently: Shipped. Order placed on 1/1/2024."
    );
}

#[test]
fn test_multiple_orders_listed_newest_first() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    let reply = desk
        .classify_and_respond("Any order update for me?", "555-0200")
        .unwrap();

    assert_eq!(
        reply,
        "Here are all your orders:\n\nORD1002 - Helmet (Delivered)\nORD1001 - Scooter Lite (Processing)"
    );
}

#[test]
fn test_explicit_order_id_selects_one() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    let reply = desk.classify_and_respond("status of ord1001", "555-0200").unwrap();
    assert!(reply.starts_with("Your order ORD1001 for Scooter Lite is currently: Processing."));
}

#[test]
fn test_unknown_order_id_lists_all() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    let reply = desk.classify_and_respond("Where is ORD9999?", "555-0200").unwrap();
    assert!(reply.starts_with("I couldn't find order ORD9999"));
    assert!(reply.contains("ORD1002 - Helmet (Delivered)"));
    assert!(reply.contains("ORD1001 - Scooter Lite (Processing)"));
}

#[test]
fn test_no_orders_for_phone() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    let reply = desk.classify_and_respond("tracking please", "555-9999").unwrap();
    assert_eq!(reply, NO_ORDERS_REPLY);
    assert_ne!(reply, LOOKUP_FAILURE_REPLY);
}

#[test]
fn test_placement_question_goes_to_faq() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    assert_eq!(
        classify("How to place an order like ORD123?").intent,
        Intent::OrderPlacementHelp
    );

    let reply = desk
        .classify_and_respond("How do I place an order?", "555-0100")
        .unwrap();
    assert_eq!(reply, "Choose a model on our website and check out.");
}

#[test]
fn test_maintenance_question_prefers_schedule_faq() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    let reply = desk
        .classify_and_respond("What is the maintenance schedule interval?", "555-0100")
        .unwrap();
    assert_eq!(reply, "Every 500 km or 3 months.");
}

#[test]
fn test_delay_report_prefers_delay_faq() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    let reply = desk
        .classify_and_respond("My service appointment was delayed", "555-0100")
        .unwrap();
    assert_eq!(reply, "Service appointments can be delayed by parts shortages.");
}

#[test]
fn test_unusable_utterance_gets_fallback() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    assert_eq!(desk.classify_and_respond("xyz qq", "555-0100").unwrap(), GENERIC_FALLBACK);
    assert_eq!(desk.classify_and_respond("is it ok", "555-0100").unwrap(), GENERIC_FALLBACK);
}

#[test]
fn test_match_faq_without_store() {
    let entries = vec![FaqEntry::new(
        "battery",
        "How long does the battery last?",
        "About 60 km per charge.",
    )];

    assert_eq!(match_faq("battery lifetime question", &entries), "About 60 km per charge.");
    assert_eq!(match_faq("warranty", &entries), GENERIC_FALLBACK);
}

#[test]
fn test_malformed_faq_fails_fast() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("support.jsonl");
    fs::write(
        &path,
        r#"{"type":"faq","id":"broken","question":"What colors are available?"}
"#,
    )
    .unwrap();

    let store = Arc::new(JsonlStore::open(path).unwrap());
    let desk = SupportDesk::from_store(store);

    let err = desk
        .classify_and_respond("Which colors are available?", "555-0100")
        .unwrap_err();
    assert!(matches!(err, SupportError::InvalidFaq { ref id, .. } if id == "broken"));
}

#[test]
fn test_escalation_persists_ticket() {
    let (desk, _store, _dir, path) = setup_test_desk();

    let exchange = desk
        .send_message("555-0100", "My scooter makes a grinding noise when braking downhill at speed", None)
        .unwrap();
    let escalation = desk.escalate(&exchange.id).unwrap();

    assert!(escalation.exchange.is_unsatisfied);
    assert_eq!(escalation.ticket.status, TicketStatus::Open);
    assert!(escalation.ticket.title.ends_with("..."));
    assert_eq!(escalation.ticket.title.chars().count(), 53);

    // Reload from disk
    let reopened = JsonlStore::open(path).unwrap();
    let tickets = reopened.list_tickets(Some("555-0100")).unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].id, escalation.ticket.id);
    assert_eq!(tickets[0].chat_id, escalation.exchange.id);

    // Orders and FAQs survive the rewrite
    let reply = SupportDesk::from_store(Arc::new(reopened))
        .classify_and_respond("Where is my order ORD4821B?", "555-0100")
        .unwrap();
    assert!(reply.contains("Scooter X"));
}

#[test]
fn test_ticket_lifecycle() {
    let (desk, _store, _dir, _path) = setup_test_desk();

    let exchange = desk.send_message("555-0200", "", Some("https://files.example/photo.jpg".to_string())).unwrap();
    assert_eq!(exchange.question, "File uploaded");

    let ticket = desk.escalate(&exchange.id).unwrap().ticket;
    let updated = desk.update_ticket_status(&ticket.id, TicketStatus::Resolved).unwrap();
    assert_eq!(updated.status, TicketStatus::Resolved);

    let err = desk
        .update_ticket_status("ticket-missing", TicketStatus::InProgress)
        .unwrap_err();
    assert!(matches!(err, SupportError::TicketNotFound(_)));
}

#[test]
fn test_concurrent_chats() {
    let (desk, _store, _dir, _path) = setup_test_desk();
    let desk = Arc::new(desk);

    let mut handles = vec![];
    for i in 0..8 {
        let desk = Arc::clone(&desk);
        let handle = thread::spawn(move || {
            if i % 2 == 0 {
                desk.classify_and_respond("Where is my order ORD4821B?", "555-0100")
                    .unwrap()
            } else {
                desk.classify_and_respond("What is the maintenance schedule interval?", "555-0100")
                    .unwrap()
            }
        });
        handles.push(handle);
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let reply = handle.join().unwrap();
        if i % 2 == 0 {
            assert!(reply.contains("ORD4821B"));
        } else {
            assert_eq!(reply, "Every 500 km or 3 months.");
        }
    }
}

#[test]
fn test_history_and_admin_replies_survive_restart() {
    let (desk, _store, _dir, path) = setup_test_desk();

    let first = desk.send_message("555-0100", "Where is my order ORD4821B?", None).unwrap();
    let second = desk.send_message("555-0100", "My scooter beeps twice on startup", None).unwrap();
    let ticket = desk.escalate(&second.id).unwrap().ticket;

    let reply = ResponseDraft {
        admin_phone: "555-0999".to_string(),
        response_text: Some("Two beeps means low tyre pressure.".to_string()),
        response_file_url: None,
    };
    desk.respond_to_ticket(&ticket.id, reply).unwrap();

    let reopened = JsonlStore::open(path).unwrap();
    let history = reopened.chat_history("555-0100").unwrap();
    let ids: Vec<&str> = history.iter().map(|chat| chat.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);
    assert!(!history[0].is_unsatisfied);
    assert!(history[1].is_unsatisfied);

    assert_eq!(reopened.list_tickets(None).unwrap()[0].status, TicketStatus::InProgress);
    assert_eq!(reopened.list_responses(&ticket.id).unwrap().len(), 1);

    let restarted = SupportDesk::from_store(Arc::new(reopened));
    assert!(matches!(
        restarted.escalate(&second.id),
        Err(SupportError::AlreadyEscalated(_))
    ));
}
