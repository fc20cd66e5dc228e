//! Intent classification from raw utterance text

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Classification, Intent};

/// Phrases that mark a question about *placing* an order
pub const PLACEMENT_PHRASES: &[&str] = &[
    "how to",
    "how do",
    "how can",
    "how should",
    "place order",
    "make order",
    "book order",
    "buy",
];

/// Keywords that mark a question about an existing order
pub const STATUS_KEYWORDS: &[&str] = &[
    "order status",
    "my order",
    "delivery status",
    "shipment",
    "shipped",
    "tracking",
    "where is my",
    "order update",
];

// ASCII-only digits and word boundaries: "ORD123é" still yields ORD123
static ORDER_ID: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i-u)\bORD[0-9]+[A-Z0-9]*\b").ok());

/// First order id in the text, as written
pub fn extract_order_id(text: &str) -> Option<&str> {
    ORDER_ID.as_ref()?.find(text).map(|m| m.as_str())
}

fn asks_how_to_place(lowered: &str) -> bool {
    PLACEMENT_PHRASES.iter().any(|phrase| lowered.contains(phrase))
        || (lowered.contains("place") && (lowered.contains("how") || lowered.contains("should")))
}

fn asks_order_status(lowered: &str) -> bool {
    STATUS_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Classify an utterance.
///
/// Placement questions win over everything, so "how to place ORD123" is
/// answered from the FAQ rather than the order store.
pub fn classify(utterance: &str) -> Classification {
    let lowered = utterance.to_lowercase();
    let order_id = extract_order_id(utterance).map(str::to_string);

    let intent = if asks_how_to_place(&lowered) {
        Intent::OrderPlacementHelp
    } else if asks_order_status(&lowered) || order_id.is_some() {
        Intent::OrderStatusQuery
    } else {
        Intent::GeneralFaq
    };

    Classification::new(intent, order_id)
}
