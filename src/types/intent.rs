//! Intent classification types

use serde::{Deserialize, Serialize};

/// What an utterance is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// "Where is my order", order ids, tracking questions
    OrderStatusQuery,
    /// "How do I place an order" style questions; answered from the FAQ
    OrderPlacementHelp,
    /// Everything else
    GeneralFaq,
}

impl Intent {
    /// Whether the order store should be consulted for this intent
    pub fn needs_order_lookup(&self) -> bool {
        matches!(self, Intent::OrderStatusQuery)
    }
}

/// Result of routing one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: Intent,
    /// First order id mentioned in the utterance, as the user wrote it
    #[serde(rename = "orderId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl Classification {
    pub fn new(intent: Intent, order_id: Option<String>) -> Self {
        Self { intent, order_id }
    }
}
