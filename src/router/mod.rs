//! Intent routing
//!
//! Decides whether an utterance goes to the order store or to FAQ matching,
//! and renders order-status replies.

mod intent;
mod order_status;

pub use intent::{classify, extract_order_id, PLACEMENT_PHRASES, STATUS_KEYWORDS};
pub use order_status::{
    describe_order, format_order_reply, LOOKUP_FAILURE_REPLY, NO_ORDERS_REPLY,
};

use crate::store::OrderStore;

/// Look up the caller's orders and render the reply.
///
/// Store failures never propagate; they become [`LOOKUP_FAILURE_REPLY`].
pub fn answer_order_query(store: &dyn OrderStore, phone: &str, order_id: Option<&str>) -> String {
    match store.lookup_orders(phone) {
        Ok(orders) => {
            tracing::debug!(phone, count = orders.len(), ?order_id, "orders found");
            format_order_reply(&orders, order_id)
        }
        Err(e) => {
            tracing::warn!(phone, error = %e, "order lookup failed");
            LOOKUP_FAILURE_REPLY.to_string()
        }
    }
}
