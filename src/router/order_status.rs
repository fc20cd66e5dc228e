//! Order-status replies built from order-store results

use crate::types::Order;
use crate::utils::format_order_date;

/// Reply when the phone number has no orders
pub const NO_ORDERS_REPLY: &str = "I couldn't find any orders associated with your phone number. If you've recently placed an order, it may take a few minutes to appear in our system.";

/// Reply when the order store fails
pub const LOOKUP_FAILURE_REPLY: &str = "I'm having trouble checking your order status right now. Please try again or contact our support team.";

/// Describe one order in full
pub fn describe_order(order: &Order) -> String {
    format!(
        "Your order {} for {} is currently: {}. Order placed on {}.",
        order.order_id,
        order.product,
        order.status,
        format_order_date(&order.created_at)
    )
}

fn list_orders(orders: &[Order]) -> String {
    orders
        .iter()
        .map(Order::summary_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the reply for an order-status question.
///
/// `orders` must already be in display order (newest first).
/// `requested_id` is the order id the user mentioned, if any.
pub fn format_order_reply(orders: &[Order], requested_id: Option<&str>) -> String {
    if orders.is_empty() {
        return NO_ORDERS_REPLY.to_string();
    }

    match requested_id {
        Some(id) => match orders
            .iter()
            .find(|order| order.order_id.eq_ignore_ascii_case(id))
        {
            Some(order) => describe_order(order),
            None => format!(
                "I couldn't find order {} associated with your phone number. Here are all your orders:\n\n{}",
                id,
                list_orders(orders)
            ),
        },
        None if orders.len() == 1 => describe_order(&orders[0]),
        None => format!("Here are all your orders:\n\n{}", list_orders(orders)),
    }
}
