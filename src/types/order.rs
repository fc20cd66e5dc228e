//! Order types returned by the order store

use serde::{Deserialize, Serialize};

/// A customer order as delivered by the order store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub product: String,
    pub status: String,
    /// Creation time as stored (RFC 3339 or `YYYY-MM-DD`)
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
}

impl Order {
    /// Create a new order owned by `phone_number`
    pub fn new(
        order_id: impl Into<String>,
        product: impl Into<String>,
        status: impl Into<String>,
        created_at: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            product: product.into(),
            status: status.into(),
            created_at: created_at.into(),
            phone_number: phone_number.into(),
        }
    }

    /// One-line summary used when several orders are listed
    pub fn summary_line(&self) -> String {
        format!("{} - {} ({})", self.order_id, self.product, self.status)
    }
}
