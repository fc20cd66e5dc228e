//! Utility functions and helpers
//!
//! This module contains timestamp helpers, id generation and atomic file writes.

pub mod atomic;
pub mod ids;
pub mod time;

pub use atomic::atomic_write;
pub use ids::next_id;
pub use time::{current_timestamp_ms, format_order_date, now_rfc3339, parse_timestamp};
