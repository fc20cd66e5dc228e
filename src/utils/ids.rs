//! Identifier generation for chat exchanges and tickets

use std::sync::atomic::{AtomicU64, Ordering};

use super::time::current_timestamp_ms;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Unique id within this process: `{prefix}-{millis}-{sequence}`
pub fn next_id(prefix: &str) -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}-{}", prefix, current_timestamp_ms(), seq)
}
