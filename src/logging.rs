//! Tracing initialization

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive; an invalid directive falls back to
/// `info`. Only the first call has any effect.
pub fn init_tracing(filter: &str, json: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);

        let result = if json {
            registry.with(fmt::layer().json().with_target(true)).try_init()
        } else {
            registry.with(fmt::layer().with_target(true)).try_init()
        };

        if let Err(e) = result {
            eprintln!("tracing already initialized: {}", e);
        }
    });
}
