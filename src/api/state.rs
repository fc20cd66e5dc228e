//! Shared HTTP application state

use std::sync::Arc;

use crate::desk::SupportDesk;
use crate::store::JsonlStore;

/// Shared application state for request handlers
pub struct AppState {
    /// Chat engine used by the chat and ticket endpoints
    pub desk: Arc<SupportDesk>,

    /// Backing store, for the admin endpoints that edit records directly
    pub store: Arc<JsonlStore>,
}

impl AppState {
    /// Create state over a store, with a desk reading from the same store
    pub fn new(store: Arc<JsonlStore>) -> Self {
        let desk = Arc::new(SupportDesk::from_store(Arc::clone(&store)));
        Self { desk, store }
    }

    pub fn with_desk(desk: Arc<SupportDesk>, store: Arc<JsonlStore>) -> Self {
        Self { desk, store }
    }
}
