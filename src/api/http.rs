//! HTTP server setup with Axum

use std::sync::Arc;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{chat, faqs, orders, tickets};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for the chat widget
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Chat
        .route("/api/chat", post(chat::send_message))
        .route("/api/chat/classify", post(chat::classify))
        .route("/api/chat/escalate", post(chat::escalate))
        .route("/api/chats", get(chat::history))
        // Records
        .route("/api/faqs", get(faqs::list_faqs).post(faqs::upsert_faq))
        .route("/api/faqs/match", post(faqs::match_faq))
        .route("/api/faqs/:id", delete(faqs::delete_faq))
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/:phone", get(orders::list_orders))
        .route("/api/tickets", get(tickets::list_tickets))
        .route("/api/tickets/:id/status", put(tickets::update_status))
        .route(
            "/api/tickets/:id/responses",
            get(tickets::list_responses).post(tickets::respond_to_ticket),
        )
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
