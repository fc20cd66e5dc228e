//! Ticket endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{respond, respond_list};
use crate::api::state::AppState;
use crate::types::{ResponseDraft, TicketStatus};

/// Query parameters for listing tickets
#[derive(Debug, Deserialize)]
pub struct ListTicketsParams {
    /// Only tickets raised from this phone number
    pub phone: Option<String>,
}

/// Body of `PUT /api/tickets/:id/status`
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: TicketStatus,
}

/// GET /api/tickets - List tickets with their chat, newest first
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTicketsParams>,
) -> impl IntoResponse {
    respond_list(state.desk.ticket_views(params.phone.as_deref()))
}

/// PUT /api/tickets/:id/status - Move a ticket through its lifecycle
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> impl IntoResponse {
    respond(state.desk.update_ticket_status(&id, update.status))
}

/// POST /api/tickets/:id/responses - Reply to a ticket
pub async fn respond_to_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(draft): Json<ResponseDraft>,
) -> impl IntoResponse {
    respond(state.desk.respond_to_ticket(&id, draft))
}

/// GET /api/tickets/:id/responses - Replies to a ticket, oldest first
pub async fn list_responses(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    respond_list(state.desk.ticket_responses(&id))
}
