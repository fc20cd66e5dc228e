//! Chat endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{respond, respond_list, ApiResponse};
use crate::api::state::AppState;

/// Body of `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,
}

/// Body of `POST /api/chat/classify`
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

/// Body of `POST /api/chat/escalate`
#[derive(Debug, Deserialize)]
pub struct EscalateRequest {
    #[serde(rename = "chatId")]
    pub chat_id: String,
}

/// Query parameters for `GET /api/chats`
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub phone: String,
}

/// POST /api/chat - Answer one chat message
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    respond(state.desk.send_message(&req.phone, &req.message, req.file_url))
}

/// POST /api/chat/classify - Intent of a message, without answering it
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> impl IntoResponse {
    Json(ApiResponse::new(state.desk.classify(&req.message)))
}

/// POST /api/chat/escalate - Flag a stored chat as unsatisfying and open a ticket
pub async fn escalate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EscalateRequest>,
) -> impl IntoResponse {
    respond(state.desk.escalate(&req.chat_id))
}

/// GET /api/chats?phone= - Chat history, oldest first
pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    respond_list(state.desk.chat_history(&params.phone))
}
