//! FAQ endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error_response, respond, respond_list, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{FaqEntry, MatchResult, ScoredCandidate};

/// Body of `POST /api/faqs/match`
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub message: String,
}

/// Query parameters for `POST /api/faqs/match`
#[derive(Debug, Deserialize)]
pub struct MatchParams {
    /// Number of top candidates to include
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

/// Match outcome with the scores behind it
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub result: MatchResult,
    pub terms: Vec<String>,
    pub synonyms: Vec<String>,
    pub threshold: i64,
    /// Highest scores first; ties keep FAQ order
    pub candidates: Vec<ScoredCandidate>,
}

/// GET /api/faqs - List all FAQ entries
pub async fn list_faqs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond_list(state.desk.faqs())
}

/// POST /api/faqs - Add or replace an FAQ entry
pub async fn upsert_faq(
    State(state): State<Arc<AppState>>,
    Json(entry): Json<FaqEntry>,
) -> impl IntoResponse {
    if entry.id.trim().is_empty() {
        let error = ApiError::bad_request("FAQ id is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }
    respond(state.store.upsert_faq(entry))
}

/// DELETE /api/faqs/:id - Remove an FAQ entry
pub async fn delete_faq(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete_faq(&id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => {
            let error = ApiError::not_found(format!("FAQ '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/faqs/match - Score the FAQ set against a message
pub async fn match_faq(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MatchParams>,
    Json(req): Json<MatchRequest>,
) -> impl IntoResponse {
    let entries = match state.desk.faqs() {
        Ok(entries) => entries,
        Err(e) => return error_response(e),
    };

    let matcher = state.desk.matcher();
    let query = matcher.prepare(&req.message);
    let mut candidates = matcher.score_all(&query, &entries);
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(params.limit.min(100));

    let report = MatchReport {
        result: matcher.match_faq(&req.message, &entries),
        threshold: query.threshold(),
        terms: query.terms,
        synonyms: query.synonyms,
        candidates,
    };
    (StatusCode::OK, Json(ApiResponse::new(report))).into_response()
}
