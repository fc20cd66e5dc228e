//! REST API module for HTTP endpoints
//!
//! - `POST /api/chat` - answer a chat message
//! - `POST /api/chat/classify` - intent of a message
//! - `POST /api/chat/escalate` - open a ticket for a stored chat
//! - `GET /api/chats?phone=` - chat history for a phone number
//! - `GET|POST /api/faqs`, `DELETE /api/faqs/:id` - FAQ admin
//! - `POST /api/faqs/match` - scored FAQ match for a message
//! - `GET /api/orders/:phone`, `POST /api/orders` - order admin
//! - `GET /api/tickets`, `PUT /api/tickets/:id/status` - ticket admin
//! - `GET|POST /api/tickets/:id/responses` - admin replies to a ticket

pub mod chat;
pub mod faqs;
pub mod orders;
pub mod tickets;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::SupportError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "CONFLICT".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Map an engine error to an HTTP response
pub fn error_response(err: SupportError) -> Response {
    let (status, body) = match &err {
        SupportError::InvalidInput(_) => (StatusCode::BAD_REQUEST, ApiError::bad_request(err.to_string())),
        SupportError::TicketNotFound(_) | SupportError::ChatNotFound(_) => {
            (StatusCode::NOT_FOUND, ApiError::not_found(err.to_string()))
        }
        SupportError::AlreadyEscalated(_) => (StatusCode::CONFLICT, ApiError::conflict(err.to_string())),
        _ => {
            tracing::error!(error = %err, "request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, ApiError::internal(err.to_string()))
        }
    };
    (status, Json(body)).into_response()
}

/// 200 with `data`, or the mapped error
pub fn respond<T: Serialize>(result: Result<T, SupportError>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::new(data))).into_response(),
        Err(e) => error_response(e),
    }
}

/// 200 with a list and its length, or the mapped error
pub fn respond_list<T: Serialize>(result: Result<Vec<T>, SupportError>) -> Response {
    match result {
        Ok(items) => {
            let total = items.len();
            (StatusCode::OK, Json(ApiResponse::with_total(items, total))).into_response()
        }
        Err(e) => error_response(e),
    }
}
