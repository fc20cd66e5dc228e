//! Order endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{respond, respond_list, ApiError};
use crate::api::state::AppState;
use crate::store::OrderStore;
use crate::types::Order;

/// GET /api/orders/:phone - Orders for a phone number, newest first
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Path(phone): Path<String>,
) -> impl IntoResponse {
    respond_list(state.store.lookup_orders(&phone))
}

/// POST /api/orders - Record an order
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(order): Json<Order>,
) -> impl IntoResponse {
    if order.order_id.trim().is_empty() || order.phone_number.trim().is_empty() {
        let error = ApiError::bad_request("orderId and phoneNumber are required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }
    respond(state.store.add_order(order))
}
