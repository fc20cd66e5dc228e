//! API module for HTTP endpoints
//!
//! This module exposes the chat engine and its records over a REST API.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
