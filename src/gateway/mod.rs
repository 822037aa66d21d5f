//! Axum-based HTTP gateway with proper HTTP/1.1 compliance, body limits, and timeouts.
//!
//! Routes:
//! - `POST /strainers`: strain one chat message
//! - `GET /health`: liveness plus cache size
//!
//! Every error response is JSON of the form `{"error": "..."}`.

mod handlers;
mod server;

pub use server::{router, run_gateway, run_gateway_with_listener};

use crate::service::Strainer;

/// Maximum request body size (64KB) -- prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s) -- prevents slow-loris attacks
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub strainer: Strainer,
}

/// Strain request body
#[derive(Debug, serde::Deserialize)]
pub struct StrainRequest {
    pub message: String,
}
