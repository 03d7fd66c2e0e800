//! HTTP request handlers for the vitrine API
//!
//! Implements the hello endpoint, the visualization catalog endpoint,
//! and the shared preflight responder.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::core::state::AppState;
use crate::core::types::{HelloResponse, GREETING};

/// Hello handler
///
/// Connectivity check for the frontend. Always succeeds.
///
/// # Returns
///
/// JSON response with the fixed greeting and status "success"
pub async fn hello_handler() -> impl IntoResponse {
    Json(HelloResponse {
        message: GREETING.to_string(),
        status: "success".to_string(),
    })
}

/// Visualization catalog handler
///
/// Returns the cards discovered at startup, truncated to the
/// configured maximum. Never fails; an empty catalog yields `[]`.
///
/// # Arguments
///
/// * `state` - Shared application state
pub async fn visualizations_handler(State(state): State<AppState>) -> impl IntoResponse {
    let cards = state.catalog.first(state.config.catalog.max_cards).to_vec();
    Json(cards)
}

/// CORS preflight handler
///
/// Responds to `OPTIONS` with an empty 200; the CORS layer supplies
/// the access-control headers.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}
