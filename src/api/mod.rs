//! HTTP API layer: system endpoints served next to the WebSocket upgrade.

pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the router with all plain HTTP endpoints.
pub fn build_router() -> Router<AppState> {
    handlers::routes()
}
