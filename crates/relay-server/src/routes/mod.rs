//! Route handlers for the relay server.

pub mod chat;
pub mod health;
pub mod sos;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Probe
        .route("/", get(root))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/send-sos", post(sos::send_sos))
        .route("/chat", post(chat::chat))
}

/// Root probe.
async fn root() -> &'static str {
    "Backend server is running."
}
