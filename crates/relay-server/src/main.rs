//! SOS relay server for the TRACE app.
//!
//! Accepts SOS payloads from the mobile app, forwards them to the SMS
//! provider, and answers travel-assistant chat questions.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use assistant_core::Assistant;
use mock_assistant::EchoAssistant;
use sms_gateway::SmsClient;
use sonar_assistant::SonarAssistant;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting relay server");

    // Connect to the SMS provider
    let sms = SmsClient::from_env()?;

    // Build the assistant; fall back to an echo bot when no API key is set
    let assistant: Arc<dyn Assistant> = match SonarAssistant::from_env() {
        Ok(assistant) => Arc::new(assistant),
        Err(err) => {
            warn!(error = %err, "Assistant unavailable, falling back to echo");
            Arc::new(EchoAssistant::with_prefix("You asked: "))
        }
    };

    // Build application state
    let state = AppState::new(Arc::new(sms), assistant);

    // Build router; the mobile app calls from another origin
    let app = routes::router()
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Relay server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
