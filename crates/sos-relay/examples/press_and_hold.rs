//! Press-and-hold SOS example against a running relay server.
//!
//! This example simulates the SOS screen: it obtains a location snapshot,
//! arms the countdown, holds through the three ticks, and prints each
//! state transition until the dispatch settles.
//!
//! Run with: cargo run -p sos-relay --example press_and_hold
//!
//! Configuration via .env file or environment variables:
//!   TRACE_RELAY_URL          - Relay server base URL (default: http://localhost:5000)
//!   TRACE_EMERGENCY_CONTACT  - Emergency contact number (default: built-in)

use std::sync::Arc;

use location::FixedLocationProvider;
use sos_controller::{SosConfig, SosController, SosPhase};
use sos_relay::{RelayClient, RelayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let relay_config = RelayConfig::from_env();
    println!("Relay: {}", relay_config.base_url);
    let client = RelayClient::new(relay_config)?;

    if !client.health_check().await.unwrap_or(false) {
        println!("Warning: relay server not reachable, dispatch will fail.");
    }

    let controller = SosController::new(SosConfig::from_env(), Arc::new(client));
    let mut updates = controller.subscribe();

    // Demo fix; a real app feeds the platform location service in here.
    let provider = FixedLocationProvider::new(19.0760, 72.8777, "Mumbai, India");
    controller.activate(&provider).await;
    println!("Location: {}", controller.snapshot().location_text);

    println!("Press and hold...");
    controller.press_start();

    // Hold until the dispatch settles.
    loop {
        updates.changed().await?;
        let snapshot = updates.borrow().clone();
        match &snapshot.phase {
            SosPhase::Arming { remaining } => println!("  countdown: {}", remaining),
            SosPhase::Dispatching => println!("  {}", snapshot.status_text()),
            SosPhase::Sent | SosPhase::Failed { .. } => {
                println!("  {}", snapshot.status_text());
                break;
            }
            SosPhase::Idle => {}
        }
    }

    Ok(())
}
