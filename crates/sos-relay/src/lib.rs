//! SOS relay client library.
//!
//! This crate provides the app-side HTTP client for the TRACE relay
//! endpoint. The client implements [`sos_controller::SosDispatcher`], so it
//! plugs straight into the SOS trigger controller.
//!
//! # Example
//!
//! ```no_run
//! use sos_relay::{RelayClient, RelayConfig};
//! use sos_controller::SosRequest;
//!
//! # async fn example() -> Result<(), sos_relay::RelayError> {
//! let client = RelayClient::new(RelayConfig::default())?;
//!
//! let receipt = client
//!     .send_sos(&SosRequest {
//!         recipient_phone_number: "+919142016901".to_string(),
//!         message_body: "EMERGENCY ALERT!".to_string(),
//!         latitude: 19.0760,
//!         longitude: 72.8777,
//!     })
//!     .await?;
//! println!("Relay accepted: {:?}", receipt.message_id);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;

pub use client::RelayClient;
pub use config::RelayConfig;
pub use error::RelayError;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
