//! SMS provider client library.
//!
//! This crate provides the relay server's client for the hosted SMS
//! provider. It supports:
//!
//! - Sending a text message to a phone number
//! - Mapping provider rejections into typed errors
//!
//! The relay performs no business logic of its own; this client is the
//! only thing it calls.
//!
//! # Example
//!
//! ```no_run
//! use sms_gateway::{SmsClient, SmsConfig, SmsSender};
//!
//! # async fn example() -> Result<(), sms_gateway::SmsError> {
//! let config = SmsConfig::from_env()?;
//! let client = SmsClient::new(config)?;
//!
//! let receipt = client.send_sms("+919142016901", "EMERGENCY ALERT!").await?;
//! println!("Provider accepted: {}", receipt.message_id);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::SmsClient;
pub use config::SmsConfig;
pub use error::SmsError;
pub use types::{SmsReceipt, SmsSender};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
