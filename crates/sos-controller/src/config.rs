//! Configuration for the SOS controller.

use std::env;

/// Default emergency contact number.
pub const DEFAULT_EMERGENCY_CONTACT: &str = "+919142016901";

/// Configuration for the SOS controller.
#[derive(Debug, Clone)]
pub struct SosConfig {
    /// Phone number the emergency message is sent to.
    pub emergency_contact: String,
}

impl SosConfig {
    /// Create a configuration with the given emergency contact.
    pub fn new(emergency_contact: impl Into<String>) -> Self {
        Self {
            emergency_contact: emergency_contact.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `TRACE_EMERGENCY_CONTACT` | Emergency contact number | built-in constant |
    pub fn from_env() -> Self {
        let emergency_contact = env::var("TRACE_EMERGENCY_CONTACT")
            .unwrap_or_else(|_| DEFAULT_EMERGENCY_CONTACT.to_string());

        Self { emergency_contact }
    }
}

impl Default for SosConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EMERGENCY_CONTACT)
    }
}
