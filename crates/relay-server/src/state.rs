//! Application state shared across handlers.

use std::sync::Arc;

use assistant_core::Assistant;
use sms_gateway::SmsSender;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// SMS provider client.
    pub sms: Arc<dyn SmsSender>,
    /// Travel assistant.
    pub assistant: Arc<dyn Assistant>,
}

impl AppState {
    /// Create new application state.
    pub fn new(sms: Arc<dyn SmsSender>, assistant: Arc<dyn Assistant>) -> Self {
        Self { sms, assistant }
    }
}
