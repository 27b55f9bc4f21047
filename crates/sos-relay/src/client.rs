//! Relay endpoint HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sos_controller::{DispatchError, SosDispatcher, SosReceipt, SosRequest};
use tracing::debug;

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Response body from the relay's send-sos route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendSosResponse {
    #[serde(default)]
    success: bool,
    message_id: Option<String>,
    error: Option<String>,
}

/// Client for the TRACE SOS relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    config: RelayConfig,
}

impl RelayClient {
    /// Create a client with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, RelayError> {
        Self::new(RelayConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Check whether the relay server is reachable.
    pub async fn health_check(&self) -> Result<bool, RelayError> {
        let url = format!("{}/health", self.config.base_url);
        let response = self.http.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    /// Post an SOS to the relay endpoint.
    pub async fn send_sos(&self, request: &SosRequest) -> Result<SosReceipt, RelayError> {
        let url = self.config.send_sos_url();
        debug!(url = %url, recipient = %request.recipient_phone_number, "Posting SOS to relay");

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<SendSosResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            return Err(RelayError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SendSosResponse = serde_json::from_str(&body)
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;

        if !parsed.success {
            return Err(RelayError::Server {
                status: status.as_u16(),
                message: parsed
                    .error
                    .unwrap_or_else(|| "relay reported failure".to_string()),
            });
        }

        Ok(SosReceipt {
            message_id: parsed.message_id,
        })
    }
}

#[async_trait]
impl SosDispatcher for RelayClient {
    async fn dispatch(&self, request: SosRequest) -> Result<SosReceipt, DispatchError> {
        self.send_sos(&request).await.map_err(DispatchError::from)
    }
}
