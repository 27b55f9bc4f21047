//! SMS provider HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::SmsConfig;
use crate::error::SmsError;
use crate::types::{SendParams, SendResponse, SmsReceipt, SmsSender};

/// Client for the hosted SMS provider.
#[derive(Clone)]
pub struct SmsClient {
    http: Client,
    config: SmsConfig,
}

impl SmsClient {
    /// Create a client with the given configuration.
    pub fn new(config: SmsConfig) -> Result<Self, SmsError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, SmsError> {
        Self::new(SmsConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &SmsConfig {
        &self.config
    }

    /// Send a text message to a recipient.
    pub async fn send(&self, to: &str, body: &str) -> Result<SmsReceipt, SmsError> {
        let url = self.config.send_url();
        let params = SendParams {
            to: to.to_string(),
            from: self.config.sender_id.clone(),
            body: body.to_string(),
        };

        debug!(to = %to, "Sending SMS via provider");

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Provider rejected send");
            return Err(SmsError::Provider {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: SendResponse = response.json().await?;

        if let Some(error) = parsed.error {
            return Err(SmsError::SendFailed(error));
        }

        let receipt = SmsReceipt {
            message_id: parsed.id.unwrap_or_default(),
            status: parsed.status.unwrap_or_else(|| "queued".to_string()),
        };

        info!(message_id = %receipt.message_id, "SMS accepted by provider");
        Ok(receipt)
    }
}

#[async_trait]
impl SmsSender for SmsClient {
    async fn send_sms(&self, to: &str, body: &str) -> Result<SmsReceipt, SmsError> {
        self.send(to, body).await
    }
}

impl std::fmt::Debug for SmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsClient")
            .field("base_url", &self.config.base_url)
            .field("sender_id", &self.config.sender_id)
            .finish()
    }
}
