//! Reverse geocoding HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::LocationError;

/// Configuration for the reverse geocoding service.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL of a Nominatim-compatible service.
    pub base_url: String,
    /// User agent sent with every request (required by public Nominatim).
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeocoderConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Get the reverse lookup URL for a coordinate pair.
    pub fn reverse_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/reverse?format=jsonv2&lat={}&lon={}",
            self.base_url, latitude, longitude
        )
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "trace-app".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Reverse response address fields we care about.
#[derive(Debug, Deserialize)]
struct ReverseAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

/// Reverse geocoding response.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<ReverseAddress>,
}

/// Client for turning coordinates into a human-readable place name.
#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    http: Client,
    config: GeocoderConfig,
}

impl ReverseGeocoder {
    /// Create a geocoder with the given configuration.
    pub fn new(config: GeocoderConfig) -> Result<Self, LocationError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, config })
    }

    /// Create a geocoder against the default public service.
    pub fn with_defaults() -> Result<Self, LocationError> {
        Self::new(GeocoderConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Resolve a "locality, country" display name for a coordinate pair.
    ///
    /// Falls back from city to town, village, then state. Returns
    /// "Unknown, {country}" when no locality field is present.
    pub async fn display_name(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, LocationError> {
        let url = self.config.reverse_url(latitude, longitude);
        debug!(lat = latitude, lon = longitude, "Reverse geocoding");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LocationError::MalformedResponse(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body: ReverseResponse = response
            .json()
            .await
            .map_err(|e| LocationError::MalformedResponse(e.to_string()))?;

        let address = body
            .address
            .ok_or_else(|| LocationError::MalformedResponse("no address in response".into()))?;

        Ok(format_display_name(&address))
    }
}

/// Format "{locality}, {country}" from the address fields.
fn format_display_name(address: &ReverseAddress) -> String {
    let locality = address
        .city
        .as_deref()
        .or(address.town.as_deref())
        .or(address.village.as_deref())
        .or(address.state.as_deref())
        .unwrap_or("Unknown");

    match address.country.as_deref() {
        Some(country) => format!("{}, {}", locality, country),
        None => locality.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_url() {
        let config = GeocoderConfig::new("http://localhost:7070");
        assert_eq!(
            config.reverse_url(19.0760, 72.8777),
            "http://localhost:7070/reverse?format=jsonv2&lat=19.076&lon=72.8777"
        );
    }

    #[test]
    fn test_format_prefers_city() {
        let address = ReverseAddress {
            city: Some("Mumbai".into()),
            town: Some("Andheri".into()),
            village: None,
            state: Some("Maharashtra".into()),
            country: Some("India".into()),
        };
        assert_eq!(format_display_name(&address), "Mumbai, India");
    }

    #[test]
    fn test_format_falls_back_to_state() {
        let address = ReverseAddress {
            city: None,
            town: None,
            village: None,
            state: Some("Maharashtra".into()),
            country: Some("India".into()),
        };
        assert_eq!(format_display_name(&address), "Maharashtra, India");
    }

    #[test]
    fn test_format_unknown_locality() {
        let address = ReverseAddress {
            city: None,
            town: None,
            village: None,
            state: None,
            country: Some("India".into()),
        };
        assert_eq!(format_display_name(&address), "Unknown, India");
    }

    #[test]
    fn test_format_no_country() {
        let address = ReverseAddress {
            city: Some("Mumbai".into()),
            town: None,
            village: None,
            state: None,
            country: None,
        };
        assert_eq!(format_display_name(&address), "Mumbai");
    }

    #[test]
    fn test_parse_reverse_response() {
        let json = r#"{"place_id": 42, "address": {"city": "Kyoto", "country": "Japan"}}"#;
        let parsed: ReverseResponse = serde_json::from_str(json).unwrap();
        let address = parsed.address.unwrap();
        assert_eq!(address.city.as_deref(), Some("Kyoto"));
        assert_eq!(address.country.as_deref(), Some("Japan"));
    }
}
