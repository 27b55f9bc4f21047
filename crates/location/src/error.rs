//! Error types for location lookups.

use thiserror::Error;

/// Errors that can occur when resolving the current location.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The user declined the location permission prompt.
    #[error("location permission denied")]
    PermissionDenied,

    /// No location fix could be obtained.
    #[error("location unavailable: {0}")]
    Unavailable(String),

    /// HTTP request to the geocoding service failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoding service returned a response we could not interpret.
    #[error("malformed geocoder response: {0}")]
    MalformedResponse(String),
}

impl LocationError {
    /// Text shown in place of a location name when lookup fails.
    ///
    /// Matches the header text on the SOS screen.
    pub fn display_text(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => "Permission denied",
            _ => "Location unavailable",
        }
    }
}
