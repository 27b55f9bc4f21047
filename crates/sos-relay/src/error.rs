//! Error types for the relay client.

use sos_controller::DispatchError;
use thiserror::Error;

/// Errors that can occur when talking to the relay endpoint.
#[derive(Debug, Error)]
pub enum RelayError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay responded with a non-success status.
    #[error("relay error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The relay responded with a body we could not interpret.
    #[error("malformed relay response: {0}")]
    MalformedResponse(String),
}

impl From<RelayError> for DispatchError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Http(e) => DispatchError::Network(e.to_string()),
            RelayError::Server { status, message } => DispatchError::Server { status, message },
            RelayError::MalformedResponse(msg) => DispatchError::MalformedResponse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_maps_to_dispatch_server() {
        let err = RelayError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        let dispatch: DispatchError = err.into();
        assert!(matches!(
            dispatch,
            DispatchError::Server { status: 500, .. }
        ));
    }

    #[test]
    fn test_malformed_maps_to_dispatch_malformed() {
        let err = RelayError::MalformedResponse("not json".to_string());
        let dispatch: DispatchError = err.into();
        assert!(matches!(dispatch, DispatchError::MalformedResponse(_)));
    }
}
