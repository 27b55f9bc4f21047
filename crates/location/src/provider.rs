//! The location provider trait and built-in providers.

use async_trait::async_trait;
use tracing::warn;

use crate::error::LocationError;
use crate::geocoder::ReverseGeocoder;
use crate::snapshot::LocationSnapshot;

/// A source of one-shot location snapshots.
///
/// Invoked once when the SOS screen becomes active. Implementations can
/// fail with [`LocationError::PermissionDenied`] or
/// [`LocationError::Unavailable`]; callers must tolerate both outcomes.
/// This trait is object-safe and can be used with `Box<dyn LocationProvider>`.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve the current location.
    async fn current_location(&self) -> Result<LocationSnapshot, LocationError>;
}

/// A provider that always returns a preset snapshot.
///
/// Useful for demos and for platforms where the device fix is injected
/// from outside the process.
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    snapshot: LocationSnapshot,
}

impl FixedLocationProvider {
    /// Create a provider returning the given coordinates and place name.
    pub fn new(latitude: f64, longitude: f64, display_name: impl Into<String>) -> Self {
        Self {
            snapshot: LocationSnapshot::new(latitude, longitude, display_name),
        }
    }

    /// Create a provider returning the given snapshot.
    pub fn from_snapshot(snapshot: LocationSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_location(&self) -> Result<LocationSnapshot, LocationError> {
        Ok(self.snapshot.clone())
    }
}

/// A provider that always fails with a permission error.
#[derive(Debug, Clone, Default)]
pub struct DeniedLocationProvider;

#[async_trait]
impl LocationProvider for DeniedLocationProvider {
    async fn current_location(&self) -> Result<LocationSnapshot, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

/// A provider that always fails because no fix is available.
#[derive(Debug, Clone, Default)]
pub struct UnavailableLocationProvider;

#[async_trait]
impl LocationProvider for UnavailableLocationProvider {
    async fn current_location(&self) -> Result<LocationSnapshot, LocationError> {
        Err(LocationError::Unavailable("no fix".to_string()))
    }
}

/// A provider that resolves the place name of an inner provider's fix
/// through a reverse geocoding service.
///
/// A geocoding failure downgrades the display name to "Location
/// unavailable" but keeps the coordinates, so an SOS can still be sent.
pub struct GeocodedLocationProvider<P> {
    inner: P,
    geocoder: ReverseGeocoder,
}

impl<P: LocationProvider> GeocodedLocationProvider<P> {
    /// Wrap the given provider with the given geocoder.
    pub fn new(inner: P, geocoder: ReverseGeocoder) -> Self {
        Self { inner, geocoder }
    }
}

#[async_trait]
impl<P: LocationProvider> LocationProvider for GeocodedLocationProvider<P> {
    async fn current_location(&self) -> Result<LocationSnapshot, LocationError> {
        let snapshot = self.inner.current_location().await?;

        match self
            .geocoder
            .display_name(snapshot.latitude, snapshot.longitude)
            .await
        {
            Ok(name) => Ok(snapshot.with_display_name(name)),
            Err(err) => {
                warn!(error = %err, "Reverse geocoding failed, keeping coordinates");
                Ok(snapshot.with_display_name("Location unavailable"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_provider() {
        let provider = FixedLocationProvider::new(19.0760, 72.8777, "Mumbai, India");
        let snapshot = provider.current_location().await.unwrap();
        assert_eq!(snapshot.latitude, 19.0760);
        assert_eq!(snapshot.longitude, 72.8777);
        assert_eq!(snapshot.display_name, "Mumbai, India");
    }

    #[tokio::test]
    async fn test_denied_provider() {
        let provider = DeniedLocationProvider;
        let err = provider.current_location().await.unwrap_err();
        assert!(matches!(err, LocationError::PermissionDenied));
        assert_eq!(err.display_text(), "Permission denied");
    }

    #[tokio::test]
    async fn test_unavailable_provider() {
        let provider = UnavailableLocationProvider;
        let err = provider.current_location().await.unwrap_err();
        assert!(matches!(err, LocationError::Unavailable(_)));
        assert_eq!(err.display_text(), "Location unavailable");
    }
}
