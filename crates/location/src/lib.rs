//! Location services for TRACE.
//!
//! This crate provides the location contract used by the SOS screen:
//!
//! - [`LocationProvider`] - The trait that yields a one-shot location snapshot
//! - [`LocationSnapshot`] - Coordinates plus a human-readable place name
//! - [`ReverseGeocoder`] - HTTP client that turns coordinates into a place name
//! - Fixed and failing providers for demos and tests
//!
//! The snapshot is fetched once when the SOS screen becomes active; there is
//! no update loop. A provider can fail with [`LocationError::PermissionDenied`]
//! or [`LocationError::Unavailable`], and callers must tolerate both.
//!
//! # Example
//!
//! ```no_run
//! use location::{FixedLocationProvider, LocationProvider};
//!
//! # async fn example() -> Result<(), location::LocationError> {
//! let provider = FixedLocationProvider::new(19.0760, 72.8777, "Mumbai, India");
//! let snapshot = provider.current_location().await?;
//! println!("At {} ({}, {})", snapshot.display_name, snapshot.latitude, snapshot.longitude);
//! # Ok(())
//! # }
//! ```

mod error;
mod geocoder;
mod provider;
mod snapshot;

pub use error::LocationError;
pub use geocoder::{GeocoderConfig, ReverseGeocoder};
pub use provider::{
    DeniedLocationProvider, FixedLocationProvider, GeocodedLocationProvider, LocationProvider,
    UnavailableLocationProvider,
};
pub use snapshot::LocationSnapshot;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
