//! The location snapshot type.

/// A one-shot location fix with a reverse-geocoded place name.
///
/// Refreshed once when the SOS screen becomes active; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSnapshot {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Human-readable place name, e.g. "Mumbai, India".
    pub display_name: String,
}

impl LocationSnapshot {
    /// Create a new snapshot.
    pub fn new(latitude: f64, longitude: f64, display_name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            display_name: display_name.into(),
        }
    }

    /// Replace the display name, keeping the coordinates.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }
}
