use std::fmt;

use chrono::{DateTime, Utc};
use geo::{point, Point};
use serde::Serialize;

/// A single position along a route or track.
///
/// Elevation is always present: points without an `<ele>` element are
/// defaulted to 0.0 m when they are read from GPX.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub timestamp: Option<DateTime<Utc>>,
    pub name: Option<String>,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        TrackPoint {
            latitude,
            longitude,
            elevation,
            timestamp: None,
            name: None,
        }
    }

    /// Position as a `geo` point (x = longitude, y = latitude).
    pub fn location(&self) -> Point<f64> {
        point!(x: self.longitude, y: self.latitude)
    }
}

impl fmt::Display for TrackPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point{{Lat: {:.6}, Lon: {:.6}, Elevation: {:.2}}}",
            self.latitude, self.longitude, self.elevation
        )
    }
}
