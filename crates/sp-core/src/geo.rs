//! Geographic coordinate type.
//!
//! Coordinates are only used for presentation and for snapping a free-form
//! `"lat,lon"` query to the nearest node; routing costs never look at them.

use serde::{Deserialize, Serialize};

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a `"lat,lon"` pair such as `"12.9352, 77.6245"`.
    ///
    /// Returns `None` unless both halves parse as finite floats within the
    /// valid latitude/longitude ranges.
    pub fn parse_pair(s: &str) -> Option<GeoPoint> {
        let (lat, lon) = s.split_once(',')?;
        let lat: f64 = lat.trim().parse().ok()?;
        let lon: f64 = lon.trim().parse().ok()?;
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        valid.then_some(GeoPoint { lat, lon })
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
