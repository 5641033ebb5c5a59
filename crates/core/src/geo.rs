//! Great-circle distance on a spherical Earth.
//!
//! Uses the haversine formula with the WGS84 equatorial radius, the same
//! radius the browser geolocation helpers use, so distances agree with what
//! a viewer's device would report.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Earth radius in meters (WGS84 semi-major axis).
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Valid latitude range in decimal degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in decimal degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(CoreError::Validation(
                "Coordinates must be finite numbers".to_string(),
            ));
        }
        if self.latitude < LATITUDE_RANGE.0 || self.latitude > LATITUDE_RANGE.1 {
            return Err(CoreError::Validation(format!(
                "Latitude {} out of range [{}, {}]",
                self.latitude, LATITUDE_RANGE.0, LATITUDE_RANGE.1
            )));
        }
        if self.longitude < LONGITUDE_RANGE.0 || self.longitude > LONGITUDE_RANGE.1 {
            return Err(CoreError::Validation(format!(
                "Longitude {} out of range [{}, {}]",
                self.longitude, LONGITUDE_RANGE.0, LONGITUDE_RANGE.1
            )));
        }
        Ok(())
    }
}

/// Haversine surface distance between two points, in meters.
///
/// Returns NaN if either point has a non-finite coordinate; callers making
/// an access decision must treat that as a failure.
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Clamp guards against h drifting a hair above 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_METERS * c
}

/// Slack allowed above the radius to absorb floating-point error in
/// [`haversine_distance_m`]. One micrometre: a point placed exactly on the
/// circle passes, while 20.000001 m against a 20 m radius already fails.
pub const BOUNDARY_TOLERANCE_M: f64 = 1e-6;

/// Whether `distance_m` lies within `radius_m`, boundary included.
///
/// A non-finite distance is never within any radius.
pub fn within_radius(distance_m: f64, radius_m: f64) -> bool {
    distance_m.is_finite() && distance_m <= radius_m + BOUNDARY_TOLERANCE_M
}

/// Latitude offset, in degrees, that moves a point `meters` north along a meridian.
pub fn meridian_offset_deg(meters: f64) -> f64 {
    (meters / EARTH_RADIUS_METERS).to_degrees()
}
