//! Geospatial primitives for ParkEase.
//!
//! This crate provides:
//! - Haversine distance calculations in kilometers or miles
//! - A fast equirectangular approximation for coarse filtering
//! - Circle polygons for drawing search-radius overlays
//! - The `UserLocation` sample produced by device location providers
//!
//! # Example
//!
//! ```
//! use parkease_geo::{distance_in, Coordinate, DistanceUnit};
//!
//! let nyc = Coordinate::new(40.7128, -74.0060);
//! let philly = Coordinate::new(39.9526, -75.1652);
//!
//! let miles = distance_in(&nyc, &philly, DistanceUnit::Miles).unwrap();
//! assert!((miles - 80.0).abs() < 2.0);
//! ```

mod error;
mod haversine;
mod location;
mod polygon;
mod unit;

pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{
    approximate_distance, distance_in, haversine_distance, EARTH_RADIUS_KM, EARTH_RADIUS_MI,
};
pub use location::UserLocation;
pub use polygon::{circle_polygon, DEFAULT_SEGMENTS, KM_PER_DEGREE};
pub use unit::{DistanceUnit, KM_PER_MILE};

/// A geographic coordinate with latitude and longitude.
///
/// Spot rows use the short `lat`/`lng` names, which are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate without validation.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = Self::new(latitude, longitude);
        coord.validate()?;
        Ok(coord)
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Checks the coordinate, returning `GeoError::InvalidCoordinate` if it is unusable.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({}, {})",
                self.latitude, self.longitude
            )))
        }
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(40.7128, -74.0060);
        assert_eq!(coord.latitude, 40.7128);
        assert_eq!(coord.longitude, -74.0060);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(Coordinate::try_new(40.0, -74.0).is_ok());
        assert!(matches!(
            Coordinate::try_new(-90.5, 0.0),
            Err(GeoError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (40.7128, -74.0060).into();
        assert_eq!(coord.latitude, 40.7128);
    }

    #[test]
    fn test_deserialize_short_names() {
        let coord: Coordinate = serde_json::from_str(r#"{"lat": 12.5, "lng": 77.25}"#).unwrap();
        assert_eq!(coord, Coordinate::new(12.5, 77.25));
    }
}
