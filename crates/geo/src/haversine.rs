//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::{Coordinate, DistanceUnit, Result};

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in statute miles.
pub const EARTH_RADIUS_MI: f64 = 3959.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// # Errors
/// Returns `GeoError::InvalidCoordinate` if either point is out of range or not finite.
///
/// # Example
/// ```
/// use parkease_geo::{haversine_distance, Coordinate};
///
/// let berlin = Coordinate::new(52.5200, 13.4050);
/// let paris = Coordinate::new(48.8566, 2.3522);
///
/// let distance = haversine_distance(&berlin, &paris).unwrap();
/// assert!((distance - 878.0).abs() < 10.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> Result<f64> {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance in the given unit.
///
/// Miles use the 3959 mi Earth radius directly rather than converting from
/// kilometers, so results match the radius presets shown to users.
#[inline]
pub fn distance_in(from: &Coordinate, to: &Coordinate, unit: DistanceUnit) -> Result<f64> {
    haversine_distance_with_radius(from, to, unit.earth_radius())
}

fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> Result<f64> {
    from.validate()?;
    to.validate()?;

    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` just past 1.0 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().asin();

    Ok(radius * c)
}

/// Fast approximate distance for filtering (uses equirectangular projection).
///
/// This is faster than Haversine but less accurate over long distances.
/// Use for quick radius filtering before applying Haversine for exact distances.
///
/// # Returns
/// Approximate distance in kilometers
#[inline]
pub fn approximate_distance(from: &Coordinate, to: &Coordinate) -> Result<f64> {
    from.validate()?;
    to.validate()?;

    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let x = (lon2 - lon1) * ((lat1 + lat2) / 2.0).cos();
    let y = lat2 - lat1;

    Ok((x * x + y * y).sqrt() * EARTH_RADIUS_KM)
}
