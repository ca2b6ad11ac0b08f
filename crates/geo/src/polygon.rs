//! Circle polygons for search-radius overlays.
//!
//! Uses a local equirectangular approximation: good to well under 1% for
//! radii below ~50 km away from the poles. It only drives a map overlay.

use std::f64::consts::PI;

use crate::{Coordinate, GeoError, Result};

/// Kilometers per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.32;

/// Default number of segments; smooth enough on screen without bloating the ring.
pub const DEFAULT_SEGMENTS: usize = 64;

/// Floor for `cos(latitude)` so longitude offsets stay finite near the poles.
const MIN_COS_LAT: f64 = 1e-6;

/// Builds a closed ring approximating a circle of `radius_km` around `center`.
///
/// The ring holds `segments + 1` points; the last point is an exact copy of
/// the first.
///
/// # Errors
/// * `InvalidCoordinate` if `center` is unusable
/// * `InvalidRadius` if `radius_km` is negative or not finite
/// * `InvalidSegments` if `segments < 3`
///
/// # Example
/// ```
/// use parkease_geo::{circle_polygon, Coordinate, DEFAULT_SEGMENTS};
///
/// let ring = circle_polygon(&Coordinate::new(40.7128, -74.0060), 1.6, DEFAULT_SEGMENTS).unwrap();
/// assert_eq!(ring.len(), 65);
/// assert_eq!(ring.first(), ring.last());
/// ```
pub fn circle_polygon(
    center: &Coordinate,
    radius_km: f64,
    segments: usize,
) -> Result<Vec<Coordinate>> {
    center.validate()?;
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(GeoError::InvalidRadius(radius_km));
    }
    if segments < 3 {
        return Err(GeoError::InvalidSegments(segments));
    }

    let cos_lat = center.latitude.to_radians().cos().max(MIN_COS_LAT);
    let mut ring = Vec::with_capacity(segments + 1);

    for i in 0..segments {
        let angle = (i as f64 / segments as f64) * 2.0 * PI;
        let dx = radius_km * angle.cos();
        let dy = radius_km * angle.sin();

        let lat = center.latitude + dy / KM_PER_DEGREE;
        let lng = center.longitude + dx / (KM_PER_DEGREE * cos_lat);

        ring.push(Coordinate::new(lat.clamp(-90.0, 90.0), wrap_longitude(lng)));
    }

    let first = ring[0];
    ring.push(first);
    Ok(ring)
}

/// Wraps a longitude into [-180, 180].
fn wrap_longitude(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        return lng;
    }
    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lng > 0.0 {
        180.0
    } else {
        wrapped
    }
}
