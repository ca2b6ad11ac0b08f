//! Radius search around the user's location.

use parkease_geo::{distance_in, Coordinate, DistanceUnit, UserLocation};

use crate::{ParkingSpot, ProximityError, Result, SpotDistance};

/// Spot lists at least this long are measured on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 256;

/// Keeps the spots within `radius` of `origin`, annotated with their distance.
///
/// `radius` is in `unit`, and the returned distances use the same unit. The
/// boundary is inclusive: a spot exactly `radius` away is kept. Input order
/// is preserved.
///
/// When `origin` is `None` the location is unknown, so every spot is returned
/// unfiltered with `distance: None`.
///
/// # Errors
/// * `InvalidRadius` if `radius` is not a positive finite number
/// * `Geo(InvalidCoordinate)` if the origin or a spot has an unusable coordinate
///
/// # Example
/// ```
/// use parkease_geo::{Coordinate, DistanceUnit, UserLocation};
/// use parkease_proximity::{filter_within_radius, ParkingSpot};
///
/// let here = Coordinate::new(40.7128, -74.0060);
/// let spots = vec![
///     ParkingSpot::new("a", "Here", here),
///     ParkingSpot::new("c", "Far", Coordinate::new(41.0, -75.0)),
/// ];
///
/// let origin = UserLocation::new(here);
/// let near = filter_within_radius(&spots, Some(&origin), 1.0, DistanceUnit::Miles).unwrap();
/// assert_eq!(near.len(), 1);
/// assert_eq!(near[0].distance, Some(0.0));
/// ```
pub fn filter_within_radius<'a>(
    spots: &'a [ParkingSpot],
    origin: Option<&UserLocation>,
    radius: f64,
    unit: DistanceUnit,
) -> Result<Vec<SpotDistance<'a>>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ProximityError::InvalidRadius(radius));
    }

    let Some(origin) = origin else {
        return Ok(spots
            .iter()
            .map(|spot| SpotDistance { spot, distance: None })
            .collect());
    };

    let from = origin.coordinate;
    from.validate()?;

    let measured = measure_all(&from, spots, unit)?;

    Ok(measured
        .into_iter()
        .filter(|m| m.distance.is_some_and(|d| d <= radius))
        .collect())
}

/// Measures every spot from `from`, keeping input order.
fn measure_all<'a>(
    from: &Coordinate,
    spots: &'a [ParkingSpot],
    unit: DistanceUnit,
) -> Result<Vec<SpotDistance<'a>>> {
    #[cfg(feature = "parallel")]
    {
        if spots.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            return spots
                .par_iter()
                .map(|spot| measure(from, spot, unit))
                .collect();
        }
    }

    spots.iter().map(|spot| measure(from, spot, unit)).collect()
}

#[inline]
fn measure<'a>(
    from: &Coordinate,
    spot: &'a ParkingSpot,
    unit: DistanceUnit,
) -> Result<SpotDistance<'a>> {
    let distance = distance_in(from, &spot.location, unit)?;
    Ok(SpotDistance {
        spot,
        distance: Some(distance),
    })
}
