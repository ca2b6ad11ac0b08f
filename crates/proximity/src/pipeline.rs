//! The full filter-rank-classify pass behind the map and list views.

use parkease_geo::{DistanceUnit, UserLocation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{
    filter_within_radius, matches_amenities, rank_by_proximity, ParkingSpot, RankedSpot, Result,
};

/// Inputs besides the spot list and the user's location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityQuery {
    /// Search radius in `unit`
    pub radius: f64,
    pub unit: DistanceUnit,
    /// Every listed amenity must be present on a spot
    #[serde(default)]
    pub amenities: BTreeSet<String>,
}

impl ProximityQuery {
    pub fn new(radius: f64, unit: DistanceUnit) -> Self {
        Self {
            radius,
            unit,
            amenities: BTreeSet::new(),
        }
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.insert(amenity.into());
        self
    }
}

/// Filters, ranks and classifies spots around `origin`.
///
/// This is a pure function of its inputs and is cheap enough to re-run on
/// every location fix or filter change. With `origin = None` every spot that
/// passes the amenity filter is returned in input order with no distance.
///
/// # Errors
/// Propagates radius, coordinate and capacity errors from the stages.
///
/// # Example
/// ```
/// use parkease_geo::{Coordinate, DistanceUnit, UserLocation};
/// use parkease_proximity::{nearby_spots, OccupancyTier, ParkingSpot, ProximityQuery};
///
/// let here = Coordinate::new(40.7128, -74.0060);
/// let spots = vec![ParkingSpot::new("a", "Garage", here).with_capacity(8, 10)];
/// let query = ProximityQuery::new(1.0, DistanceUnit::Miles);
///
/// let ranked = nearby_spots(&spots, Some(&UserLocation::new(here)), &query).unwrap();
/// assert_eq!(ranked[0].tier, OccupancyTier::Plentiful);
/// ```
pub fn nearby_spots<'a>(
    spots: &'a [ParkingSpot],
    origin: Option<&UserLocation>,
    query: &ProximityQuery,
) -> Result<Vec<RankedSpot<'a>>> {
    let mut in_range = filter_within_radius(spots, origin, query.radius, query.unit)?;
    in_range.retain(|m| matches_amenities(m.spot, &query.amenities));

    let ranked = rank_by_proximity(in_range)
        .into_iter()
        .map(RankedSpot::from_measured)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        input = spots.len(),
        matched = ranked.len(),
        origin_known = origin.is_some(),
        radius = query.radius,
        unit = %query.unit,
        "Ranked nearby spots"
    );

    Ok(ranked)
}
