//! Amenity tags and the amenity filter.

use std::collections::BTreeSet;

use crate::ParkingSpot;

/// Amenity tags offered in the filter sheet.
pub const KNOWN_AMENITIES: &[&str] = &[
    "EV Charging",
    "Security",
    "24/7",
    "Covered",
    "Valet",
    "Premium",
    "Shuttle",
];

/// Returns true if `amenity` is one of the tags the client offers.
pub fn is_known_amenity(amenity: &str) -> bool {
    KNOWN_AMENITIES.contains(&amenity)
}

/// Returns true if the spot carries every selected amenity.
///
/// An empty selection matches everything.
pub fn matches_amenities(spot: &ParkingSpot, selected: &BTreeSet<String>) -> bool {
    selected.is_subset(&spot.amenities)
}

/// Keeps the spots carrying every selected amenity, in input order.
pub fn filter_by_amenities<'a>(
    spots: &'a [ParkingSpot],
    selected: &BTreeSet<String>,
) -> Vec<&'a ParkingSpot> {
    spots
        .iter()
        .filter(|spot| matches_amenities(spot, selected))
        .collect()
}
