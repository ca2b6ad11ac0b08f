//! Proximity search for ParkEase parking spots.
//!
//! This crate provides:
//! - Radius filtering around the user's location
//! - Nearest-first ranking with a deterministic id tie-break
//! - Occupancy tiers (plentiful / limited / full) for markers and cards
//! - Amenity filtering and display formatting
//! - A location tracker over a pluggable device location provider
//! - WASM bindings for browser usage
//!
//! Everything except the tracker is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use parkease_geo::{Coordinate, DistanceUnit, UserLocation};
//! use parkease_proximity::{nearby_spots, ParkingSpot, ProximityQuery};
//!
//! let origin = UserLocation::new(Coordinate::new(40.7128, -74.0060));
//! let spots = vec![
//!     ParkingSpot::new("b", "Corner Lot", Coordinate::new(40.7138, -74.0080)),
//!     ParkingSpot::new("a", "Main Garage", Coordinate::new(40.7128, -74.0060)),
//!     ParkingSpot::new("c", "Out of town", Coordinate::new(41.0, -75.0)),
//! ];
//!
//! let query = ProximityQuery::new(1.0, DistanceUnit::Miles);
//! let ranked = nearby_spots(&spots, Some(&origin), &query).unwrap();
//! let ids: Vec<_> = ranked.iter().map(|r| r.id()).collect();
//! assert_eq!(ids, ["a", "b"]);
//! ```

mod amenity;
mod availability;
mod error;
mod filter;
mod format;
pub mod location;
mod pipeline;
mod rank;
mod spot;

#[cfg(feature = "wasm")]
mod wasm;

pub use amenity::{filter_by_amenities, is_known_amenity, matches_amenities, KNOWN_AMENITIES};
pub use availability::{classify, OccupancyTier};
pub use error::{ProximityError, ProximityErrorCode, Result};
pub use filter::filter_within_radius;
pub use format::{
    format_distance, format_duration, format_optional_distance, format_price, LOCATION_UNAVAILABLE,
};
pub use location::{
    LocationError, LocationProvider, LocationTracker, ReplayLocationProvider, WatchHandle,
};
pub use pipeline::{nearby_spots, ProximityQuery};
pub use rank::{compare_by_proximity, rank_by_proximity};
pub use spot::{ParkingSpot, RankedSpot, SpotDistance};
