//! Parking spot records and their ranked views.

use parkease_geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{classify, OccupancyTier, ProximityError, Result};

/// A bookable parking location.
///
/// Serializes as a `parking_spots` row from the backend (`lat`, `lng`,
/// `price`, ...). The geospatial core never mutates a spot; `available`
/// changes only through booking events elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SpotRow", into = "SpotRow")]
pub struct ParkingSpot {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Coordinate,
    /// Hourly price in dollars
    pub hourly_price: f64,
    pub total: u32,
    pub available: u32,
    pub amenities: BTreeSet<String>,
    pub rating: f64,
    pub image_url: Option<String>,
}

/// Wire shape of a spot row.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpotRow {
    id: String,
    name: String,
    #[serde(default)]
    address: String,
    lat: f64,
    lng: f64,
    price: f64,
    total: u32,
    available: u32,
    #[serde(default)]
    amenities: BTreeSet<String>,
    #[serde(default)]
    rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
}

impl From<SpotRow> for ParkingSpot {
    fn from(row: SpotRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            location: Coordinate::new(row.lat, row.lng),
            hourly_price: row.price,
            total: row.total,
            available: row.available,
            amenities: row.amenities,
            rating: row.rating,
            image_url: row.image_url,
        }
    }
}

impl From<ParkingSpot> for SpotRow {
    fn from(spot: ParkingSpot) -> Self {
        Self {
            id: spot.id,
            name: spot.name,
            address: spot.address,
            lat: spot.location.latitude,
            lng: spot.location.longitude,
            price: spot.hourly_price,
            total: spot.total,
            available: spot.available,
            amenities: spot.amenities,
            rating: spot.rating,
            image_url: spot.image_url,
        }
    }
}

impl ParkingSpot {
    /// Creates a single-bay, free spot; use the `with_*` setters for the rest.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            location,
            hourly_price: 0.0,
            total: 1,
            available: 1,
            amenities: BTreeSet::new(),
            rating: 0.0,
            image_url: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_price(mut self, hourly_price: f64) -> Self {
        self.hourly_price = hourly_price;
        self
    }

    pub fn with_capacity(mut self, available: u32, total: u32) -> Self {
        self.available = available;
        self.total = total;
        self
    }

    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Occupancy tier for the current capacity figures.
    pub fn occupancy(&self) -> Result<OccupancyTier> {
        classify(self.available, self.total)
    }

    /// True when no bay is free at all.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.available == 0
    }

    /// Returns true if the spot carries the given amenity tag.
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.contains(amenity)
    }

    /// Checks the record's invariants.
    pub fn validate(&self) -> Result<()> {
        self.location.validate()?;

        let reason = if self.id.trim().is_empty() {
            Some("empty id".to_string())
        } else if !self.hourly_price.is_finite() || self.hourly_price < 0.0 {
            Some(format!("price {} must be non-negative", self.hourly_price))
        } else if self.total == 0 {
            Some("total capacity must be positive".to_string())
        } else if self.available > self.total {
            Some(format!(
                "{} available exceeds {} total",
                self.available, self.total
            ))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ProximityError::InvalidSpot {
                id: self.id.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

/// A spot paired with its distance from the user, if the user is located.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpotDistance<'a> {
    pub spot: &'a ParkingSpot,
    /// Distance in the query's unit; `None` when the origin is unknown
    pub distance: Option<f64>,
}

/// A spot ready for presentation: distance plus occupancy tier.
///
/// Rebuilt on every location, list or radius change and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedSpot<'a> {
    pub spot: &'a ParkingSpot,
    pub distance: Option<f64>,
    pub tier: OccupancyTier,
}

impl<'a> RankedSpot<'a> {
    /// Classifies an already-measured spot.
    pub fn from_measured(measured: SpotDistance<'a>) -> Result<Self> {
        Ok(Self {
            spot: measured.spot,
            distance: measured.distance,
            tier: measured.spot.occupancy()?,
        })
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.spot.id
    }
}
