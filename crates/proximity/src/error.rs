//! Error types for the proximity crate.

use parkease_geo::GeoError;
use thiserror::Error;

/// Result type alias for proximity operations.
pub type Result<T> = std::result::Result<T, ProximityError>;

/// Errors raised by the filter, ranker and classifier.
///
/// A missing user location is not an error: it is passed as `None` and the
/// pipeline falls back to showing every spot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProximityError {
    /// Coordinate or geometry failure from the geo layer
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Spot reports zero total capacity
    #[error("Invalid capacity: {available} available of {total} total")]
    InvalidCapacity { available: u32, total: u32 },

    /// Search radius is not a positive finite number
    #[error("Invalid search radius: {0} (must be positive)")]
    InvalidRadius(f64),

    /// Spot record violates a data invariant
    #[error("Invalid spot '{id}': {reason}")]
    InvalidSpot { id: String, reason: String },
}

/// Error code for integration with upstream error handling.
/// Range: 11xxx for proximity errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityErrorCode {
    /// Forwarded geo failure
    Geo = 11000,
    /// Zero total capacity
    InvalidCapacity = 11001,
    /// Non-positive radius
    InvalidRadius = 11002,
    /// Malformed spot record
    InvalidSpot = 11003,
}

impl ProximityError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ProximityErrorCode {
        match self {
            ProximityError::Geo(_) => ProximityErrorCode::Geo,
            ProximityError::InvalidCapacity { .. } => ProximityErrorCode::InvalidCapacity,
            ProximityError::InvalidRadius(_) => ProximityErrorCode::InvalidRadius,
            ProximityError::InvalidSpot { .. } => ProximityErrorCode::InvalidSpot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_error_is_transparent() {
        let err: ProximityError = GeoError::InvalidCoordinate("(91, 0)".into()).into();
        assert_eq!(err.to_string(), "Invalid coordinate: (91, 0)");
        assert_eq!(err.code(), ProximityErrorCode::Geo);
    }

    #[test]
    fn test_capacity_message() {
        let err = ProximityError::InvalidCapacity { available: 3, total: 0 };
        assert_eq!(err.to_string(), "Invalid capacity: 3 available of 0 total");
        assert_eq!(err.code() as u32, 11001);
    }
}
