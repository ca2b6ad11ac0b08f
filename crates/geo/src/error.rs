//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude/longitude out of range or not finite
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Radius is negative or not finite
    #[error("Invalid radius: {0}")]
    InvalidRadius(f64),

    /// Too few segments to form a polygon
    #[error("Invalid segment count {0}: a polygon needs at least 3")]
    InvalidSegments(usize),
}

/// Error code for integration with upstream error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid coordinate values
    InvalidCoordinate = 10002,
    /// Invalid radius
    InvalidRadius = 10004,
    /// Invalid polygon segment count
    InvalidSegments = 10005,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::InvalidRadius(_) => GeoErrorCode::InvalidRadius,
            GeoError::InvalidSegments(_) => GeoErrorCode::InvalidSegments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GeoError::InvalidCoordinate("x".into()).code() as u32, 10002);
        assert_eq!(GeoError::InvalidRadius(-1.0).code() as u32, 10004);
        assert_eq!(GeoError::InvalidSegments(2).code() as u32, 10005);
    }

    #[test]
    fn test_error_display() {
        let err = GeoError::InvalidSegments(2);
        assert_eq!(err.to_string(), "Invalid segment count 2: a polygon needs at least 3");
    }
}
