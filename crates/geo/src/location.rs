//! A single device location sample.

use serde::{Deserialize, Serialize};

use crate::{Coordinate, GeoError, Result};

/// Position reported by a device location provider.
///
/// Only the latest sample matters to consumers; nothing keeps a history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Horizontal accuracy in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    /// Direction of travel in degrees clockwise from north
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    /// Ground speed in meters per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl UserLocation {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            accuracy: None,
            heading: None,
            speed: None,
        }
    }

    pub fn with_accuracy(mut self, meters: f64) -> Self {
        self.accuracy = Some(meters);
        self
    }

    pub fn with_heading(mut self, degrees: f64) -> Self {
        self.heading = Some(degrees);
        self
    }

    pub fn with_speed(mut self, meters_per_second: f64) -> Self {
        self.speed = Some(meters_per_second);
        self
    }

    /// Validates the coordinate and, when present, the heading (0-360).
    pub fn validate(&self) -> Result<()> {
        self.coordinate.validate()?;
        if let Some(heading) = self.heading {
            if !(0.0..=360.0).contains(&heading) {
                return Err(GeoError::InvalidCoordinate(format!(
                    "heading {} out of range",
                    heading
                )));
            }
        }
        Ok(())
    }
}

impl From<Coordinate> for UserLocation {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate)
    }
}
