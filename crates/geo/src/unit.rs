//! Distance units.
//!
//! A deployment picks one unit and threads it through radius presets,
//! distance computation and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::haversine::{EARTH_RADIUS_KM, EARTH_RADIUS_MI};

/// Kilometers in one statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// Unit used for distances and search radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Kilometers,
    #[default]
    Miles,
}

impl DistanceUnit {
    /// Earth's mean radius expressed in this unit.
    #[inline]
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Miles => EARTH_RADIUS_MI,
        }
    }

    /// Short suffix used in display strings.
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }

    /// Converts a value in this unit to kilometers.
    #[inline]
    pub fn to_km(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => value,
            DistanceUnit::Miles => value * KM_PER_MILE,
        }
    }

    /// Converts kilometers to this unit.
    #[inline]
    pub fn from_km(self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::Miles => km / KM_PER_MILE,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kilometers" | "kilometres" => Ok(DistanceUnit::Kilometers),
            "mi" | "miles" => Ok(DistanceUnit::Miles),
            other => Err(format!("unknown distance unit '{}' (expected km or mi)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_conversion() {
        let km = DistanceUnit::Miles.to_km(5.0);
        assert!((km - 8.0467).abs() < 1e-9);
        assert!((DistanceUnit::Miles.from_km(km) - 5.0).abs() < 1e-12);
        assert_eq!(DistanceUnit::Kilometers.to_km(3.0), 3.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("mi".parse::<DistanceUnit>().unwrap(), DistanceUnit::Miles);
        assert_eq!("Kilometers".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&DistanceUnit::Kilometers).unwrap();
        assert_eq!(json, "\"kilometers\"");
    }
}
