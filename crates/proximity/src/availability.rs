//! Occupancy tiers.
//!
//! The same three-way split drives marker colors on the map and the labels
//! on list cards, so both views agree on what "limited" means.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ProximityError, Result};

/// How much room a spot has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyTier {
    /// More than half the bays are free
    Plentiful,
    /// More than a fifth, at most half
    Limited,
    /// A fifth or less, including none
    Full,
}

impl OccupancyTier {
    /// Label shown on spot cards.
    pub fn label(self) -> &'static str {
        match self {
            OccupancyTier::Plentiful => "Available",
            OccupancyTier::Limited => "Limited",
            OccupancyTier::Full => "Full",
        }
    }

    /// Marker color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            OccupancyTier::Plentiful => "#22c55e",
            OccupancyTier::Limited => "#eab308",
            OccupancyTier::Full => "#ef4444",
        }
    }
}

impl fmt::Display for OccupancyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies `available / total` into a tier.
///
/// `ratio > 0.5` is plentiful, `0.2 < ratio <= 0.5` is limited and anything
/// else is full. The comparison is done in integers so the 0.5 and 0.2
/// boundaries are exact.
///
/// # Errors
/// `ProximityError::InvalidCapacity` when `total` is zero.
///
/// # Example
/// ```
/// use parkease_proximity::{classify, OccupancyTier};
///
/// assert_eq!(classify(6, 10).unwrap(), OccupancyTier::Plentiful);
/// assert_eq!(classify(5, 10).unwrap(), OccupancyTier::Limited);
/// assert_eq!(classify(0, 10).unwrap(), OccupancyTier::Full);
/// ```
pub fn classify(available: u32, total: u32) -> Result<OccupancyTier> {
    if total == 0 {
        return Err(ProximityError::InvalidCapacity { available, total });
    }

    let available = u64::from(available);
    let total = u64::from(total);

    let tier = if available * 2 > total {
        OccupancyTier::Plentiful
    } else if available * 5 > total {
        OccupancyTier::Limited
    } else {
        OccupancyTier::Full
    };

    Ok(tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_examples() {
        assert_eq!(classify(0, 10).unwrap(), OccupancyTier::Full);
        assert_eq!(classify(3, 10).unwrap(), OccupancyTier::Limited);
        assert_eq!(classify(6, 10).unwrap(), OccupancyTier::Plentiful);
    }

    #[test]
    fn test_boundaries() {
        // Exactly one half is limited, exactly one fifth is full.
        assert_eq!(classify(5, 10).unwrap(), OccupancyTier::Limited);
        assert_eq!(classify(2, 10).unwrap(), OccupancyTier::Full);
        assert_eq!(classify(1, 5).unwrap(), OccupancyTier::Full);
        assert_eq!(classify(51, 100).unwrap(), OccupancyTier::Plentiful);
        assert_eq!(classify(21, 100).unwrap(), OccupancyTier::Limited);
    }

    #[test]
    fn test_zero_total_is_rejected() {
        assert_eq!(
            classify(0, 0),
            Err(ProximityError::InvalidCapacity { available: 0, total: 0 })
        );
        assert!(classify(4, 0).is_err());
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        assert_eq!(classify(u32::MAX, u32::MAX).unwrap(), OccupancyTier::Plentiful);
    }

    #[test]
    fn test_presentation_mapping() {
        assert_eq!(OccupancyTier::Plentiful.label(), "Available");
        assert_eq!(OccupancyTier::Limited.color(), "#eab308");
        assert_eq!(OccupancyTier::Full.to_string(), "Full");
    }
}
