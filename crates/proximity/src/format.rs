//! Display strings for distances, durations and prices.

use parkease_geo::DistanceUnit;

const FEET_PER_MILE: f64 = 5280.0;

/// Shown in place of a distance when the user's location is unknown.
pub const LOCATION_UNAVAILABLE: &str = "Location unavailable";

/// Formats a distance given in `unit`.
///
/// Short hops switch to a finer unit: under 0.1 mi is shown in feet (rounded
/// to 10 ft), under 1 km in whole meters. A value that rounds to 1000 m is
/// shown in km.
///
/// ```
/// use parkease_geo::DistanceUnit;
/// use parkease_proximity::format_distance;
///
/// assert_eq!(format_distance(0.24, DistanceUnit::Miles), "0.2 mi");
/// assert_eq!(format_distance(0.35, DistanceUnit::Kilometers), "350 m");
/// ```
pub fn format_distance(distance: f64, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::Miles if distance < 0.1 => {
            let feet = (distance * FEET_PER_MILE / 10.0).round() * 10.0;
            format!("{} ft", feet as u64)
        }
        DistanceUnit::Kilometers if (distance * 1000.0).round() < 1000.0 => {
            format!("{} m", (distance * 1000.0).round() as u64)
        }
        _ => format!("{:.1} {}", distance, unit.suffix()),
    }
}

/// Like [`format_distance`], with a placeholder when the distance is unknown.
pub fn format_optional_distance(distance: Option<f64>, unit: DistanceUnit) -> String {
    match distance {
        Some(d) => format_distance(d, unit),
        None => LOCATION_UNAVAILABLE.to_string(),
    }
}

/// Formats a travel or parking duration given in seconds.
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        return "< 1 min".to_string();
    }

    let minutes = seconds / 60 + u64::from(seconds % 60 >= 30);
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{} hr", hours)
    } else {
        format!("{} hr {} min", hours, rest)
    }
}

/// Formats an hourly price in dollars.
pub fn format_price(hourly: f64) -> String {
    format!("${:.2}/hr", hourly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miles() {
        assert_eq!(format_distance(0.0, DistanceUnit::Miles), "0 ft");
        assert_eq!(format_distance(0.05, DistanceUnit::Miles), "260 ft");
        assert_eq!(format_distance(0.1, DistanceUnit::Miles), "0.1 mi");
        assert_eq!(format_distance(0.17, DistanceUnit::Miles), "0.2 mi");
        assert_eq!(format_distance(12.34, DistanceUnit::Miles), "12.3 mi");
    }

    #[test]
    fn test_kilometers() {
        assert_eq!(format_distance(0.35, DistanceUnit::Kilometers), "350 m");
        assert_eq!(format_distance(0.9996, DistanceUnit::Kilometers), "1.0 km");
        assert_eq!(format_distance(0.9994, DistanceUnit::Kilometers), "999 m");
        assert_eq!(format_distance(2.44, DistanceUnit::Kilometers), "2.4 km");
    }

    #[test]
    fn test_unknown_distance() {
        assert_eq!(format_optional_distance(None, DistanceUnit::Miles), "Location unavailable");
        assert_eq!(format_optional_distance(Some(1.0), DistanceUnit::Miles), "1.0 mi");
    }

    #[test]
    fn test_durations() {
        assert_eq!(format_duration(0), "< 1 min");
        assert_eq!(format_duration(59), "< 1 min");
        assert_eq!(format_duration(60), "1 min");
        assert_eq!(format_duration(749), "12 min");
        assert_eq!(format_duration(3599), "1 hr");
        assert_eq!(format_duration(3900), "1 hr 5 min");
        assert_eq!(format_duration(7200), "2 hr");
    }

    #[test]
    fn test_duration_at_u64_max() {
        let formatted = format_duration(u64::MAX);
        assert!(formatted.contains(" hr"), "{formatted}");
        assert!(formatted.starts_with(&(u64::MAX / 3600).to_string()), "{formatted}");
    }

    #[test]
    fn test_price() {
        assert_eq!(format_price(5.0), "$5.00/hr");
        assert_eq!(format_price(3.499), "$3.50/hr");
    }
}
