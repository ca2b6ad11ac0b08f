//! Terminal output for ranked spots.

use owo_colors::OwoColorize;
use parkease_geo::DistanceUnit;
use parkease_proximity::{format_optional_distance, format_price, OccupancyTier, RankedSpot};

/// Status message helpers
pub struct Status;

impl Status {
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Tier label colored like the map markers.
pub fn tier_badge(tier: OccupancyTier) -> String {
    let label = tier.label();
    match tier {
        OccupancyTier::Plentiful => label.green().to_string(),
        OccupancyTier::Limited => label.yellow().to_string(),
        OccupancyTier::Full => label.red().to_string(),
    }
}

/// Availability text: "FULL" when no bay is free, otherwise the count.
pub fn availability_text(available: u32) -> String {
    if available == 0 {
        "FULL".to_string()
    } else if available == 1 {
        "1 spot".to_string()
    } else {
        format!("{} spots", available)
    }
}

/// Prints one card line per ranked spot.
pub fn print_ranked(ranked: &[RankedSpot<'_>], unit: DistanceUnit) {
    for (index, entry) in ranked.iter().enumerate() {
        let spot = entry.spot;
        println!(
            "{:>3}. {} {}",
            index + 1,
            spot.name.bold(),
            format!("({})", spot.id).dimmed()
        );
        println!(
            "     {} · {} · {} · {}",
            format_optional_distance(entry.distance, unit),
            format_price(spot.hourly_price),
            availability_text(spot.available),
            tier_badge(entry.tier)
        );
        if !spot.address.is_empty() {
            println!("     {}", spot.address.dimmed());
        }
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
