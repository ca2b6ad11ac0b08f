//! parkease-spots: search, rank and track nearby parking spots.

mod config;
mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use parkease_geo::{circle_polygon, distance_in, Coordinate, DistanceUnit, UserLocation};
use parkease_proximity::location::LocationEvent;
use parkease_proximity::{
    classify, format_distance, is_known_amenity, nearby_spots, LocationError, LocationTracker,
    ParkingSpot, ProximityQuery, RankedSpot, ReplayLocationProvider,
};
use parkease_telemetry::{TelemetryConfig, Timer};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use config::Config;
use output::{format_count, print_ranked, tier_badge, Status};

#[derive(Parser)]
#[command(name = "parkease-spots")]
#[command(about = "Search, rank and track nearby parking spots")]
#[command(version)]
struct Cli {
    /// Path to a parkease.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List spots within a radius, nearest first
    Nearby {
        /// JSON file with an array of spot rows
        #[arg(long)]
        spots: PathBuf,
        #[command(flatten)]
        search: SearchArgs,
        /// Latitude of the user; omit both to search without a location
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude of the user
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a recorded location track and re-rank on every fix
    Track {
        /// JSON file with an array of spot rows
        #[arg(long)]
        spots: PathBuf,
        /// JSON file with an array of fixes ({"latitude", "longitude", ...})
        /// or failures ({"error": "timeout"})
        #[arg(long)]
        track: PathBuf,
        #[command(flatten)]
        search: SearchArgs,
        /// Output one JSON object per step
        #[arg(long)]
        json: bool,
    },
    /// Great-circle distance between two "lat,lng" points
    Distance {
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        to: Coordinate,
        /// Distance unit (km or mi); defaults to the configured unit
        #[arg(long)]
        unit: Option<DistanceUnit>,
    },
    /// Print a search-radius ring as a GeoJSON polygon
    Circle {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Radius in the chosen unit; defaults to the configured radius
        #[arg(long)]
        radius: Option<f64>,
        /// Distance unit (km or mi); defaults to the configured unit
        #[arg(long)]
        unit: Option<DistanceUnit>,
        /// Number of polygon segments
        #[arg(long)]
        segments: Option<usize>,
    },
    /// Occupancy tier for an available/total pair
    Classify {
        available: u32,
        total: u32,
    },
    /// Show the configured radius presets
    Presets,
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Search radius; defaults to the configured radius
    #[arg(long)]
    radius: Option<f64>,
    /// Distance unit (km or mi); defaults to the configured unit
    #[arg(long)]
    unit: Option<DistanceUnit>,
    /// Required amenity; repeat for several
    #[arg(long = "amenity")]
    amenities: Vec<String>,
}

impl SearchArgs {
    fn to_query(&self, config: &Config) -> ProximityQuery {
        let search = config.search();
        let mut query = ProximityQuery::new(
            self.radius.unwrap_or(search.default_radius),
            self.unit.unwrap_or(search.unit),
        );
        for amenity in &self.amenities {
            if !is_known_amenity(amenity) {
                tracing::warn!(
                    amenity = %amenity,
                    "Unknown amenity; no listed spot is likely to match"
                );
            }
            query = query.with_amenity(amenity.clone());
        }
        query
    }
}

/// One entry of a recorded track file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TrackEntry {
    Failure { error: LocationError },
    Fix(UserLocation),
}

impl From<TrackEntry> for LocationEvent {
    fn from(entry: TrackEntry) -> Self {
        match entry {
            TrackEntry::Failure { error } => LocationEvent::Failure(error),
            TrackEntry::Fix(location) => LocationEvent::Fix(location),
        }
    }
}

fn parse_coordinate(value: &str) -> std::result::Result<Coordinate, String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lng\", got \"{}\"", value))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude: {}", e))?;
    let lng: f64 = lng.trim().parse().map_err(|e| format!("bad longitude: {}", e))?;
    Coordinate::try_new(lat, lng).map_err(|e| e.to_string())
}

fn load_spots(path: &Path) -> Result<Vec<ParkingSpot>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read spots file {}", path.display()))?;
    let rows: Vec<ParkingSpot> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse spots file {}", path.display()))?;

    let mut spots = Vec::with_capacity(rows.len());
    for spot in rows {
        match spot.validate() {
            Ok(()) => spots.push(spot),
            Err(e) => tracing::warn!(id = %spot.id, error = %e, "Skipping invalid spot row"),
        }
    }

    tracing::debug!(count = spots.len(), path = %path.display(), "Loaded spots");
    Ok(spots)
}

fn load_track(path: &Path) -> Result<Vec<TrackEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read track file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse track file {}", path.display()))
}

fn nearest_summary(ranked: &[RankedSpot<'_>], unit: DistanceUnit) -> String {
    match ranked.first() {
        Some(first) => match first.distance {
            Some(d) => format!("nearest {} ({})", first.spot.name, format_distance(d, unit)),
            None => format!("first {} (distance unknown)", first.spot.name),
        },
        None => "no spots in range".to_string(),
    }
}

fn run_nearby(
    config: &Config,
    spots_path: &Path,
    search: &SearchArgs,
    origin: Option<UserLocation>,
    json: bool,
) -> Result<()> {
    let spots = load_spots(spots_path)?;
    let query = search.to_query(config);

    let timer = Timer::start("nearby_spots");
    let ranked = nearby_spots(&spots, origin.as_ref(), &query)?;
    timer.stop();

    if json {
        let report = serde_json::json!({
            "unit": query.unit,
            "radius": query.radius,
            "origin": origin,
            "spots": ranked,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    Status::header("Nearby parking");
    match origin {
        Some(o) => Status::info(&format!(
            "Within {} {} of {}",
            query.radius, query.unit, o.coordinate
        )),
        None => Status::warning("Location unavailable: showing all spots"),
    }
    print_ranked(&ranked, query.unit);
    Status::success(&format_count(ranked.len(), "spot", "spots"));
    Ok(())
}

fn run_track(
    config: &Config,
    spots_path: &Path,
    track_path: &Path,
    search: &SearchArgs,
    json: bool,
) -> Result<()> {
    let spots = load_spots(spots_path)?;
    let query = search.to_query(config);
    let entries = load_track(track_path)?;

    let provider = ReplayLocationProvider::new(entries.into_iter().map(LocationEvent::from));
    let mut tracker = LocationTracker::new(provider);
    tracker.start();

    let mut step = 0usize;
    while tracker.provider().advance() {
        step += 1;
        let origin = tracker.origin();
        let ranked = nearby_spots(&spots, origin.as_ref(), &query)?;

        if json {
            let line = serde_json::json!({
                "step": step,
                "origin": origin,
                "error": tracker.last_error().map(|e| e.to_string()),
                "count": ranked.len(),
                "nearest": ranked.first().filter(|r| r.distance.is_some()).map(|r| r.id()),
            });
            println!("{}", serde_json::to_string(&line)?);
            continue;
        }

        match (origin, tracker.last_error()) {
            (Some(o), _) => println!(
                "[{}] {} → {}, {}",
                step,
                o.coordinate,
                format_count(ranked.len(), "spot", "spots"),
                nearest_summary(&ranked, query.unit)
            ),
            (None, error) => println!(
                "[{}] location unavailable ({}) → {}",
                step,
                error.map(|e| e.to_string()).unwrap_or_else(|| "no fix".to_string()),
                format_count(ranked.len(), "spot", "spots")
            ),
        }
    }

    tracker.stop();
    tracing::debug!(steps = step, "Track replay finished");
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Nearby { spots, search, lat, lng, json } => {
            let origin = match (lat, lng) {
                (Some(lat), Some(lng)) => Some(UserLocation::new(Coordinate::try_new(lat, lng)?)),
                _ => None,
            };
            run_nearby(&config, &spots, &search, origin, json)?;
        }

        Commands::Track { spots, track, search, json } => {
            run_track(&config, &spots, &track, &search, json)?;
        }

        Commands::Distance { from, to, unit } => {
            let unit = unit.unwrap_or(config.search().unit);
            let d = distance_in(&from, &to, unit)?;
            println!("{:.3} {} ({})", d, unit, format_distance(d, unit));
        }

        Commands::Circle { lat, lng, radius, unit, segments } => {
            let search = config.search();
            let unit = unit.unwrap_or(search.unit);
            let radius = radius.unwrap_or(search.default_radius);
            if !(radius.is_finite() && radius > 0.0) {
                bail!("radius must be positive, got {}", radius);
            }
            let center = Coordinate::try_new(lat, lng)?;
            let segments = segments.unwrap_or(search.circle_segments);
            let ring = circle_polygon(&center, unit.to_km(radius), segments)?;

            let positions: Vec<[f64; 2]> = ring.iter().map(|c| [c.longitude, c.latitude]).collect();
            let feature = serde_json::json!({
                "type": "Feature",
                "properties": { "radius": radius, "unit": unit },
                "geometry": { "type": "Polygon", "coordinates": [positions] },
            });
            println!("{}", serde_json::to_string_pretty(&feature)?);
        }

        Commands::Classify { available, total } => {
            let tier = classify(available, total)?;
            println!("{} ({})", tier_badge(tier), tier.color());
        }

        Commands::Presets => {
            let search = config.search();
            Status::header("Radius presets");
            for preset in &search.radius_presets {
                let marker = if *preset == search.default_radius { " (default)" } else { "" };
                println!("  {} {}{}", preset, search.unit, marker);
            }
            if let Some(path) = &config.path {
                Status::info(&format!("Loaded from {}", path.display()));
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.schema.logging.level.clone()
    };
    parkease_telemetry::init_with_config(TelemetryConfig::with_level(level))?;

    run(cli, config)
}
