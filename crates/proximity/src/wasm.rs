//! WASM bindings for the proximity crate.
//!
//! These bindings let the browser client run the same filter-rank-classify
//! pass. Spot lists cross the boundary as JSON.

use parkease_geo::{circle_polygon, distance_in, Coordinate, DistanceUnit, UserLocation};
use wasm_bindgen::prelude::*;

use crate::{classify, nearby_spots, ParkingSpot, ProximityQuery};

fn parse_unit(unit: &str) -> Result<DistanceUnit, JsValue> {
    unit.parse::<DistanceUnit>().map_err(|e| JsValue::from_str(&e))
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Distance between two points in `unit` ("km" or "mi").
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64, unit: &str) -> Result<f64, JsValue> {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    distance_in(&from, &to, parse_unit(unit)?).map_err(to_js_error)
}

/// Filters, ranks and classifies spots.
///
/// # Arguments
/// * `spots_json` - JSON array of spot rows
/// * `user_lat` / `user_lng` - User position, or undefined when unknown
/// * `radius` - Search radius in `unit`
/// * `unit` - "km" or "mi"
/// * `amenities_json` - JSON array of required amenity tags
///
/// # Returns
/// JSON array of `{ spot, distance, tier }`
#[wasm_bindgen]
pub fn rank_nearby(
    spots_json: &str,
    user_lat: Option<f64>,
    user_lng: Option<f64>,
    radius: f64,
    unit: &str,
    amenities_json: &str,
) -> Result<String, JsValue> {
    let spots: Vec<ParkingSpot> = serde_json::from_str(spots_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let mut query = ProximityQuery::new(radius, parse_unit(unit)?);
    if !amenities_json.trim().is_empty() {
        query.amenities = serde_json::from_str(amenities_json)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
    }

    let origin = match (user_lat, user_lng) {
        (Some(lat), Some(lng)) => Some(UserLocation::new(Coordinate::new(lat, lng))),
        _ => None,
    };

    let ranked = nearby_spots(&spots, origin.as_ref(), &query).map_err(to_js_error)?;

    serde_json::to_string(&ranked)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Search-radius ring as a JSON array of `[lng, lat]` pairs.
#[wasm_bindgen]
pub fn radius_ring(lat: f64, lng: f64, radius_km: f64, segments: u32) -> Result<String, JsValue> {
    let ring = circle_polygon(&Coordinate::new(lat, lng), radius_km, segments as usize)
        .map_err(to_js_error)?;
    let positions: Vec<[f64; 2]> = ring.iter().map(|c| [c.longitude, c.latitude]).collect();

    serde_json::to_string(&positions)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Occupancy tier name ("plentiful", "limited" or "full").
#[wasm_bindgen]
pub fn occupancy_tier(available: u32, total: u32) -> Result<String, JsValue> {
    let tier = classify(available, total).map_err(to_js_error)?;
    Ok(format!("{:?}", tier).to_lowercase())
}
