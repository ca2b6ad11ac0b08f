use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SPOTS: &str = r#"[
    {"id": "A", "name": "Downtown Garage", "address": "123 Main St", "price": 5.0,
     "lat": 40.7128, "lng": -74.0060, "rating": 4.8, "available": 12, "total": 20,
     "amenities": ["EV Charging", "Security", "24/7"]},
    {"id": "B", "name": "Central Plaza", "address": "456 Oak Ave", "price": 3.5,
     "lat": 40.7138, "lng": -74.0080, "rating": 4.5, "available": 3, "total": 30,
     "amenities": ["Covered", "Security"]},
    {"id": "C", "name": "Out of Town Lot", "address": "1 Country Rd", "price": 2.0,
     "lat": 41.0, "lng": -75.0, "rating": 4.0, "available": 5, "total": 10,
     "amenities": []}
]"#;

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn cmd() -> Command {
    Command::cargo_bin("parkease-spots").unwrap()
}

#[test]
fn test_nearby_json_excludes_far_spots() {
    let spots = temp_file(SPOTS);
    let output = cmd()
        .args(["nearby", "--spots"])
        .arg(spots.path())
        .args(["--lat", "40.7128", "--lng", "-74.0060", "--radius", "1", "--unit", "mi", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<_> = report["spots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["spot"]["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["A", "B"]);
    assert_eq!(report["spots"][0]["distance"], 0.0);
    assert_eq!(report["spots"][1]["tier"], "full");
}

#[test]
fn test_nearby_without_location_lists_everything() {
    let spots = temp_file(SPOTS);
    let output = cmd()
        .args(["nearby", "--json", "--spots"])
        .arg(spots.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ranked = report["spots"].as_array().unwrap();
    assert_eq!(ranked.len(), 3);
    assert!(ranked.iter().all(|r| r["distance"].is_null()));
    assert!(report["origin"].is_null());
}

#[test]
fn test_nearby_filters_by_amenity() {
    let spots = temp_file(SPOTS);
    cmd()
        .args(["nearby", "--amenity", "Covered", "--spots"])
        .arg(spots.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Central Plaza"))
        .stdout(predicate::str::contains("Downtown Garage").not());
}

#[test]
fn test_track_replays_fixes_and_failures() {
    let spots = temp_file(SPOTS);
    let track = temp_file(
        r#"[
            {"latitude": 40.7128, "longitude": -74.0060, "accuracy": 10.0},
            {"error": "timeout"},
            {"latitude": 41.0, "longitude": -75.0}
        ]"#,
    );
    let output = cmd()
        .args(["track", "--json", "--spots"])
        .arg(spots.path())
        .arg("--track")
        .arg(track.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["nearest"], "A");
    assert!(lines[1]["origin"].is_null());
    assert_eq!(lines[1]["count"], 3);
    assert_eq!(lines[2]["nearest"], "C");
}

#[test]
fn test_classify_reports_tier() {
    cmd()
        .args(["classify", "5", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Limited"));
}

#[test]
fn test_classify_rejects_zero_capacity() {
    cmd()
        .args(["classify", "1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid capacity"));
}

#[test]
fn test_circle_emits_closed_ring() {
    let output = cmd()
        .args(["circle", "--lat", "40.7128", "--lng", "-74.0060"])
        .args(["--radius", "1", "--segments", "16"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let feature: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
    assert_eq!(ring.len(), 17);
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn test_distance_accepts_negative_coordinates() {
    cmd()
        .args(["distance", "--from", "-33.8688,151.2093", "--to", "-37.8136,144.9631"])
        .args(["--unit", "km"])
        .assert()
        .success()
        .stdout(predicate::str::contains("km"));
}
