//! Benchmarks for the filter-rank-classify pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parkease_geo::{Coordinate, DistanceUnit, UserLocation};
use parkease_proximity::{filter_within_radius, nearby_spots, ParkingSpot, ProximityQuery};

fn create_test_spots(count: usize) -> Vec<ParkingSpot> {
    (0..count)
        .map(|i| {
            // Generate spots in a grid around lower Manhattan
            let lat = 40.70 + (i as f64 * 0.0007) % 0.1;
            let lng = -74.02 + (i as f64 * 0.0013) % 0.1;
            ParkingSpot::new(format!("spot-{}", i), "Bench Lot", Coordinate::new(lat, lng))
                .with_capacity((i % 20) as u32, 20)
                .with_amenities(if i % 3 == 0 { vec!["EV Charging"] } else { vec!["Covered"] })
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_within_radius");
    let origin = UserLocation::new(Coordinate::new(40.7128, -74.0060));

    for size in [10, 100, 1000, 10000].iter() {
        let spots = create_test_spots(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                filter_within_radius(black_box(&spots), Some(&origin), 1.0, DistanceUnit::Miles)
            })
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearby_spots");
    let origin = UserLocation::new(Coordinate::new(40.7128, -74.0060));
    let query = ProximityQuery::new(2.0, DistanceUnit::Miles).with_amenity("EV Charging");

    for size in [100, 1000].iter() {
        let spots = create_test_spots(*size);
        group.bench_with_input(BenchmarkId::new("located", size), size, |b, _| {
            b.iter(|| nearby_spots(black_box(&spots), Some(&origin), &query))
        });
        group.bench_with_input(BenchmarkId::new("unknown_origin", size), size, |b, _| {
            b.iter(|| nearby_spots(black_box(&spots), None, &query))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_pipeline);
criterion_main!(benches);
