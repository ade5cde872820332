//! Benchmarks for geo crate calculations.

use carelink_geo::{
    circle_to_ring, haversine_distance, proximity::LocatedRecord, rank_by_distance,
    shoelace_area_km2, Circle, GeoPoint,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

fn create_test_records(count: usize) -> Vec<LocatedRecord> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around New York
            let lat = 40.0 + (i as f64 * 0.01) % 2.0;
            let lng = -74.0 + (i as f64 * 0.01) % 2.0;
            LocatedRecord {
                id: format!("rec-{}", i),
                location: json!({"lat": lat, "lng": lng}),
            }
        })
        .collect()
}

fn create_test_ring(count: usize) -> Vec<GeoPoint> {
    let circle = Circle::new(GeoPoint::new(40.7128, -74.0060), 5000.0);
    circle_to_ring(&circle, count).unwrap()
}

fn bench_single_distance(c: &mut Criterion) {
    let new_york = GeoPoint::new(40.7128, -74.0060);
    let los_angeles = GeoPoint::new(34.0522, -118.2437);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&new_york), black_box(&los_angeles)))
    });
}

fn bench_circle_rasterization(c: &mut Criterion) {
    let circle = Circle::new(GeoPoint::new(40.7128, -74.0060), 500.0);
    let mut group = c.benchmark_group("circle_to_ring");

    for segments in [16, 64, 256].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(segments), segments, |b, &n| {
            b.iter(|| circle_to_ring(black_box(&circle), black_box(n)))
        });
    }

    group.finish();
}

fn bench_polygon_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("shoelace_area");

    for size in [8, 64, 512].iter() {
        let ring = create_test_ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| shoelace_area_km2(black_box(&ring)))
        });
    }

    group.finish();
}

fn bench_proximity_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_by_distance");
    let origin = GeoPoint::new(40.7128, -74.0060);

    for size in [10, 100, 1000, 10000].iter() {
        let records = create_test_records(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| rank_by_distance(black_box(&origin), black_box(&records)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_distance,
    bench_circle_rasterization,
    bench_polygon_area,
    bench_proximity_ranking
);
criterion_main!(benches);
