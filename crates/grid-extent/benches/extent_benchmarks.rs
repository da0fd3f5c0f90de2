//! Benchmarks for bitmap decoding and domain resolution.
//!
//! Run with: cargo bench --package grid-extent
//! Or: cargo bench --package grid-extent --bench extent_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashMap;

use grid_extent::{bitmap, Centering, DomainResolver, ExtentAggregator, RawGridDefinition};

// =============================================================================
// BITMAP DECODING BENCHMARKS
// =============================================================================

fn bench_bitmap_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitmap_decode");

    group.bench_function("literal_list", |b| {
        b.iter(|| bitmap::decode(black_box("!3,7,12,40,41,42,900")))
    });

    group.bench_function("compact_alphabet", |b| {
        b.iter(|| bitmap::decode(black_box("1000:1Cc2!;.Zz1a3")))
    });

    // Long run expressed with repeated sections and groups
    let repeated = "0:1-500/1-200/{3/10}-50/Z";
    group.throughput(Throughput::Elements(bitmap::decode(repeated).map(|v| v.len()).unwrap_or(0) as u64));
    group.bench_function("repeated_sections", |b| {
        b.iter(|| bitmap::decode(black_box(repeated)))
    });

    group.finish();
}

// =============================================================================
// DOMAIN RESOLUTION BENCHMARKS
// =============================================================================

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let resolver = DomainResolver::default();

    let gfs = RawGridDefinition::new("latLon", "1440:721:90N:0E:90S:0.25W:0.25:0.25");
    group.bench_function("lat_lon_global", |b| {
        b.iter(|| resolver.resolve_raw(black_box(&gfs), Centering::PrimeMeridian))
    });

    // Scan cost grows with the number of grid points
    for (ni, nj) in [(93, 65), (185, 129), (614, 428)] {
        let lambert = RawGridDefinition::new(
            "lambertConformal",
            format!("{}:{}:12.19N:133.459W:25.0N:95.0W:N:81.2705:81.2705", ni, nj),
        );
        group.throughput(Throughput::Elements((ni * nj) as u64));
        group.bench_with_input(
            BenchmarkId::new("lambert_conformal", format!("{}x{}", ni, nj)),
            &lambert,
            |b, def| b.iter(|| resolver.resolve_raw(black_box(def), Centering::PrimeMeridian)),
        );
    }

    let polar = RawGridDefinition::new("polarStereographic", "65:65:20.826S:125W:60N:80W:N:381.0:381.0");
    group.bench_function("polar_stereographic_65x65", |b| {
        b.iter(|| resolver.resolve_raw(black_box(&polar), Centering::PrimeMeridian))
    });

    // Recorded with the parent grid's size; forces the corner search
    let polar_window = RawGridDefinition::new("polarStereographic", "65:65:41.239N:125W:60N:80W:N:381.0:381.0");
    group.bench_function("polar_corner_search", |b| {
        b.iter(|| resolver.resolve_raw(black_box(&polar_window), Centering::PrimeMeridian))
    });

    group.finish();
}

// =============================================================================
// AGGREGATION BENCHMARKS
// =============================================================================

fn bench_aggregate(c: &mut Criterion) {
    let catalog: HashMap<i64, RawGridDefinition> = HashMap::from([
        (1, RawGridDefinition::new("latLon", "361:181:90N:0E:90S:0W:1.0:1.0")),
        (2, RawGridDefinition::new("latLon", "61:41:20N:230E:60N:290E:1.0:1.0")),
        (
            3,
            RawGridDefinition::new(
                "lambertConformal",
                "93:65:12.19N:133.459W:25.0N:95.0W:N:81.2705:81.2705",
            ),
        ),
        (4, RawGridDefinition::new("polarStereographic", "65:65:20.826S:125W:60N:80W:N:381.0:381.0")),
        (5, RawGridDefinition::new("sphericalHarmonics", "62:62:62")),
    ]);
    let aggregator = ExtentAggregator::default();

    c.bench_function("aggregate_extent_mixed", |b| {
        b.iter(|| aggregator.aggregate_extent(black_box("1:D"), &catalog))
    });
}

criterion_group!(benches, bench_bitmap_decode, bench_resolve, bench_aggregate);
criterion_main!(benches);
