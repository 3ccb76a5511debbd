//! Query pipeline benchmarks.
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `search` | cascading filters + cap on catalogs of growing size |
//! | `rank` | distance annotation + stable sort of a bounded list |
//! | `index` | region / sub-region listing |
//!
//! ```sh
//! cargo bench -p housefinder-core --bench benchmarks
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use housefinder_core::prelude::*;
use std::hint::black_box;

const REGIONS: [&str; 4] = ["Addu", "Gnaviyani", "Kaafu", "Laamu"];

fn synthetic_catalog(size: usize) -> Catalog {
    let locations = (0..size)
        .map(|i| Location {
            region: REGIONS[i % REGIONS.len()].to_string(),
            sub_region: format!("Island {}", i % 17),
            name: format!("House {i} Sunbeam"),
            address: format!("Street {i}"),
            latitude: -0.3 + (i % 1000) as f64 * 1e-4,
            longitude: 73.4 + (i % 997) as f64 * 1e-4,
        })
        .collect();
    Catalog::new(locations).expect("synthetic catalog is valid")
}

fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [13usize, 1_000, 100_000] {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        let by_name = Criteria::default().name("sunbeam");
        group.bench_with_input(BenchmarkId::new("name", size), &catalog, |b, cat| {
            b.iter(|| search(black_box(cat), black_box(&by_name)))
        });

        // Worst case: nothing matches, so the whole catalog is scanned.
        let miss = Criteria::default().region("Laamu").name("nowhere");
        group.bench_with_input(BenchmarkId::new("miss", size), &catalog, |b, cat| {
            b.iter(|| search(black_box(cat), black_box(&miss)))
        });
    }
    group.finish();
}

fn rank_bench(c: &mut Criterion) {
    let catalog = synthetic_catalog(1_000);
    let here = Coordinates::new(-0.3090, 73.4400);

    c.bench_function("rank/bounded", |b| {
        b.iter(|| {
            let hits = search(&catalog, &Criteria::default());
            rank(hits, black_box(Some(here)))
        })
    });
}

fn index_bench(c: &mut Criterion) {
    let catalog = synthetic_catalog(100_000);

    c.bench_function("index/regions", |b| b.iter(|| list_regions(black_box(&catalog))));
    c.bench_function("index/sub_regions", |b| {
        b.iter(|| list_sub_regions(black_box(&catalog), black_box("Kaafu")))
    });
}

criterion_group!(benches, search_bench, rank_bench, index_bench);
criterion_main!(benches);
