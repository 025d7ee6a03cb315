//! Benchmarks for the ranking pass
//!
//! Run with: cargo bench --package recommender

use catalog::{Accommodation, Catalog, Coordinate, Price};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recommender::{Budget, PreferenceSet, Recommender, ScoringWeights};

fn synthetic_catalog(n: u32) -> Catalog {
    let areas = ["Laoag", "Paoay", "Pagudpud", "Burgos", "Currimao"];
    let records = (1..=n)
        .map(|id| Accommodation {
            id,
            name: format!("Stay {id}"),
            area: areas[(id as usize) % areas.len()].to_string(),
            price: Price::Amount(800.0 + f64::from(id % 30) * 100.0),
            rating: Some(3.5 + f64::from(id % 15) * 0.1),
            location: Coordinate::new(18.0 + f64::from(id % 60) * 0.01, 120.5),
            amenities: vec!["wifi".to_string(), "parking".to_string()],
            description: None,
        })
        .collect();
    Catalog::from_records(records).expect("valid synthetic catalog")
}

fn full_prefs() -> PreferenceSet {
    PreferenceSet {
        budget: Some(Budget::Ceiling(1500.0)),
        area: Some("Paoay".to_string()),
        amenities: vec!["wifi".to_string(), "parking".to_string()],
        min_rating: Some(4.0),
        trip_type: None,
        center: Some(Coordinate::new(18.2, 120.6)),
    }
}

fn bench_rank_small_catalog(c: &mut Criterion) {
    let catalog = synthetic_catalog(50);
    let recommender = Recommender::with_weights(&ScoringWeights::classic());
    let prefs = full_prefs();

    c.bench_function("rank_50_records", |b| {
        b.iter(|| {
            let ranked = recommender.rank(black_box(&catalog), black_box(&prefs));
            black_box(ranked)
        })
    });
}

fn bench_rank_large_catalog(c: &mut Criterion) {
    let catalog = synthetic_catalog(5000);
    let recommender = Recommender::with_weights(&ScoringWeights::classic());
    let prefs = full_prefs();

    c.bench_function("rank_5000_records", |b| {
        b.iter(|| {
            let ranked = recommender.rank(black_box(&catalog), black_box(&prefs));
            black_box(ranked)
        })
    });
}

criterion_group!(benches, bench_rank_small_catalog, bench_rank_large_catalog);
criterion_main!(benches);
