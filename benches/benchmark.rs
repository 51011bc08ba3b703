// Index build and query benchmarks over synthetic catalogs
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use rand::prelude::*;
use tembea_core::{Catalog, Item, Recommender, RecommenderConfig};

const TOWNS: [&str; 6] = ["nairobi", "mombasa", "kisumu", "nakuru", "malindi", "naivasha"];
const FEATURES: [&str; 16] = [
    "pool", "spa", "wifi", "breakfast", "beach", "garden", "bar", "gym",
    "parking", "seafood", "coffee", "rooftop", "safari", "lake", "view", "family",
];
const CUISINES: [&str; 6] = ["swahili", "italian", "indian", "barbecue", "cafe", "seafood"];

fn generate_catalog(size: usize) -> Catalog {
    let mut rng = rand::rng();
    let items = (0..size)
        .map(|i| {
            let features: Vec<&str> = FEATURES.choose_multiple(&mut rng, 4).copied().collect();
            let category = if i % 3 == 0 { "hotel" } else { "restaurant" };
            Item::new(format!("place {}", i), category, *TOWNS.choose(&mut rng).unwrap())
                .with_cuisine(*CUISINES.choose(&mut rng).unwrap())
                .with_features(features.join(" "))
                .with_rating(rng.random_range(1.0..5.0))
                .with_average_price(rng.random_range(100.0..10000.0))
        })
        .collect();
    Catalog::new(items)
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 10000].iter() {
        let catalog = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::new("tembea", size), size, |b, _| {
            b.iter(|| {
                Recommender::build(black_box(catalog.clone()), RecommenderConfig::default()).unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    for size in [1000, 10000].iter() {
        let recommender = Recommender::build(generate_catalog(*size), RecommenderConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("tembea", size), size, |b, _| {
            b.iter(|| recommender.recommend_hotels_restaurants(black_box("beach pool spa seafood"), 5));
        });
    }

    group.finish();
}

fn benchmark_town(c: &mut Criterion) {
    let mut group = c.benchmark_group("town");

    for size in [1000, 10000].iter() {
        let recommender = Recommender::build(generate_catalog(*size), RecommenderConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("tembea", size), size, |b, _| {
            b.iter(|| recommender.recommend_town_hotels(black_box("Nairobi"), 10));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_similarity, benchmark_town);
criterion_main!(benches);
