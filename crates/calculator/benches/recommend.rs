use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use biosite_catalog::PriceCatalog;
use biosite_calculator::{GroundwaterLevel, HouseholdInput, PropertyType, RecommendationEngine};

fn household(occupants: u32, peak: u32, property_type: PropertyType) -> HouseholdInput {
    HouseholdInput {
        occupant_count: occupants,
        peak_occupant_count: peak,
        property_type,
        water_usage_per_person: 150.0,
        groundwater_level: GroundwaterLevel::Auto,
    }
}

fn bench_recommend(c: &mut Criterion) {
    let engine = RecommendationEngine::new(PriceCatalog::builtin().expect("builtin catalog"));

    let cases = [
        ("seasonal", household(4, 4, PropertyType::Seasonal)),
        ("peak_load", household(2, 10, PropertyType::House)),
        ("default", household(12, 12, PropertyType::Business)),
    ];

    let mut group = c.benchmark_group("recommend");
    for (name, input) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| engine.recommend(black_box(input)))
        });
    }
    group.finish();
}

fn bench_catalog_load(c: &mut Criterion) {
    c.bench_function("catalog_builtin_parse", |b| {
        b.iter(|| PriceCatalog::builtin().expect("builtin catalog"))
    });
}

criterion_group!(benches, bench_recommend, bench_catalog_load);
criterion_main!(benches);
