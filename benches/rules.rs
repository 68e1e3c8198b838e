// benches/rules.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kogi_pathfinder::collect::commercial::commercial_row;
use kogi_pathfinder::collect::settlements::settlement_row;
use kogi_pathfinder::core::OsmFeature;
use kogi_pathfinder::merge::{self, PartialLead};
use kogi_pathfinder::model::Category;
use kogi_pathfinder::rules::{estimate_bucket, Estimator};

const KINDS: [&str; 8] = [
    "marketplace", "bank", "school", "place_of_worship", "fuel", "hotel", "city", "hamlet",
];

fn features(n: usize) -> Vec<OsmFeature> {
    (0..n)
        .map(|i| {
            let f = OsmFeature::new(7.0 + i as f64 * 1e-4, 6.5).with_tag("amenity", KINDS[i % KINDS.len()]);
            if i % 3 == 0 { f } else { f.with_tag("name", &format!("Site {i}")) }
        })
        .collect()
}

fn leads(n: usize) -> Vec<PartialLead> {
    (0..n)
        .map(|i| PartialLead {
            name: format!("Lead {}", i % (n / 2).max(1)),
            category: Some(Category::Business),
            kind: "Shop".into(),
            lga: "Okene".into(),
            estimate: "Low-Medium (Local Traffic)".into(),
            priority: 2,
            latitude: 7.5,
            longitude: 6.2,
        })
        .collect()
}

fn bench_rules(c: &mut Criterion) {
    let fs = features(2_000);

    c.bench_function("estimate_bucket", |b| {
        b.iter(|| {
            for k in KINDS {
                black_box(estimate_bucket(Estimator::Commercial, black_box(k)));
                black_box(estimate_bucket(Estimator::Settlement, black_box(k)));
            }
        })
    });

    c.bench_function("commercial_rows_2k", |b| {
        b.iter(|| fs.iter().map(|f| commercial_row(f, "Lokoja")).count())
    });

    c.bench_function("settlement_rows_2k", |b| {
        b.iter(|| fs.iter().map(|f| settlement_row(f, "Lokoja")).count())
    });

    c.bench_function("merge_dedupe_10k", |b| {
        b.iter_batched(
            || (leads(5_000), leads(5_000)),
            |(a, bb)| black_box(merge::merge(a, bb).rows.len()),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_rules);
criterion_main!(benches);
