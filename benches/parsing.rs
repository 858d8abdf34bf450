use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dice_tray::{dice::sets, distribute_with, AdvantageMode, DieCountMap, DieType, Specifier};
use rand::{rngs::StdRng, SeedableRng};

pub fn benchmark_parsing(c: &mut Criterion) {
    c.bench_function("parse specifier", |b| {
        b.iter(|| Specifier::parse(black_box("3d6-2")))
    });
    c.bench_function("parse spaced specifier", |b| {
        b.iter(|| Specifier::parse(black_box(" 999 D 20 +\t2147483647 ")))
    });
    c.bench_function("parse malformed specifier", |b| {
        b.iter(|| Specifier::parse(black_box("3d7+2")))
    });
}

pub fn benchmark_rolling(c: &mut Criterion) {
    c.bench_function("roll cursed dice", |b| {
        b.iter(|| {
            let specifier = Specifier::new(999, DieType::D20, 0);
            let mut rng = StdRng::seed_from_u64(1);
            specifier.roll_with(&mut rng);
        });
    });
}

pub fn benchmark_distribution(c: &mut Criterion) {
    let set = sets::default_set();
    let catalog = set.catalog();
    let counts: DieCountMap = set.dice().iter().map(|die| (die.id().to_owned(), 20)).collect();

    c.bench_function("distribute full tray with advantage", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            distribute_with(
                black_box(&counts),
                AdvantageMode::Advantage,
                &catalog,
                &mut rng,
            );
        });
    });
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_rolling,
    benchmark_distribution
);
criterion_main!(benches);
