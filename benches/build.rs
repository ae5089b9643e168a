//! Reaction table benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use abeta_network::export::write_text;
use abeta_network::{build_reactions, validate, BuilderConfig};

fn bench_build(c: &mut Criterion) {
    let config = BuilderConfig::default();

    c.bench_function("build_reactions", |b| {
        b.iter(|| build_reactions(black_box(&config)))
    });
}

fn bench_validate(c: &mut Criterion) {
    let table = build_reactions(&BuilderConfig::default());

    c.bench_function("validate", |b| b.iter(|| validate(black_box(&table))));
}

fn bench_text_dump(c: &mut Criterion) {
    let table = build_reactions(&BuilderConfig::default());

    c.bench_function("text_dump", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(128 * 1024);
            write_text(black_box(&table), &mut out).map(|_| out.len())
        })
    });
}

criterion_group!(benches, bench_build, bench_validate, bench_text_dump);
criterion_main!(benches);
