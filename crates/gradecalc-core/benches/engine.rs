use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradecalc_core::engine::compute;
use gradecalc_core::model::GradeInputs;
use gradecalc_core::parser::parse_inputs;

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    group.bench_function("impossible", |b| {
        let inputs = GradeInputs::new(10, 90.0, 85.0, 95.0);
        b.iter(|| compute(black_box(inputs)))
    });

    group.bench_function("achievable", |b| {
        let inputs = GradeInputs::new(100, 100.0, 100.0, 100.0);
        b.iter(|| compute(black_box(inputs)))
    });

    group.bench_function("rejected", |b| {
        let inputs = GradeInputs::new(10, 150.0, 85.0, 95.0);
        b.iter(|| compute(black_box(inputs)))
    });

    group.finish();
}

fn bench_parse_inputs(c: &mut Criterion) {
    c.bench_function("parse_inputs", |b| {
        b.iter(|| {
            parse_inputs(
                black_box(" 10 "),
                black_box("90"),
                black_box("85.5"),
                black_box("95"),
            )
        })
    });
}

criterion_group!(benches, bench_compute, bench_parse_inputs);
criterion_main!(benches);
