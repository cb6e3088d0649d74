// File: benches/elementary_benchmarks.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cxkit::prelude::*;

fn test_points() -> Vec<(&'static str, Complex)> {
    vec![
        ("unit", Complex::new(1.0, 1.0)),
        ("near_axis", Complex::new(-0.75, 1e-8)),
        ("large", Complex::new(120.0, -45.0)),
    ]
}

fn bench_arithmetic(c: &mut Criterion) {
    let a = Complex::new(1.25, -0.5);
    let b = Complex::new(-3.0, 2.0);
    let mut group = c.benchmark_group("arithmetic");
    group.bench_function("mul", |bencher| bencher.iter(|| black_box(a) * black_box(b)));
    group.bench_function("div", |bencher| bencher.iter(|| black_box(a) / black_box(b)));
    group.finish();
}

fn bench_exp_log_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("exp_log_pow");
    for (name, z) in test_points() {
        group.bench_with_input(BenchmarkId::new("exp", name), &z, |bencher, z| {
            bencher.iter(|| black_box(z).exp())
        });
        group.bench_with_input(BenchmarkId::new("log", name), &z, |bencher, z| {
            bencher.iter(|| black_box(z).log(1))
        });
        group.bench_with_input(BenchmarkId::new("pow", name), &z, |bencher, z| {
            bencher.iter(|| black_box(z).pow(0.25, 3))
        });
    }
    group.finish();
}

fn bench_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("trig");
    for (name, z) in test_points() {
        group.bench_with_input(BenchmarkId::new("sin", name), &z, |bencher, z| {
            bencher.iter(|| black_box(z).sin())
        });
        group.bench_with_input(BenchmarkId::new("tanh", name), &z, |bencher, z| {
            bencher.iter(|| black_box(z).tanh())
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    for (name, z) in test_points() {
        group.bench_with_input(BenchmarkId::new("asin", name), &z, |bencher, z| {
            bencher.iter(|| black_box(z).asin(0, 0))
        });
        group.bench_with_input(BenchmarkId::new("acosh", name), &z, |bencher, z| {
            bencher.iter(|| black_box(z).acosh(0, 1))
        });
        group.bench_with_input(BenchmarkId::new("atan", name), &z, |bencher, z| {
            bencher.iter(|| black_box(z).atan(0))
        });
    }
    group.finish();
}

criterion_group!(
    elementary_benches,
    bench_arithmetic,
    bench_exp_log_pow,
    bench_trig,
    bench_inverse,
);
criterion_main!(elementary_benches);
