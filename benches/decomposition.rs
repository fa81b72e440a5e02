//! Benchmarks for STL and MSTL decomposition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mstl::smoothing::{Degree, Loess};
use mstl::{fit_f32, fit_f64, FitOptions, MSTL, STL};

fn generate_multi_sine(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            10.0 + 0.01 * i as f64
                + (2.0 * std::f64::consts::PI * i as f64 / 24.0).sin()
                + 0.5 * (2.0 * std::f64::consts::PI * i as f64 / 168.0).sin()
        })
        .collect()
}

fn bench_stl(c: &mut Criterion) {
    let mut group = c.benchmark_group("stl");

    for size in [256, 1024, 4096].iter() {
        let signal = generate_multi_sine(*size);

        group.bench_with_input(BenchmarkId::new("default", size), size, |b, _| {
            let stl = STL::new(24);
            b.iter(|| stl.decompose(black_box(&signal)))
        });

        group.bench_with_input(BenchmarkId::new("robust", size), size, |b, _| {
            let stl = STL::new(24).robust();
            b.iter(|| stl.decompose(black_box(&signal)))
        });
    }

    group.finish();
}

fn bench_mstl(c: &mut Criterion) {
    let mut group = c.benchmark_group("mstl");

    for size in [512, 2048, 8192].iter() {
        let signal = generate_multi_sine(*size);
        let narrow: Vec<f32> = signal.iter().map(|&v| v as f32).collect();

        group.bench_with_input(BenchmarkId::new("f64", size), size, |b, _| {
            b.iter(|| fit_f64(black_box(&signal), &[24, 168], &FitOptions::default()))
        });

        group.bench_with_input(BenchmarkId::new("f32", size), size, |b, _| {
            b.iter(|| fit_f32(black_box(&narrow), &[24, 168], &FitOptions::default()))
        });

        group.bench_with_input(BenchmarkId::new("boxcox", size), size, |b, _| {
            let mstl = MSTL::new(vec![24, 168]).with_lambda(0.5);
            b.iter(|| mstl.decompose(black_box(&signal)))
        });
    }

    group.finish();
}

fn bench_loess_jump(c: &mut Criterion) {
    let mut group = c.benchmark_group("loess_jump");
    let signal = generate_multi_sine(4096);

    for jump in [1, 4, 16].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(jump), jump, |b, &jump| {
            let loess = Loess::new(101, Degree::Linear, jump);
            b.iter(|| loess.smooth(black_box(&signal), None))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stl, bench_mstl, bench_loess_jump);
criterion_main!(benches);
