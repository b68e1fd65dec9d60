// File: benches/complex_benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use cxkit::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum InverseType {
    Asin,
    Acos,
    Atan,
    Asinh,
    Acosh,
    Atanh,
    Acsch,
    Asech,
}

impl InverseType {
    pub fn name(&self) -> &'static str {
        match self {
            InverseType::Asin => "asin",
            InverseType::Acos => "acos",
            InverseType::Atan => "atan",
            InverseType::Asinh => "asinh",
            InverseType::Acosh => "acosh",
            InverseType::Atanh => "atanh",
            InverseType::Acsch => "acsch",
            InverseType::Asech => "asech",
        }
    }

    pub fn all_types() -> Vec<InverseType> {
        vec![
            InverseType::Asin,
            InverseType::Acos,
            InverseType::Atan,
            InverseType::Asinh,
            InverseType::Acosh,
            InverseType::Atanh,
            InverseType::Acsch,
            InverseType::Asech,
        ]
    }

    pub fn apply(&self, z: Complex) -> Complex {
        match self {
            InverseType::Asin => z.asin(),
            InverseType::Acos => z.acos(),
            InverseType::Atan => z.atan(),
            InverseType::Asinh => z.asinh(),
            InverseType::Acosh => z.acosh(),
            InverseType::Atanh => z.atanh(),
            InverseType::Acsch => z.acsch(),
            InverseType::Asech => z.asech(),
        }
    }
}

fn samples() -> Vec<Complex> {
    vec![
        Complex::new(0.3, 0.2),
        Complex::new(-1.1, 0.7),
        Complex::new(2.0, -0.5),
        Complex::new(1e300, 1e-300),
        Complex::new(-4.0, 3.0),
    ]
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");
    group.measurement_time(Duration::from_secs(3));

    let divisors = [
        ("finite", Complex::new(0.5, 4.0)),
        ("real", Complex::new(3.0, 0.0)),
        ("zero", Complex::ZERO),
        ("large", Complex::new(1e-300, 1e300)),
    ];

    for (name, divisor) in divisors {
        group.bench_with_input(BenchmarkId::new("div", name), &divisor, |b, d| {
            b.iter(|| {
                samples()
                    .into_iter()
                    .map(|z| black_box(z).div(*d))
                    .fold(Complex::ZERO, |acc, q| acc + q)
            })
        });
    }

    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");

    let exponents = [
        ("integer", Complex::new(3.0, 0.0)),
        ("fraction", Complex::new(1.0 / 3.0, 0.0)),
        ("complex", Complex::new(1.0, 1.0)),
    ];

    for (name, w) in exponents {
        group.bench_with_input(BenchmarkId::new("pow", name), &w, |b, w| {
            b.iter(|| {
                samples()
                    .into_iter()
                    .map(|z| black_box(z).pow(*w))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.bench_function("imaginary_unit_cycle", |b| {
        b.iter(|| black_box(Complex::new(0.0, 2.0)).pow(black_box(7.0)))
    });

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");

    for inverse in InverseType::all_types() {
        group.bench_function(inverse.name(), |b| {
            b.iter(|| {
                samples()
                    .into_iter()
                    .map(|z| inverse.apply(black_box(z)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| Complex::parse(black_box("-2.5e3 + 4.25i")))
    });
}

criterion_group!(benches, bench_division, bench_pow, bench_inverse, bench_parse);
criterion_main!(benches);
