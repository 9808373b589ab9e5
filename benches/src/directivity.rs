use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::Itertools;
use noisedir::prelude::*;
use rand::prelude::*;

const FREQUENCIES: [f64; 8] = [63., 125., 250., 500., 1000., 2000., 4000., 8000.];

/// Grid with `step` degrees between records over the whole sphere.
pub fn generate_directivity(step: usize, method: InterpolationMethod) -> DiscreteDirectivity {
    let mut directivity = DiscreteDirectivity::with_option(
        0,
        FREQUENCIES,
        DirectivityOption {
            interpolation: method,
        },
    )
    .unwrap();
    directivity
        .insert_records(
            (-90 / step as i32 + 1..=90 / step as i32)
                .map(|i| (i * step as i32) as f64 * deg)
                .cartesian_product((0..360 / step).map(|j| (j * step) as f64 * deg))
                .map(|(theta, phi)| {
                    DirectivityRecord::from_angles(
                        theta,
                        phi,
                        FREQUENCIES.map(|f| -(f / 1000.) * (1. - phi.radian().cos())),
                    )
                }),
        )
        .unwrap();
    directivity
}

fn directions(n: usize) -> Vec<(f64, f64)> {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| {
            (
                rng.random_range(0.0..2. * PI),
                rng.random_range(-PI / 2. + 0.01..PI / 2.),
            )
        })
        .collect()
}

const STEPS: &[usize] = &[15, 5, 1];

fn attenuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("noisedir/directivity/attenuation");

    [InterpolationMethod::Nearest, InterpolationMethod::Bilinear]
        .into_iter()
        .for_each(|method| {
            STEPS.iter().for_each(|&step| {
                group.bench_with_input(
                    BenchmarkId::new(format!("{method:?}"), step),
                    &generate_directivity(step, method),
                    |b, directivity| {
                        let directions = directions(1024);
                        b.iter(|| {
                            directions.iter().for_each(|&(phi, theta)| {
                                black_box(directivity.attenuation(
                                    black_box(1000.),
                                    black_box(phi),
                                    black_box(theta),
                                ));
                            })
                        })
                    },
                );
            });
        });
    group.finish();
}

fn attenuation_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("noisedir/directivity/attenuation_array");

    STEPS.iter().for_each(|&step| {
        group.bench_with_input(
            BenchmarkId::new("Bilinear", step),
            &generate_directivity(step, InterpolationMethod::Bilinear),
            |b, directivity| {
                let directions = directions(1024);
                b.iter(|| {
                    directions.iter().for_each(|&(phi, theta)| {
                        black_box(directivity.attenuation_array(
                            black_box(&FREQUENCIES),
                            black_box(phi),
                            black_box(theta),
                        ));
                    })
                })
            },
        );
    });
    group.finish();
}

fn attenuation_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("noisedir/directivity/attenuation_batch");

    [1024, 16384].into_iter().for_each(|n| {
        group.bench_with_input(
            BenchmarkId::new("Bilinear", n),
            &generate_directivity(5, InterpolationMethod::Bilinear),
            |b, directivity| {
                let directions = directions(n);
                b.iter(|| {
                    black_box(directivity.attenuation_batch(
                        black_box(&FREQUENCIES),
                        black_box(&directions),
                    ))
                })
            },
        );
    });
    group.finish();
}

criterion_group!(benches, attenuation, attenuation_array, attenuation_batch);
criterion_main!(benches);
