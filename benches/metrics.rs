#![allow(missing_docs, dead_code)]

use std::hint::black_box;

use criterion::*;

use rand::prelude::*;

use geodist::{Metric, PNormConfig, RadiusConfig};

/// Generates `cardinality` random vectors of the given dimensionality.
fn random_tabular(
    cardinality: usize,
    dimensionality: usize,
    min_val: f64,
    max_val: f64,
    rng: &mut rand::rngs::StdRng,
) -> Vec<Vec<f64>> {
    (0..cardinality)
        .map(|_| (0..dimensionality).map(|_| rng.gen_range(min_val..=max_val)).collect())
        .collect()
}

fn vector_metrics(c: &mut Criterion) {
    let (cardinality, min_val, max_val) = (2, -10.0, 10.0);

    let mut group = c.benchmark_group("VectorMetrics");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    let metrics: &[(&str, Metric<f64>)] = &[
        ("Manhattan", Metric::Manhattan),
        ("Euclidean", Metric::Euclidean),
        ("Chebyshev", Metric::Chebyshev),
        ("P3", Metric::PNorm(PNormConfig { exponent: Some(3.0) })),
        ("Cosine", Metric::Cosine),
        ("Canberra", Metric::Canberra),
        ("BrayCurtis", Metric::BrayCurtis),
    ];

    for d in 2..=5 {
        let dimensionality = 10_usize.pow(d);
        let data = random_tabular(
            cardinality,
            dimensionality,
            min_val,
            max_val,
            &mut rand::rngs::StdRng::seed_from_u64(u64::from(d)),
        );

        for (name, metric) in metrics {
            let id = BenchmarkId::new(*name, dimensionality);
            group.bench_with_input(id, &dimensionality, |b, _| {
                b.iter(|| black_box(metric.distance(&data[0], &data[1])));
            });
        }
    }
    group.finish();
}

fn sphere_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("SphereMetrics");

    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let geographic: Vec<[f64; 2]> = (0..2)
        .map(|_| [rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0)])
        .collect();

    let earth = Metric::Geographical(RadiusConfig { radius: 6371.0 });
    group.bench_function("Geographical", |b| {
        b.iter(|| black_box(earth.distance(&geographic[0], &geographic[1])));
    });

    let sphere = Metric::Sphere(RadiusConfig { radius: 1.0 });
    let spherical: Vec<[f64; 2]> = (0..2)
        .map(|_| {
            [
                rng.gen_range(0.0..=std::f64::consts::PI),
                rng.gen_range(0.0..=std::f64::consts::TAU),
            ]
        })
        .collect();
    group.bench_function("Sphere", |b| {
        b.iter(|| black_box(sphere.distance(&spherical[0], &spherical[1])));
    });

    group.finish();
}

criterion_group!(benches, vector_metrics, sphere_metrics);
criterion_main!(benches);
