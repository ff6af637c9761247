// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

use criterion::{criterion_group, criterion_main, Criterion};
#[cfg(target_os = "linux")]
use pprof::criterion::{Output, PProfProfiler};

use lance_cluster::{DistanceType, KMeanInit, KMeans, KMeansParams, Point};
use lance_cluster_testing::datagen::generate_random_rows;

fn bench_train(c: &mut Criterion) {
    let params = [
        (16 * 1024, 8, 16),
        (16 * 1024, 128, 16),
        (4 * 1024, 128, 64),
    ];
    for (n, dimension, k) in params {
        let points = generate_random_rows(n, dimension, 42)
            .into_iter()
            .map(Point::from)
            .collect::<Vec<_>>();

        for init in [KMeanInit::Random, KMeanInit::KMeanPlusPlus] {
            let params = KMeansParams {
                max_iters: 10,
                init,
                seed: Some(42),
                ..Default::default()
            };
            c.bench_function(
                &format!("train_{:?}_{}d_{}k_{}", init, dimension, n / 1024, k),
                |b| {
                    b.iter(|| {
                        let mut kmeans = KMeans::try_new(&points, k, params.clone()).unwrap();
                        kmeans.run(params.max_iters).unwrap();
                    })
                },
            );
        }

        let params = KMeansParams {
            distance_type: DistanceType::Manhattan,
            seed: Some(42),
            ..Default::default()
        };
        c.bench_function(
            &format!("first_assign_step_l1_{}d_{}k_{}", dimension, n / 1024, k),
            |b| {
                b.iter(|| {
                    let mut kmeans = KMeans::try_new(&points, k, params.clone()).unwrap();
                    kmeans.initialize().unwrap();
                    kmeans.assign_step().unwrap()
                })
            },
        );
    }
}

#[cfg(target_os = "linux")]
criterion_group!(
    name=benches;
    config = Criterion::default().significance_level(0.1).sample_size(10)
    .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = bench_train);

// Non-linux version does not support pprof.
#[cfg(not(target_os = "linux"))]
criterion_group!(
    name=benches;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = bench_train);
criterion_main!(benches);
