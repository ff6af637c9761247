// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Data generation utilities for unit tests

use std::iter::repeat_with;

use arrow_array::{types::Float32Type, FixedSizeListArray};
use rand::{distributions::Uniform, prelude::Distribution, rngs::StdRng, SeedableRng};

/// Generate `points_per_blob` rows around each of `centers`.
///
/// Every coordinate is offset from its center by a value uniformly drawn from
/// `[-spread, spread)`. Rows are grouped by blob, in the order of `centers`.
pub fn generate_blobs(
    centers: &[Vec<f64>],
    points_per_blob: usize,
    spread: f64,
    seed: u64,
) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let offset = (spread > 0.0).then(|| Uniform::new(-spread, spread));
    let mut rows = Vec::with_capacity(centers.len() * points_per_blob);
    for center in centers {
        for _ in 0..points_per_blob {
            let row = center
                .iter()
                .map(|c| match &offset {
                    Some(offset) => c + offset.sample(&mut rng),
                    None => *c,
                })
                .collect();
            rows.push(row);
        }
    }
    rows
}

/// Generate `n` rows of `dimension` values uniformly distributed in `[0, 1)`.
pub fn generate_random_rows(n: usize, dimension: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Uniform::new(0.0, 1.0);
    repeat_with(|| {
        repeat_with(|| distribution.sample(&mut rng))
            .take(dimension)
            .collect()
    })
    .take(n)
    .collect()
}

/// Create a random float32 `FixedSizeList` array of `n` rows where each element
/// is uniformly distributed between [0..1]
pub fn generate_random_fixed_size_list(n: usize, dimension: i32, seed: u64) -> FixedSizeListArray {
    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Uniform::new(0.0_f32, 1.0);
    FixedSizeListArray::from_iter_primitive::<Float32Type, _, _>(
        repeat_with(|| {
            Some(
                repeat_with(|| Some(distribution.sample(&mut rng)))
                    .take(dimension as usize)
                    .collect::<Vec<_>>(),
            )
        })
        .take(n),
        dimension,
    )
}
