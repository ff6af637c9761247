// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

use rayon::prelude::*;
use tracing::instrument;

use crate::Result;

/// A dense, symmetric `n * n` matrix of pairwise distances.
///
/// The diagonal is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    n: usize,
}

impl DistanceMatrix {
    /// Build the matrix from a pairwise distance function.
    ///
    /// `dist_fn(i, j)` is only called for `i < j`, once per unordered pair, and
    /// the result is mirrored to `(j, i)`. Rows are computed in parallel.
    #[instrument(level = "debug", skip(dist_fn))]
    pub fn try_new<F>(n: usize, dist_fn: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> Result<f64> + Sync,
    {
        let upper = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| dist_fn(i, j))
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let mut data = vec![0.0_f64; n * n];
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, dist) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                data[i * n + j] = dist;
                data[j * n + i] = dist;
            }
        }
        Ok(Self { data, n })
    }

    /// Number of rows (and columns).
    pub fn num_rows(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// One row of the matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
