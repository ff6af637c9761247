// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! L2 (Euclidean) distance.
//!

use crate::Coordinate;

/// Squared L2 distance between two vectors.
///
/// Rely on compiler auto-vectorization.
#[inline]
pub fn l2_squared<T: Coordinate>(from: &[T], to: &[T]) -> f64 {
    debug_assert_eq!(from.len(), to.len());
    from.iter()
        .zip(to.iter())
        .map(|(a, b)| (a.as_f64() - b.as_f64()).powi(2))
        .sum::<f64>()
}

/// Euclidean distance between two vectors, `sqrt(sum((a_i - b_i)^2))`.
#[inline]
pub fn l2<T: Coordinate>(from: &[T], to: &[T]) -> f64 {
    l2_squared(from, to).sqrt()
}
