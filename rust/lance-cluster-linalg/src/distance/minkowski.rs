// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Minkowski distance of order `p`.

use crate::Coordinate;

/// `(sum(|a_i - b_i|^p))^(1/p)`.
///
/// `p = 1` is the Manhattan distance and `p = 2` the Euclidean distance.
/// `p` must be a positive, finite number.
#[inline]
pub fn minkowski<T: Coordinate>(from: &[T], to: &[T], p: f64) -> f64 {
    debug_assert_eq!(from.len(), to.len());
    from.iter()
        .zip(to.iter())
        .map(|(a, b)| (a.as_f64() - b.as_f64()).abs().powf(p))
        .sum::<f64>()
        .powf(p.recip())
}
