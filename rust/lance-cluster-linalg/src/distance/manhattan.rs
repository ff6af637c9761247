// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Manhattan (taxicab, L1) distance.

use crate::Coordinate;

/// Sum of absolute differences along each axis.
#[inline]
pub fn manhattan<T: Coordinate>(from: &[T], to: &[T]) -> f64 {
    debug_assert_eq!(from.len(), to.len());
    from.iter()
        .zip(to.iter())
        .map(|(a, b)| (a.as_f64() - b.as_f64()).abs())
        .sum::<f64>()
}
