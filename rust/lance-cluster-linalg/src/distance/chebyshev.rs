// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Chebyshev (L-infinity) distance.

use crate::Coordinate;

/// The largest absolute difference along any axis.
#[inline]
pub fn chebyshev<T: Coordinate>(from: &[T], to: &[T]) -> f64 {
    debug_assert_eq!(from.len(), to.len());
    from.iter()
        .zip(to.iter())
        .map(|(a, b)| (a.as_f64() - b.as_f64()).abs())
        .fold(0.0, f64::max)
}
