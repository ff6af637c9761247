// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Cosine similarity.

use crate::Coordinate;

/// Cosine similarity, `dot(a, b) / (|a| * |b|)`.
///
/// Returns `0` when either vector has zero norm.
#[inline]
pub fn cosine_similarity<T: Coordinate>(from: &[T], to: &[T]) -> f64 {
    debug_assert_eq!(from.len(), to.len());
    let (dot, x_sq, y_sq) = from.iter().zip(to.iter()).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(dot, x_sq, y_sq), (a, b)| {
            let (a, b) = (a.as_f64(), b.as_f64());
            (dot + a * b, x_sq + a * a, y_sq + b * b)
        },
    );
    if x_sq == 0.0 || y_sq == 0.0 {
        return 0.0;
    }
    dot / (x_sq.sqrt() * y_sq.sqrt())
}
