// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Jaccard distance.
//!
//! Coordinates are treated as members of a set, so this distance is only
//! meaningful for discrete or categorical coordinate domains.

use crate::Coordinate;

/// Distinct values of `values`, using coordinate equality for membership.
fn distinct<T: Coordinate>(values: &[T]) -> Vec<T> {
    let mut set: Vec<T> = Vec::with_capacity(values.len());
    for v in values {
        if !set.contains(v) {
            set.push(*v);
        }
    }
    set
}

/// `1 - |A ∩ B| / |A ∪ B|` where `A` and `B` are the sets of coordinate
/// values of each vector.
///
/// Returns `0` when both vectors are empty.
pub fn jaccard<T: Coordinate>(from: &[T], to: &[T]) -> f64 {
    let a = distinct(from);
    let b = distinct(to);
    let intersection = a.iter().filter(|v| b.contains(*v)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    1.0 - intersection as f64 / union as f64
}
