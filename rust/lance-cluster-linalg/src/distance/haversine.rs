// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Great-circle distance on a sphere.

use crate::Coordinate;

/// Haversine distance between two `(latitude, longitude)` points given in
/// degrees, on a sphere of the given `radius`. The result has the unit of
/// `radius`.
///
/// Both slices must have exactly two elements.
#[inline]
pub fn haversine<T: Coordinate>(from: &[T], to: &[T], radius: f64) -> f64 {
    debug_assert_eq!(from.len(), 2);
    debug_assert_eq!(to.len(), 2);
    let lat1 = from[0].as_f64().to_radians();
    let lon1 = from[1].as_f64().to_radians();
    let lat2 = to[0].as_f64().to_radians();
    let lon2 = to[1].as_f64().to_radians();

    let sin_dlat = ((lat2 - lat1) / 2.0).sin();
    let sin_dlon = ((lon2 - lon1) / 2.0).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    // Rounding can push h slightly above 1 for antipodal points.
    2.0 * radius * h.clamp(0.0, 1.0).sqrt().asin()
}
