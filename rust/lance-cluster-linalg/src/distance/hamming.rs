// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Hamming distance.

use crate::Coordinate;

/// Hamming distance between two vectors: the number of positions at which
/// the coordinates differ.
#[inline]
pub fn hamming<T: Coordinate>(x: &[T], y: &[T]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter().zip(y.iter()).filter(|(a, b)| a != b).count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming() {
        let x = vec![1_u8, 0, 1, 1];
        let y = vec![1_u8, 0, 1, 1];
        assert_eq!(hamming(&x, &y), 0.0);

        let y = vec![1_u8, 1, 1, 1];
        assert_eq!(hamming(&x, &y), 1.0);

        let y = vec![0_u8, 1, 0, 0];
        assert_eq!(hamming(&x, &y), 4.0);
    }
}
