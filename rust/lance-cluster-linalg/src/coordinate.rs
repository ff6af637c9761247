// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Scalar types usable as point coordinates.

use std::fmt::Debug;

use num_traits::{Num, NumCast};

pub use half::{bf16, f16};

/// A numeric scalar that can be used as a coordinate of a point.
///
/// All aggregation (centroids, distances, statistics) happens in `f64`.
/// Converting back with [`Coordinate::from_f64`] is lossy for integral types
/// (values are truncated toward zero).
pub trait Coordinate: Num + NumCast + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Widen to `f64`.
    fn as_f64(self) -> f64;

    /// Narrow from `f64`. Returns `None` if the value is not representable,
    /// for example `NaN` or out of range for an integer type.
    fn from_f64(value: f64) -> Option<Self>;
}

impl<T> Coordinate for T
where
    T: Num + NumCast + Copy + PartialOrd + Debug + Send + Sync + 'static,
{
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    #[inline]
    fn from_f64(value: f64) -> Option<Self> {
        <T as NumCast>::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_round_trip() {
        assert_eq!(1.5_f32.as_f64(), 1.5);
        assert_eq!(f32::from_f64(2.25), Some(2.25_f32));
        assert_eq!(
            <f16 as Coordinate>::from_f64(0.5),
            Some(f16::from_f32(0.5))
        );
        assert_eq!(Coordinate::as_f64(bf16::from_f32(4.0)), 4.0);
    }

    #[test]
    fn test_integral_truncates() {
        assert_eq!(i32::from_f64(10.666), Some(10));
        assert_eq!(i32::from_f64(-0.5), Some(0));
        assert_eq!(u8::from_f64(300.0), None);
        assert_eq!(i64::from_f64(f64::NAN), None);
    }
}
