// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Distance metrics
//!
//! This module provides distance metrics for coordinate vectors.
//!
//! - Any [`Coordinate`] scalar is supported, computations run in `f64`.
//! - True metrics: [`DistanceType::L2`], [`DistanceType::Manhattan`],
//!   [`DistanceType::Chebyshev`], [`DistanceType::Minkowski`],
//!   [`DistanceType::Haversine`] and [`DistanceType::Hamming`].
//! - [`DistanceType::Cosine`] and [`DistanceType::Jaccard`] are
//!   similarity / dissimilarity measures and do not guarantee `d(a, a) == 0`.

use std::str::FromStr;

use snafu::location;

pub mod chebyshev;
pub mod cosine;
pub mod hamming;
pub mod haversine;
pub mod jaccard;
pub mod l2;
pub mod manhattan;
pub mod minkowski;

pub use chebyshev::*;
pub use cosine::*;
pub use hamming::*;
pub use haversine::*;
pub use jaccard::*;
pub use l2::*;
pub use manhattan::*;
pub use minkowski::*;

use crate::{Coordinate, Error, Result};

/// Mean radius of the Earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Distance metrics type.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DistanceType {
    /// Euclidean distance.
    #[default]
    L2,
    /// Sum of absolute differences.
    Manhattan,
    /// Largest absolute difference along any axis.
    Chebyshev,
    /// Cosine similarity, `dot(a, b) / (|a| * |b|)`.
    Cosine,
    /// Generalized distance of order `p`.
    Minkowski { p: f64 },
    /// Great-circle distance between `(latitude, longitude)` pairs in degrees,
    /// on a sphere of the given radius.
    Haversine { radius: f64 },
    /// Jaccard distance over the sets of coordinate values.
    Jaccard,
    /// Number of positions whose coordinates differ.
    Hamming,
}

impl DistanceType {
    /// Compute the distance between two coordinate vectors.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the vectors have different
    /// lengths, or when [`DistanceType::Haversine`] is given anything other
    /// than two 2-D vectors.
    pub fn distance<T: Coordinate>(&self, from: &[T], to: &[T]) -> Result<f64> {
        if from.len() != to.len() {
            return Err(Error::dimension_mismatch(from.len(), to.len(), location!()));
        }
        let dist = match *self {
            Self::L2 => l2(from, to),
            Self::Manhattan => manhattan(from, to),
            Self::Chebyshev => chebyshev(from, to),
            Self::Cosine => cosine_similarity(from, to),
            Self::Minkowski { p } => {
                if !(p.is_finite() && p > 0.0) {
                    return Err(Error::invalid_argument(
                        format!("Minkowski order must be a positive finite number, got {p}"),
                        location!(),
                    ));
                }
                minkowski(from, to, p)
            }
            Self::Haversine { radius } => {
                if from.len() != 2 {
                    return Err(Error::dimension_mismatch(2, from.len(), location!()));
                }
                if !(radius.is_finite() && radius >= 0.0) {
                    return Err(Error::invalid_argument(
                        format!("Haversine radius must be a non-negative finite number, got {radius}"),
                        location!(),
                    ));
                }
                haversine(from, to, radius)
            }
            Self::Jaccard => jaccard(from, to),
            Self::Hamming => hamming(from, to),
        };
        Ok(dist)
    }

    /// Whether this distance satisfies the metric axioms, in particular
    /// `d(a, b) == 0` iff `a == b`.
    pub fn is_metric(&self) -> bool {
        !matches!(self, Self::Cosine | Self::Jaccard)
    }
}

impl std::fmt::Display for DistanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L2 => write!(f, "l2"),
            Self::Manhattan => write!(f, "manhattan"),
            Self::Chebyshev => write!(f, "chebyshev"),
            Self::Cosine => write!(f, "cosine"),
            Self::Minkowski { p } => write!(f, "minkowski(p={p})"),
            Self::Haversine { radius } => write!(f, "haversine(radius={radius})"),
            Self::Jaccard => write!(f, "jaccard"),
            Self::Hamming => write!(f, "hamming"),
        }
    }
}

impl TryFrom<&str> for DistanceType {
    type Error = Error;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "l2" | "euclidean" => Ok(Self::L2),
            "l1" | "manhattan" => Ok(Self::Manhattan),
            "chebyshev" => Ok(Self::Chebyshev),
            "cosine" => Ok(Self::Cosine),
            "minkowski" => Ok(Self::Minkowski { p: 2.0 }),
            "haversine" | "great_circle" => Ok(Self::Haversine {
                radius: EARTH_RADIUS_KM,
            }),
            "jaccard" => Ok(Self::Jaccard),
            "hamming" => Ok(Self::Hamming),
            _ => Err(Error::invalid_argument(
                format!("Distance type '{s}' is not supported"),
                location!(),
            )),
        }
    }
}

impl FromStr for DistanceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}
