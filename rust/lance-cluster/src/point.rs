// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

use std::fmt;
use std::sync::Arc;

use lance_cluster_linalg::{Coordinate, DistanceType, Error, Result};
use snafu::location;

/// An immutable point in a fixed number of dimensions.
///
/// Cloning is cheap, the coordinates are shared. Two points are equal iff
/// they have the same dimension and exactly equal coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<T: Coordinate> {
    coordinates: Arc<[T]>,
}

impl<T: Coordinate> Point<T> {
    pub fn new(coordinates: impl Into<Arc<[T]>>) -> Self {
        Self {
            coordinates: coordinates.into(),
        }
    }

    /// Create a point from coordinates that may be absent.
    pub fn try_new(coordinates: Option<Vec<T>>) -> Result<Self> {
        coordinates
            .map(Self::new)
            .ok_or_else(|| Error::invalid_argument("point coordinates are required", location!()))
    }

    /// A zero-dimensional point, used as the centroid of a cluster that never
    /// had members.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn coordinates(&self) -> &[T] {
        &self.coordinates
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Self) -> Result<f64> {
        self.distance_with(other, DistanceType::L2)
    }

    /// Distance to `other` using `distance_type`.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn distance_with(&self, other: &Self, distance_type: DistanceType) -> Result<f64> {
        distance_type.distance(self.coordinates(), other.coordinates())
    }
}

/// Coordinates separated by `;`, e.g. `1.5;2;-3`.
impl<T: Coordinate + fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<T: Coordinate> From<Vec<T>> for Point<T> {
    fn from(coordinates: Vec<T>) -> Self {
        Self::new(coordinates)
    }
}

impl<T: Coordinate> From<&[T]> for Point<T> {
    fn from(coordinates: &[T]) -> Self {
        Self::new(coordinates)
    }
}

impl<T: Coordinate, const N: usize> From<[T; N]> for Point<T> {
    fn from(coordinates: [T; N]) -> Self {
        Self::new(Vec::from(coordinates))
    }
}
