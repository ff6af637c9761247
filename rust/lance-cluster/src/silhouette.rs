// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Silhouette score of a finished partition.
//!
//! For every cluster `i`, `a` is the average distance between its members
//! (self pairs included) and `b` is the smallest average distance from its
//! members to the members of another cluster. The cluster scores
//! `(b - a) / max(a, b)`, or `0` when `a == b`, and the partition scores the
//! unweighted mean over its clusters.

use std::ops::Range;

use lance_cluster_linalg::{Coordinate, DistanceMatrix, DistanceType, Error, Result};
use snafu::location;

use crate::{Cluster, Point};

/// Silhouette evaluator over one partition.
///
/// All pairwise distances are computed once in [`Silhouette::try_new`]. The
/// members of every cluster occupy one contiguous block of rows in the
/// distance matrix.
#[derive(Debug, Clone)]
pub struct Silhouette {
    distances: DistanceMatrix,
    ranges: Vec<Range<usize>>,
}

impl Silhouette {
    /// Build the evaluator for `clusters`, measuring with `distance_type`.
    ///
    /// Requires at least two clusters, none of them empty, and a distance type
    /// that is a true metric. Similarities such as cosine can be negative and
    /// would put the score outside `[-1, 1]`.
    pub fn try_new<T: Coordinate>(
        clusters: &[Cluster<T>],
        distance_type: DistanceType,
    ) -> Result<Self> {
        if !distance_type.is_metric() {
            return Err(Error::invalid_argument(
                format!("silhouette requires a metric distance, got {distance_type}"),
                location!(),
            ));
        }
        if clusters.len() < 2 {
            return Err(Error::invalid_argument(
                format!(
                    "silhouette requires at least 2 clusters, got {}",
                    clusters.len()
                ),
                location!(),
            ));
        }
        if let Some(idx) = clusters.iter().position(|c| c.is_empty()) {
            return Err(Error::invalid_argument(
                format!("silhouette is undefined for empty cluster {idx}"),
                location!(),
            ));
        }

        let mut ranges = Vec::with_capacity(clusters.len());
        let mut points: Vec<&Point<T>> = Vec::new();
        for cluster in clusters {
            let start = points.len();
            points.extend(cluster.members());
            ranges.push(start..points.len());
        }

        let distances = DistanceMatrix::try_new(points.len(), |i, j| {
            points[i].distance_with(points[j], distance_type)
        })?;
        Ok(Self { distances, ranges })
    }

    pub fn num_clusters(&self) -> usize {
        self.ranges.len()
    }

    pub fn num_points(&self) -> usize {
        self.distances.num_rows()
    }

    /// Average distance over all pairs of a member of cluster `i` and a member
    /// of cluster `j`.
    pub fn average_distance(&self, i: usize, j: usize) -> Result<f64> {
        let (Some(rows), Some(cols)) = (self.ranges.get(i), self.ranges.get(j)) else {
            return Err(Error::invalid_argument(
                format!(
                    "cluster index ({i}, {j}) out of range for {} clusters",
                    self.ranges.len()
                ),
                location!(),
            ));
        };
        Ok(self.average(rows, cols))
    }

    /// The silhouette of every cluster, in input order.
    pub fn cluster_scores(&self) -> Vec<f64> {
        (0..self.ranges.len())
            .map(|i| {
                let rows = &self.ranges[i];
                let a = self.average(rows, rows);
                let b = self
                    .ranges
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, cols)| self.average(rows, cols))
                    .fold(f64::INFINITY, f64::min);
                if a == b {
                    0.0
                } else {
                    (b - a) / a.max(b)
                }
            })
            .collect()
    }

    /// Mean silhouette over all clusters, in `[-1, 1]`.
    pub fn evaluate(&self) -> f64 {
        let scores = self.cluster_scores();
        scores.iter().sum::<f64>() / scores.len() as f64
    }

    fn average(&self, rows: &Range<usize>, cols: &Range<usize>) -> f64 {
        let total: f64 = rows
            .clone()
            .map(|r| self.distances.row(r)[cols.clone()].iter().sum::<f64>())
            .sum();
        total / (rows.len() * cols.len()) as f64
    }
}
