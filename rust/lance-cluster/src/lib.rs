// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Generic K-Means clustering over points of any numeric coordinate type,
//! with silhouette-based evaluation of the resulting partition.
//!
//! ```rust,ignore
//! use lance_cluster::{KMeans, KMeansParams, Point, Silhouette};
//!
//! let points = vec![Point::from([0.0, 0.0]), /* ... */];
//! let mut kmeans = KMeans::try_new(&points, 2, KMeansParams::default())?;
//! kmeans.run(100)?;
//! let score = Silhouette::try_new(kmeans.clusters(), Default::default())?.evaluate();
//! ```

pub mod arrow;
pub mod cluster;
pub mod kmeans;
pub mod point;
pub mod silhouette;

pub use cluster::Cluster;
pub use kmeans::{train_kmeans, KMeanInit, KMeans, KMeansParams, KMeansState};
pub use lance_cluster_linalg::{Coordinate, DistanceType, Error, Result};
pub use point::Point;
pub use silhouette::Silhouette;
