// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Lloyd's K-Means over [`Point`]s of any [`Coordinate`] type.
//!
//! ```rust,ignore
//! let mut kmeans = KMeans::try_new(&points, k, KMeansParams::default())?;
//! kmeans.initialize()?;
//! while !kmeans.assign_step()? {
//!   ...
//! }
//! ```

use std::collections::HashSet;

use lance_cluster_linalg::{kernels::try_argmin_value, Coordinate, DistanceType, Error, Result};
use log::{debug, info, warn};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use snafu::location;
use tracing::instrument;

use crate::{Cluster, Point};

/// KMean initialization method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KMeanInit {
    /// `k` distinct points chosen uniformly at random.
    #[default]
    Random,
    /// k-means++: each further seed is drawn with probability proportional to
    /// the squared distance from the closest seed chosen so far.
    KMeanPlusPlus,
}

/// KMean Training Parameters
#[derive(Debug, Clone)]
pub struct KMeansParams {
    /// Max number of iterations used by [`train_kmeans`].
    pub max_iters: u32,

    /// Init methods.
    pub init: KMeanInit,

    /// The distance used for assignment and cluster statistics.
    pub distance_type: DistanceType,

    /// Seed of the random generator used to pick the initial centroids.
    /// If None, the generator is seeded from system entropy.
    pub seed: Option<u64>,
}

impl Default for KMeansParams {
    fn default() -> Self {
        Self {
            max_iters: 50,
            init: KMeanInit::Random,
            distance_type: DistanceType::L2,
            seed: None,
        }
    }
}

/// Lifecycle of a [`KMeans`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KMeansState {
    /// Constructed, no centroids chosen yet.
    Initializing,
    /// Seeded; assignment steps are still changing memberships.
    Iterating,
    /// The last assignment step changed no membership.
    Converged,
}

/// K-Means over a borrowed set of points.
///
/// The centroids of the run are the centroids of [`KMeans::clusters`].
pub struct KMeans<'a, T: Coordinate> {
    points: &'a [Point<T>],
    k: usize,
    params: KMeansParams,
    clusters: Vec<Cluster<T>>,
    state: KMeansState,
    iterations: u32,
    rng: StdRng,
}

fn validate<T: Coordinate>(points: &[Point<T>], k: usize) -> Result<()> {
    if points.is_empty() {
        return Err(Error::EmptyInput {
            message: "KMeans: no points to cluster".to_string(),
            location: location!(),
        });
    }
    if k < 2 {
        return Err(Error::TooFewClusters {
            k,
            location: location!(),
        });
    }
    if k >= points.len() {
        return Err(Error::TooManyClusters {
            k,
            num_points: points.len(),
            location: location!(),
        });
    }
    Ok(())
}

/// Pick `k` distinct indices in `0..n` uniformly, rejecting repeats.
fn random_indices(rng: &mut impl Rng, n: usize, k: usize) -> Vec<usize> {
    debug_assert!(k <= n);
    let mut seen = HashSet::with_capacity(k);
    let mut chosen = Vec::with_capacity(k);
    while chosen.len() < k {
        let idx = rng.gen_range(0..n);
        if seen.insert(idx) {
            chosen.push(idx);
        }
    }
    chosen
}

/// Index of the cluster whose centroid is closest to `point`. Ties go to the
/// lowest index.
fn nearest_cluster<T: Coordinate>(clusters: &[Cluster<T>], point: &Point<T>) -> Result<u32> {
    try_argmin_value(clusters.iter().map(|c| c.distance_to(point)))?
        .map(|(idx, _)| idx)
        .ok_or_else(|| {
            Error::invalid_operation("KMeans: no cluster at a comparable distance", location!())
        })
}

impl<'a, T: Coordinate> KMeans<'a, T> {
    /// Create a run over `points` with `k` clusters.
    ///
    /// Requires `2 <= k < points.len()`.
    pub fn try_new(points: &'a [Point<T>], k: usize, params: KMeansParams) -> Result<Self> {
        validate(points, k)?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            points,
            k,
            params,
            clusters: Vec::new(),
            state: KMeansState::Initializing,
            iterations: 0,
            rng,
        })
    }

    /// Choose `k` distinct input points as centroids and seed one empty
    /// cluster at each of them.
    pub fn initialize(&mut self) -> Result<()> {
        validate(self.points, self.k)?;
        let chosen = match self.params.init {
            KMeanInit::Random => random_indices(&mut self.rng, self.points.len(), self.k),
            KMeanInit::KMeanPlusPlus => self.kmean_plusplus_indices()?,
        };
        debug!("KMeans: initial centroids are points {:?}", chosen);

        let distance_type = self.params.distance_type;
        self.clusters = chosen
            .into_iter()
            .map(|idx| Cluster::new(self.points[idx].clone()).with_distance_type(distance_type))
            .collect::<Result<Vec<_>>>()?;
        self.state = KMeansState::Iterating;
        self.iterations = 0;
        Ok(())
    }

    fn kmean_plusplus_indices(&mut self) -> Result<Vec<usize>> {
        let points = self.points;
        let distance_type = self.params.distance_type;
        let n = points.len();

        let first = self.rng.gen_range(0..n);
        let mut seen = HashSet::from([first]);
        let mut chosen = vec![first];
        let mut min_dists = points
            .par_iter()
            .map(|p| p.distance_with(&points[first], distance_type))
            .collect::<Result<Vec<f64>>>()?;

        while chosen.len() < self.k {
            let weights = min_dists.iter().enumerate().map(|(idx, &d)| {
                if seen.contains(&idx) || !d.is_finite() || d < 0.0 {
                    0.0
                } else {
                    d * d
                }
            });
            let next = match WeightedIndex::new(weights) {
                Ok(dist) => dist.sample(&mut self.rng),
                Err(e) => {
                    // All remaining points coincide with a seed.
                    warn!("KMeans++: falling back to uniform sampling: {}", e);
                    loop {
                        let idx = self.rng.gen_range(0..n);
                        if !seen.contains(&idx) {
                            break idx;
                        }
                    }
                }
            };
            seen.insert(next);
            chosen.push(next);

            let centroid = &points[next];
            min_dists = points
                .par_iter()
                .zip(min_dists.par_iter())
                .map(|(p, &d)| Ok(d.min(p.distance_with(centroid, distance_type)?)))
                .collect::<Result<Vec<f64>>>()?;
        }
        Ok(chosen)
    }

    /// Assign every point to its nearest centroid and replace each cluster
    /// whose membership changed.
    ///
    /// Memberships are compared as ordered sequences. Returns whether any
    /// cluster changed; when none did the run is converged.
    #[instrument(level = "debug", skip_all)]
    pub fn assign_step(&mut self) -> Result<bool> {
        match self.state {
            KMeansState::Initializing => {
                return Err(Error::invalid_operation(
                    "KMeans: initialize() must be called before assign_step()",
                    location!(),
                ));
            }
            KMeansState::Converged => return Ok(false),
            KMeansState::Iterating => {}
        }

        let clusters = &self.clusters;
        let assignments = self
            .points
            .par_iter()
            .map(|point| nearest_cluster(clusters, point))
            .collect::<Result<Vec<u32>>>()?;

        let mut memberships = vec![Vec::new(); self.k];
        for (point, cluster_id) in self.points.iter().zip(assignments) {
            memberships[cluster_id as usize].push(point.clone());
        }

        let proposed = self
            .clusters
            .iter()
            .zip(memberships)
            .enumerate()
            .map(|(i, (cluster, members))| {
                if cluster.members() == members.as_slice() {
                    return Ok(None);
                }
                if members.is_empty() {
                    warn!("KMeans: cluster {} is empty", i);
                }
                cluster.rebuild(members).map(Some)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut changed = false;
        for (cluster, replacement) in self.clusters.iter_mut().zip(proposed) {
            if let Some(replacement) = replacement {
                *cluster = replacement;
                changed = true;
            }
        }

        self.iterations += 1;
        if !changed {
            self.state = KMeansState::Converged;
        }
        Ok(changed)
    }

    /// Run assignment steps until convergence or `max_iterations` steps.
    ///
    /// Initializes the run first if needed. Running out of iterations is not an
    /// error, the current clusters are kept.
    pub fn run(&mut self, max_iterations: u32) -> Result<()> {
        if self.state == KMeansState::Initializing {
            self.initialize()?;
        }
        let start = self.iterations;
        while self.state != KMeansState::Converged && self.iterations - start < max_iterations {
            if !self.assign_step()? {
                info!(
                    "KMeans training: converged at iteration {}",
                    self.iterations
                );
            } else if self.iterations % 10 == 0 {
                info!(
                    "KMeans training: iteration {} ({} / {} in this run)",
                    self.iterations,
                    self.iterations - start,
                    max_iterations
                );
            }
        }
        if !self.has_converged() {
            warn!(
                "KMeans training: not converged after {} iterations",
                self.iterations
            );
        }
        Ok(())
    }

    pub fn has_converged(&self) -> bool {
        self.state == KMeansState::Converged
    }

    pub fn state(&self) -> KMeansState {
        self.state
    }

    /// Number of assignment steps performed.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Current clusters. Before the first assignment step these are the empty
    /// seed clusters, before initialization there are none.
    pub fn clusters(&self) -> &[Cluster<T>] {
        &self.clusters
    }

    /// The clusters of a converged run.
    pub fn converged_clusters(&self) -> Result<&[Cluster<T>]> {
        if !self.has_converged() {
            return Err(Error::invalid_operation(
                format!("KMeans: run has not converged after {} iterations", self.iterations),
                location!(),
            ));
        }
        Ok(&self.clusters)
    }

    pub fn centroids(&self) -> impl Iterator<Item = &Point<T>> + '_ {
        self.clusters.iter().map(|c| c.centroid())
    }

    pub fn into_clusters(self) -> Vec<Cluster<T>> {
        self.clusters
    }
}

/// Train K-Means on `points` with `k` clusters for at most `params.max_iters`
/// iterations and return the clusters.
pub fn train_kmeans<T: Coordinate>(
    points: &[Point<T>],
    k: usize,
    params: KMeansParams,
) -> Result<Vec<Cluster<T>>> {
    let max_iters = params.max_iters;
    let mut kmeans = KMeans::try_new(points, k, params)?;
    kmeans.run(max_iters)?;
    Ok(kmeans.into_clusters())
}
