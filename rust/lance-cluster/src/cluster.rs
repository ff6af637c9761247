// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

use lance_cluster_linalg::{Coordinate, DistanceType, Error, Result};
use snafu::location;

use crate::Point;

/// A group of points with a cached centroid and distance statistics.
///
/// The centroid, the mean member-to-centroid distance and its (population)
/// standard deviation always describe the current members. A cluster without
/// members keeps the values it had last.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<T: Coordinate> {
    members: Vec<Point<T>>,
    centroid: Point<T>,
    mean_distance: f64,
    std_deviation: f64,
    distance_type: DistanceType,
}

impl<T: Coordinate> Cluster<T> {
    /// An empty cluster seeded at `centroid`.
    pub fn new(centroid: Point<T>) -> Self {
        Self {
            members: Vec::new(),
            centroid,
            mean_distance: 0.0,
            std_deviation: 0.0,
            distance_type: DistanceType::default(),
        }
    }

    /// An empty cluster seeded at `centroid`, which may be absent.
    pub fn try_new(centroid: Option<Point<T>>) -> Result<Self> {
        centroid
            .map(Self::new)
            .ok_or_else(|| Error::invalid_argument("cluster centroid is required", location!()))
    }

    /// A cluster holding `members`, with its centroid and statistics computed.
    ///
    /// An empty list gives a zero-dimensional centroid and zero statistics.
    pub fn try_from_members(members: Vec<Point<T>>) -> Result<Self> {
        let mut cluster = Self::new(Point::empty());
        cluster.members = members;
        cluster.update()?;
        Ok(cluster)
    }

    /// Use `distance_type` for the statistics and [`Cluster::distance_to`].
    pub fn with_distance_type(mut self, distance_type: DistanceType) -> Result<Self> {
        self.distance_type = distance_type;
        self.update()?;
        Ok(self)
    }

    /// A new cluster with the same distance type holding `members`.
    ///
    /// If `members` is empty the new cluster keeps this cluster's centroid and
    /// statistics.
    pub fn rebuild(&self, members: Vec<Point<T>>) -> Result<Self> {
        let mut cluster = Self {
            members,
            centroid: self.centroid.clone(),
            mean_distance: self.mean_distance,
            std_deviation: self.std_deviation,
            distance_type: self.distance_type,
        };
        cluster.update()?;
        Ok(cluster)
    }

    /// Add one point and recompute the statistics.
    pub fn add(&mut self, point: Point<T>) -> Result<()> {
        self.extend(std::iter::once(point))
    }

    /// Add many points, recomputing the statistics once.
    ///
    /// On error the cluster is left unchanged.
    pub fn extend(&mut self, points: impl IntoIterator<Item = Point<T>>) -> Result<()> {
        let len = self.members.len();
        self.members.extend(points);
        if let Err(e) = self.update() {
            self.members.truncate(len);
            return Err(e);
        }
        Ok(())
    }

    /// Distance from the centroid to `point`.
    pub fn distance_to(&self, point: &Point<T>) -> Result<f64> {
        self.centroid.distance_with(point, self.distance_type)
    }

    pub fn members(&self) -> &[Point<T>] {
        &self.members
    }

    pub fn centroid(&self) -> &Point<T> {
        &self.centroid
    }

    /// Mean distance from the members to the centroid.
    pub fn mean_distance(&self) -> f64 {
        self.mean_distance
    }

    /// Population standard deviation of the member-to-centroid distances.
    pub fn std_deviation(&self) -> f64 {
        self.std_deviation
    }

    pub fn distance_type(&self) -> DistanceType {
        self.distance_type
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Dimension of the centroid.
    pub fn dimension(&self) -> usize {
        self.centroid.dimension()
    }

    /// Recompute centroid and statistics from the members.
    ///
    /// Nothing is assigned until every value is computed, so a failure leaves
    /// the previous values in place.
    fn update(&mut self) -> Result<()> {
        let Some(first) = self.members.first() else {
            return Ok(());
        };
        let dimension = first.dimension();

        let mut totals = vec![0.0_f64; dimension];
        for member in &self.members {
            if member.dimension() != dimension {
                return Err(Error::dimension_mismatch(
                    dimension,
                    member.dimension(),
                    location!(),
                ));
            }
            for (total, value) in totals.iter_mut().zip(member.coordinates()) {
                *total += value.as_f64();
            }
        }

        let count = self.members.len() as f64;
        let coordinates = totals
            .into_iter()
            .map(|total| {
                let mean = total / count;
                T::from_f64(mean).ok_or_else(|| {
                    Error::invalid_argument(
                        format!("centroid coordinate {mean} is not representable"),
                        location!(),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let centroid = Point::new(coordinates);

        let distances = self
            .members
            .iter()
            .map(|member| centroid.distance_with(member, self.distance_type))
            .collect::<Result<Vec<_>>>()?;
        let mean = distances.iter().sum::<f64>() / count;
        let variance = distances.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / count;

        self.centroid = centroid;
        self.mean_distance = mean;
        self.std_deviation = variance.sqrt();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn square() -> Vec<Point<f64>> {
        vec![
            Point::from([0.0, 0.0]),
            Point::from([2.0, 0.0]),
            Point::from([0.0, 2.0]),
            Point::from([2.0, 2.0]),
        ]
    }

    #[test]
    fn test_statistics() {
        let cluster = Cluster::try_from_members(square()).unwrap();
        assert_eq!(cluster.centroid(), &Point::from([1.0, 1.0]));
        assert_eq!(cluster.len(), 4);
        assert_relative_eq!(cluster.mean_distance(), 2.0_f64.sqrt());
        assert_relative_eq!(cluster.std_deviation(), 0.0);

        let cluster = Cluster::try_from_members(vec![
            Point::from([0.0_f64]),
            Point::from([1.0]),
            Point::from([5.0]),
        ])
        .unwrap();
        // Centroid 2, distances 2, 1, 3.
        assert_eq!(cluster.centroid(), &Point::from([2.0]));
        assert_relative_eq!(cluster.mean_distance(), 2.0);
        // Population formula: sqrt(((0 + 1 + 1) / 3)).
        assert_relative_eq!(cluster.std_deviation(), (2.0_f64 / 3.0).sqrt());
    }

    #[test]
    fn test_update_is_idempotent() {
        let cluster = Cluster::try_from_members(square()).unwrap();
        let again = Cluster::try_from_members(cluster.members().to_vec()).unwrap();
        assert_eq!(cluster, again);
        let rebuilt = cluster.rebuild(cluster.members().to_vec()).unwrap();
        assert_eq!(cluster, rebuilt);
    }

    #[test]
    fn test_empty_members() {
        let cluster = Cluster::<f64>::try_from_members(vec![]).unwrap();
        assert!(cluster.is_empty());
        assert_eq!(cluster.dimension(), 0);
        assert_eq!(cluster.mean_distance(), 0.0);
        assert_eq!(cluster.std_deviation(), 0.0);
    }

    #[test]
    fn test_seeded_cluster() {
        let cluster = Cluster::new(Point::from([4_i32, 4]));
        assert!(cluster.is_empty());
        assert_eq!(cluster.centroid(), &Point::from([4, 4]));
        assert_relative_eq!(cluster.distance_to(&Point::from([1, 0])).unwrap(), 5.0);

        assert!(matches!(
            Cluster::<i32>::try_new(None),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_rebuild_empty_keeps_last_values() {
        let members = vec![Point::from([1.0_f64, 1.0]), Point::from([3.0, 3.0])];
        let cluster = Cluster::try_from_members(members)
            .unwrap()
            .with_distance_type(DistanceType::Manhattan)
            .unwrap();
        let emptied = cluster.rebuild(vec![]).unwrap();
        assert!(emptied.is_empty());
        assert_eq!(emptied.centroid(), cluster.centroid());
        assert_eq!(emptied.mean_distance(), cluster.mean_distance());
        assert_eq!(emptied.std_deviation(), cluster.std_deviation());
        assert_eq!(emptied.distance_type(), DistanceType::Manhattan);
    }

    #[test]
    fn test_add_and_extend() {
        let mut cluster = Cluster::new(Point::from([0.0_f64, 0.0]));
        cluster.add(Point::from([2.0, 2.0])).unwrap();
        assert_eq!(cluster.centroid(), &Point::from([2.0, 2.0]));
        assert_eq!(cluster.mean_distance(), 0.0);

        cluster
            .extend(vec![Point::from([4.0, 2.0]), Point::from([0.0, 2.0])])
            .unwrap();
        assert_eq!(cluster.len(), 3);
        assert_eq!(cluster.centroid(), &Point::from([2.0, 2.0]));
        assert_relative_eq!(cluster.mean_distance(), 4.0 / 3.0);
    }

    #[test]
    fn test_mismatched_member_is_rejected() {
        let mut cluster = Cluster::try_from_members(square()).unwrap();
        let before = cluster.clone();
        let err = cluster.add(Point::from([1.0, 1.0, 1.0])).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
        assert_eq!(cluster, before);

        assert!(Cluster::try_from_members(vec![
            Point::from([1.0_f64]),
            Point::from([1.0, 2.0])
        ])
        .is_err());
    }

    #[test]
    fn test_integral_centroid_truncates() {
        let cluster = Cluster::try_from_members(vec![
            Point::from([0_i32, 0]),
            Point::from([0, 1]),
            Point::from([1, 0]),
        ])
        .unwrap();
        assert_eq!(cluster.centroid(), &Point::from([0, 0]));

        let cluster =
            Cluster::try_from_members(vec![Point::from([10_u8]), Point::from([11])]).unwrap();
        assert_eq!(cluster.centroid(), &Point::from([10]));
    }

    #[test]
    fn test_distance_type_applies_to_statistics() {
        let members = vec![Point::from([0.0_f64, 0.0]), Point::from([2.0, 2.0])];
        let l2 = Cluster::try_from_members(members.clone()).unwrap();
        let l1 = Cluster::try_from_members(members)
            .unwrap()
            .with_distance_type(DistanceType::Manhattan)
            .unwrap();
        assert_relative_eq!(l2.mean_distance(), 2.0_f64.sqrt());
        assert_relative_eq!(l1.mean_distance(), 2.0);
        assert_eq!(l1.centroid(), l2.centroid());
    }
}
