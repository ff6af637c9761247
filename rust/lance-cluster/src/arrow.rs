// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Conversion between [`Point`]s and Arrow `FixedSizeList` vector arrays.

use std::sync::Arc;

use arrow_array::{
    cast::AsArray, types::ArrowPrimitiveType, Array, FixedSizeListArray, PrimitiveArray,
};
use arrow_schema::Field;
use lance_cluster_linalg::{Coordinate, Error, Result};
use snafu::location;

use crate::{Cluster, Point};

/// Read every row of a `FixedSizeList<T>` array as a point.
///
/// Null rows and null values are rejected.
pub fn points_from_fixed_size_list<T: ArrowPrimitiveType>(
    array: &FixedSizeListArray,
) -> Result<Vec<Point<T::Native>>>
where
    T::Native: Coordinate,
{
    if array.value_type() != T::DATA_TYPE {
        return Err(Error::invalid_argument(
            format!(
                "expect FixedSizeList of {}, got {}",
                T::DATA_TYPE,
                array.data_type()
            ),
            location!(),
        ));
    }
    let values = array
        .values()
        .as_primitive_opt::<T>()
        .ok_or_else(|| Error::invalid_argument("unexpected list values", location!()))?;
    let dimension = array.value_length() as usize;

    (0..array.len())
        .map(|row| {
            if array.is_null(row) {
                return Err(Error::invalid_argument(
                    format!("row {row} is null"),
                    location!(),
                ));
            }
            let start = array.value_offset(row) as usize;
            let range = start..start + dimension;
            if values.null_count() > 0 && range.clone().any(|i| values.is_null(i)) {
                return Err(Error::invalid_argument(
                    format!("row {row} contains null values"),
                    location!(),
                ));
            }
            Ok(Point::new(&values.values()[range]))
        })
        .collect()
}

/// Pack the centroids of `clusters` into a `FixedSizeList<T>` array, one row
/// per cluster.
pub fn centroids_to_fixed_size_list<T: ArrowPrimitiveType>(
    clusters: &[Cluster<T::Native>],
) -> Result<FixedSizeListArray>
where
    T::Native: Coordinate,
{
    let Some(first) = clusters.first() else {
        return Err(Error::invalid_argument("no clusters", location!()));
    };
    let dimension = first.dimension();
    if let Some(other) = clusters.iter().find(|c| c.dimension() != dimension) {
        return Err(Error::dimension_mismatch(
            dimension,
            other.dimension(),
            location!(),
        ));
    }

    let values = PrimitiveArray::<T>::from_iter_values(
        clusters
            .iter()
            .flat_map(|c| c.centroid().coordinates().iter().copied()),
    );
    let list_size = i32::try_from(dimension).map_err(|_| {
        Error::invalid_argument(
            format!("dimension {dimension} does not fit a FixedSizeList"),
            location!(),
        )
    })?;
    let field = Arc::new(Field::new("item", T::DATA_TYPE, true));
    Ok(FixedSizeListArray::try_new(
        field,
        list_size,
        Arc::new(values),
        None,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use arrow_array::types::{Float16Type, Float32Type, Float64Type, Int32Type};
    use half::f16;
    use lance_cluster_testing::datagen::generate_random_fixed_size_list;

    use crate::{train_kmeans, KMeansParams};

    #[test]
    fn test_points_from_fixed_size_list() {
        let array = generate_random_fixed_size_list(16, 4, 7);
        let points = points_from_fixed_size_list::<Float32Type>(&array).unwrap();
        assert_eq!(points.len(), 16);
        let values = array.values().as_primitive::<Float32Type>();
        for (row, point) in points.iter().enumerate() {
            assert_eq!(point.dimension(), 4);
            assert_eq!(point.coordinates(), &values.values()[row * 4..(row + 1) * 4]);
        }

        // Slicing keeps the row offsets.
        let sliced = array.slice(3, 2);
        let points = points_from_fixed_size_list::<Float32Type>(&sliced).unwrap();
        assert_eq!(points[0].coordinates(), &values.values()[12..16]);
    }

    #[test]
    fn test_wrong_value_type() {
        let array = generate_random_fixed_size_list(4, 2, 1);
        assert!(matches!(
            points_from_fixed_size_list::<Float64Type>(&array),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_null_rows() {
        let array = FixedSizeListArray::from_iter_primitive::<Int32Type, _, _>(
            vec![Some(vec![Some(1), Some(2)]), None],
            2,
        );
        assert!(matches!(
            points_from_fixed_size_list::<Int32Type>(&array),
            Err(Error::InvalidArgument { .. })
        ));

        let array = FixedSizeListArray::from_iter_primitive::<Int32Type, _, _>(
            vec![Some(vec![Some(1), None])],
            2,
        );
        assert!(matches!(
            points_from_fixed_size_list::<Int32Type>(&array),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_f16_centroids() {
        let array = FixedSizeListArray::from_iter_primitive::<Float16Type, _, _>(
            [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [8.0, 8.0], [8.0, 9.0], [9.0, 8.0]]
                .iter()
                .map(|row| Some(row.iter().map(|v| Some(f16::from_f32(*v))))),
            2,
        );
        let points = points_from_fixed_size_list::<Float16Type>(&array).unwrap();
        let params = KMeansParams {
            seed: Some(1),
            ..Default::default()
        };
        let clusters = train_kmeans(&points, 2, params).unwrap();

        let centroids = centroids_to_fixed_size_list::<Float16Type>(&clusters).unwrap();
        assert_eq!(centroids.len(), 2);
        assert_eq!(centroids.value_length(), 2);
        let mut rows = points_from_fixed_size_list::<Float16Type>(&centroids)
            .unwrap()
            .into_iter()
            .map(|p| p.coordinates()[0].to_f32())
            .collect::<Vec<_>>();
        rows.sort_by(f32::total_cmp);
        assert!((rows[0] - 1.0 / 3.0).abs() < 1e-3);
        assert!((rows[1] - (8.0 + 1.0 / 3.0)).abs() < 1e-2);
    }

    #[test]
    fn test_centroids_errors() {
        let clusters: Vec<Cluster<f32>> = vec![];
        assert!(matches!(
            centroids_to_fixed_size_list::<Float32Type>(&clusters),
            Err(Error::InvalidArgument { .. })
        ));

        let clusters = vec![
            Cluster::new(Point::from([1.0_f32, 2.0])),
            Cluster::new(Point::from([1.0_f32])),
        ];
        assert!(matches!(
            centroids_to_fixed_size_list::<Float32Type>(&clusters),
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }
}
