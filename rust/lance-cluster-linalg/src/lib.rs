// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Scalar coordinate types, distance functions and small numeric kernels
//! shared by the clustering algorithms in `lance-cluster`.

pub mod coordinate;
pub mod distance;
pub mod error;
pub mod kernels;
pub mod matrix;

pub use coordinate::{bf16, f16, Coordinate};
pub use distance::DistanceType;
pub use error::{Error, Result};
pub use matrix::DistanceMatrix;
