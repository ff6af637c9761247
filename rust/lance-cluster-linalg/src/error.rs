// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

use arrow_schema::ArrowError;
use snafu::{location, Location, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid argument: {message}, {location}"))]
    InvalidArgument { message: String, location: Location },
    #[snafu(display("Empty input: {message}, {location}"))]
    EmptyInput { message: String, location: Location },
    #[snafu(display(
        "Dimension mismatch: expected {expected} dimensions, got {actual}, {location}"
    ))]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        location: Location,
    },
    #[snafu(display("Too few clusters: k={k}, at least 2 clusters are required, {location}"))]
    TooFewClusters { k: usize, location: Location },
    #[snafu(display(
        "Too many clusters: k={k} must be smaller than the number of points ({num_points}), {location}"
    ))]
    TooManyClusters {
        k: usize,
        num_points: usize,
        location: Location,
    },
    #[snafu(display("Invalid operation: {message}, {location}"))]
    InvalidOperation { message: String, location: Location },
    #[snafu(display("Arrow error: {message}, {location}"))]
    Arrow { message: String, location: Location },
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>, location: Location) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            location,
        }
    }

    pub fn invalid_operation(message: impl Into<String>, location: Location) -> Self {
        Self::InvalidOperation {
            message: message.into(),
            location,
        }
    }

    pub fn dimension_mismatch(expected: usize, actual: usize, location: Location) -> Self {
        Self::DimensionMismatch {
            expected,
            actual,
            location,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ArrowError> for Error {
    fn from(e: ArrowError) -> Self {
        Self::Arrow {
            message: e.to_string(),
            location: location!(),
        }
    }
}
