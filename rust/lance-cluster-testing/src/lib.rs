// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

//! Seeded data generators shared by the clustering tests and benchmarks.

pub mod datagen;
