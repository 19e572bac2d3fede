// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `linear`: id-keyed map with full scans (small, simple, cheap churn).
//! - `rtree`: `rstar` R*-tree with bulk loading; sublinear queries for large sets.
//!
//! Both enforce the same id-keyed contract, so a caller can swap one for the other
//! without changing what queries observe.

pub mod linear;
pub mod rtree;
