// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebaser variants, one per geometry shape.
//!
//! - `point`: a single 2D or 3D point; the offset is the point itself.
//! - `points`: a point array; the offset is the mean.
//! - `buffer`: an interleaved scalar buffer with 2 or 3 components per point.
//! - `loops`: closed 2D rings; the offset is the mean over every vertex.
//! - `entities`: positioned entities; the offset is the centroid of their base points.

pub mod buffer;
pub mod entities;
pub mod loops;
pub mod point;
pub mod points;
