// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cadview Rebase: keep far-from-origin CAD coordinates inside single-precision range.
//!
//! Survey and site drawings routinely place geometry millions of units from the origin.
//! Once a coordinate's magnitude passes about 1e7, `f32` can no longer resolve a
//! single unit, and renderers that work in single precision start to jitter.
//!
//! A rebaser borrows a piece of geometry, checks whether any coordinate exceeds the
//! threshold (strictly, see [`exceeds_threshold`]), and if so subtracts a representative
//! offset from every coordinate in place. The offset is handed back so the caller can
//! record it and reconstruct world coordinates later with [`Rebase::restore`].
//!
//! | Rebaser | Geometry | Offset |
//! |---|---|---|
//! | [`PointRebaser`] | one [`Coord`] | the point itself |
//! | [`PointsRebaser`] | a slice of [`Coord`]s | mean of the points |
//! | [`BufferRebaser`] | interleaved `f32`/`f64` buffer | mean of the points |
//! | [`LoopsRebaser`] | closed 2D rings | mean over every vertex |
//! | [`EntitiesRebaser`] | [`Positioned`] entities | mean of the base points |
//!
//! Planar geometry ([`kurbo::Point`], 2-component buffers, loops) ignores z.
//!
//! # Example
//!
//! ```rust
//! use cadview_rebase::{BufferRebaser, Point3, Rebase};
//!
//! let mut vertices = [3.0e7, 1.0, 0.0, 3.0e7 + 2.0, 3.0, 0.0];
//! let mut rebaser = BufferRebaser::new(&mut vertices, 3).unwrap();
//! assert!(rebaser.should_rebase());
//!
//! let offset = rebaser.rebase(None).unwrap();
//! assert_eq!(offset, Point3::new(3.0e7 + 1.0, 2.0, 0.0));
//! assert_eq!(vertices, [-1.0, -1.0, 0.0, 1.0, 1.0, 0.0]);
//! ```

pub mod config;
pub mod error;
pub mod rebase;
pub mod rebasers;
pub mod types;

pub use config::{DEFAULT_REBASE_THRESHOLD, RebaseConfig};
pub use error::RebaseError;
pub use rebase::Rebase;
pub use rebasers::buffer::BufferRebaser;
pub use rebasers::entities::EntitiesRebaser;
pub use rebasers::loops::LoopsRebaser;
pub use rebasers::point::PointRebaser;
pub use rebasers::points::PointsRebaser;
pub use types::{Axes, BufferScalar, Coord, Point3, Positioned, exceeds_threshold};
