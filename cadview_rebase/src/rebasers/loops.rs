// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebaser for closed 2D rings, such as hatch boundaries.

use kurbo::Point;

use crate::config::RebaseConfig;
use crate::rebase::Rebase;
use crate::types::{Axes, Coord, Point3};

/// Rebases every vertex of every loop by the mean over all vertices.
///
/// Loops are planar; z is never inspected and the z of any offset is ignored.
#[derive(Debug)]
pub struct LoopsRebaser<'a> {
    loops: &'a mut [Vec<Point>],
    config: RebaseConfig,
}

impl<'a> LoopsRebaser<'a> {
    /// Borrow `loops` with the default threshold.
    pub fn new(loops: &'a mut [Vec<Point>]) -> Self {
        Self::with_config(loops, RebaseConfig::default())
    }

    /// Borrow `loops` with an explicit configuration.
    pub fn with_config(loops: &'a mut [Vec<Point>], config: RebaseConfig) -> Self {
        Self { loops, config }
    }

    fn vertices(&self) -> impl Iterator<Item = &Point> + '_ {
        self.loops.iter().flatten()
    }
}

impl Rebase for LoopsRebaser<'_> {
    fn should_rebase(&self) -> bool {
        let threshold = self.config.threshold();
        self.vertices()
            .any(|p| p.to_point3().exceeds(Axes::XY, threshold))
    }

    fn compute_offset(&self) -> Point3 {
        Point3::mean(self.vertices().map(Coord::to_point3)).unwrap_or_default()
    }

    fn apply_offset(&mut self, offset: Point3) {
        for p in self.loops.iter_mut().flatten() {
            p.subtract(offset);
        }
    }
}
