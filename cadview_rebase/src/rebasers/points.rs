// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebaser for a point array (polyline vertices, spline control points).

use crate::config::RebaseConfig;
use crate::rebase::Rebase;
use crate::types::{Coord, Point3};

/// Rebases a slice of points by their arithmetic mean.
#[derive(Debug)]
pub struct PointsRebaser<'a, P: Coord> {
    points: &'a mut [P],
    config: RebaseConfig,
}

impl<'a, P: Coord> PointsRebaser<'a, P> {
    /// Borrow `points` with the default threshold.
    pub fn new(points: &'a mut [P]) -> Self {
        Self::with_config(points, RebaseConfig::default())
    }

    /// Borrow `points` with an explicit configuration.
    pub fn with_config(points: &'a mut [P], config: RebaseConfig) -> Self {
        Self { points, config }
    }
}

impl<P: Coord> Rebase for PointsRebaser<'_, P> {
    fn should_rebase(&self) -> bool {
        let threshold = self.config.threshold();
        self.points
            .iter()
            .any(|p| p.to_point3().exceeds(P::AXES, threshold))
    }

    fn compute_offset(&self) -> Point3 {
        Point3::mean(self.points.iter().map(Coord::to_point3)).unwrap_or_default()
    }

    fn apply_offset(&mut self, offset: Point3) {
        for p in self.points.iter_mut() {
            p.subtract(offset);
        }
    }
}
