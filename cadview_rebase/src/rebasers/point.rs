// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebaser for a single point.

use crate::config::RebaseConfig;
use crate::rebase::Rebase;
use crate::types::{Coord, Point3};

/// Rebases one point onto the origin: the offset is the point itself.
#[derive(Debug)]
pub struct PointRebaser<'a, P: Coord> {
    point: &'a mut P,
    config: RebaseConfig,
}

impl<'a, P: Coord> PointRebaser<'a, P> {
    /// Borrow `point` with the default threshold.
    pub fn new(point: &'a mut P) -> Self {
        Self::with_config(point, RebaseConfig::default())
    }

    /// Borrow `point` with an explicit configuration.
    pub fn with_config(point: &'a mut P, config: RebaseConfig) -> Self {
        Self { point, config }
    }
}

impl<P: Coord> Rebase for PointRebaser<'_, P> {
    fn should_rebase(&self) -> bool {
        self.point
            .to_point3()
            .exceeds(P::AXES, self.config.threshold())
    }

    fn compute_offset(&self) -> Point3 {
        self.point.to_point3()
    }

    fn apply_offset(&mut self, offset: Point3) {
        self.point.subtract(offset);
    }
}
