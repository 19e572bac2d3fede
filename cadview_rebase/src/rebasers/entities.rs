// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebaser for groups of positioned entities.

use crate::config::RebaseConfig;
use crate::rebase::Rebase;
use crate::types::{Axes, Point3, Positioned};

/// Rebases a group of entities by the centroid of their base points.
///
/// Entities without a base point neither vote in the threshold check nor contribute
/// to the offset, but they are still translated so the group moves as one.
#[derive(Debug)]
pub struct EntitiesRebaser<'a, E: Positioned> {
    entities: &'a mut [E],
    config: RebaseConfig,
}

impl<'a, E: Positioned> EntitiesRebaser<'a, E> {
    /// Borrow `entities` with the default threshold.
    pub fn new(entities: &'a mut [E]) -> Self {
        Self::with_config(entities, RebaseConfig::default())
    }

    /// Borrow `entities` with an explicit configuration.
    pub fn with_config(entities: &'a mut [E], config: RebaseConfig) -> Self {
        Self { entities, config }
    }

    fn base_points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.entities.iter().filter_map(Positioned::base_point)
    }
}

impl<E: Positioned> Rebase for EntitiesRebaser<'_, E> {
    fn should_rebase(&self) -> bool {
        let threshold = self.config.threshold();
        self.base_points().any(|p| p.exceeds(Axes::XYZ, threshold))
    }

    fn compute_offset(&self) -> Point3 {
        Point3::mean(self.base_points()).unwrap_or_default()
    }

    fn apply_offset(&mut self, offset: Point3) {
        let delta = -offset;
        for e in self.entities.iter_mut() {
            e.translate(delta);
        }
    }
}
