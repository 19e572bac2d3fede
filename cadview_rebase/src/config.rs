// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebase threshold configuration.

use crate::error::RebaseError;

/// Default magnitude, in world units, above which coordinates get rebased.
///
/// Single-precision floats keep 24 mantissa bits, so at 1e7 the spacing between
/// representable values is already a full unit.
pub const DEFAULT_REBASE_THRESHOLD: f64 = 1e7;

/// Configuration shared by every rebaser.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RebaseConfig {
    threshold: f64,
}

impl Default for RebaseConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REBASE_THRESHOLD,
        }
    }
}

impl RebaseConfig {
    /// Create a configuration with a custom threshold.
    ///
    /// # Errors
    ///
    /// Returns [`RebaseError::InvalidThreshold`] if `threshold` is NaN, infinite, or negative.
    pub fn new(threshold: f64) -> Result<Self, RebaseError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(RebaseError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    /// Magnitude a coordinate must strictly exceed to trigger a rebase.
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}
