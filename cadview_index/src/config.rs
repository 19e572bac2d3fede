// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning knobs for the hierarchical index.

/// Default member count above which a group gets a tree-backed child index.
pub const DEFAULT_CHILD_THRESHOLD: usize = 100;

/// Configuration passed to [`HierarchicalIndex::with_config`](crate::HierarchicalIndex::with_config).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    /// Groups with more members than this get a [`TreeIndex`](crate::TreeIndex);
    /// smaller non-empty groups get a [`LinearIndex`](crate::LinearIndex).
    pub child_threshold: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            child_threshold: DEFAULT_CHILD_THRESHOLD,
        }
    }
}

impl IndexConfig {
    /// Override the linear/tree cut-over.
    pub const fn with_child_threshold(mut self, child_threshold: usize) -> Self {
        self.child_threshold = child_threshold;
        self
    }
}
