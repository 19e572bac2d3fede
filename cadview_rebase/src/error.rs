// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while constructing rebasers.

/// Invalid rebaser construction input.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RebaseError {
    /// The threshold is NaN, infinite, or negative.
    #[error("rebase threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
    /// Flat buffers interleave 2 or 3 components per point.
    #[error("coordinate buffer item size must be 2 or 3, got {0}")]
    UnsupportedItemSize(usize),
    /// The buffer does not hold a whole number of points.
    #[error("coordinate buffer length {len} is not a multiple of item size {item_size}")]
    RaggedBuffer {
        /// Number of scalars in the buffer.
        len: usize,
        /// Components per point.
        item_size: usize,
    },
}
