// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract every rebaser implements.

use crate::types::Point3;

/// Detect far-from-origin coordinates and shift them back towards the origin.
///
/// Implementors borrow the caller's coordinates mutably for as long as they live and
/// shift them in place; no copy of the geometry is made. The returned offset is the
/// caller's to record so true world coordinates can be reconstructed later.
pub trait Rebase {
    /// Whether any considered coordinate's magnitude exceeds the threshold.
    ///
    /// Always false for empty input.
    fn should_rebase(&self) -> bool;

    /// The representative offset for the current coordinates.
    ///
    /// Empty input yields [`Point3::ZERO`].
    fn compute_offset(&self) -> Point3;

    /// Subtract `offset` from every coordinate.
    fn apply_offset(&mut self, offset: Point3);

    /// Rebase in place if forced by `offset` or needed per [`should_rebase`](Self::should_rebase).
    ///
    /// An explicit offset wins over the computed one. Returns the applied offset, or
    /// `None` if nothing was touched, which tells the caller there is no inverse
    /// transform to record.
    fn rebase(&mut self, offset: Option<Point3>) -> Option<Point3> {
        let offset = match offset {
            Some(offset) => offset,
            None if self.should_rebase() => self.compute_offset(),
            None => return None,
        };
        self.apply_offset(offset);
        log::debug!("rebased coordinates by {offset:?}");
        Some(offset)
    }

    /// Undo a rebase by adding `offset` back.
    fn restore(&mut self, offset: Point3) {
        self.apply_offset(-offset);
    }
}
