// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebaser for interleaved coordinate buffers.

use crate::config::RebaseConfig;
use crate::error::RebaseError;
use crate::rebase::Rebase;
use crate::types::{Axes, BufferScalar, Point3};

/// Rebases a flat `[x0, y0, (z0,) x1, y1, (z1,) ...]` buffer in place.
///
/// `item_size` is the number of components per point and must be 2 or 3. With 2,
/// z is neither inspected nor shifted.
#[derive(Debug)]
pub struct BufferRebaser<'a, T: BufferScalar> {
    buffer: &'a mut [T],
    item_size: usize,
    config: RebaseConfig,
}

impl<'a, T: BufferScalar> BufferRebaser<'a, T> {
    /// Borrow `buffer` with the default threshold.
    ///
    /// # Errors
    ///
    /// See [`with_config`](Self::with_config).
    pub fn new(buffer: &'a mut [T], item_size: usize) -> Result<Self, RebaseError> {
        Self::with_config(buffer, item_size, RebaseConfig::default())
    }

    /// Borrow `buffer` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RebaseError::UnsupportedItemSize`] unless `item_size` is 2 or 3, and
    /// [`RebaseError::RaggedBuffer`] if the length is not a multiple of `item_size`.
    pub fn with_config(
        buffer: &'a mut [T],
        item_size: usize,
        config: RebaseConfig,
    ) -> Result<Self, RebaseError> {
        if !matches!(item_size, 2 | 3) {
            return Err(RebaseError::UnsupportedItemSize(item_size));
        }
        if buffer.len() % item_size != 0 {
            return Err(RebaseError::RaggedBuffer {
                len: buffer.len(),
                item_size,
            });
        }
        Ok(Self {
            buffer,
            item_size,
            config,
        })
    }

    /// Number of points in the buffer.
    pub fn point_count(&self) -> usize {
        self.buffer.len() / self.item_size
    }

    fn axes(&self) -> Axes {
        if self.item_size == 3 {
            Axes::XYZ
        } else {
            Axes::XY
        }
    }

    fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.buffer.chunks_exact(self.item_size).map(|c| {
            let z = c.get(2).map_or(0.0, |z| z.to_f64());
            Point3::new(c[0].to_f64(), c[1].to_f64(), z)
        })
    }
}

impl<T: BufferScalar> Rebase for BufferRebaser<'_, T> {
    fn should_rebase(&self) -> bool {
        let axes = self.axes();
        let threshold = self.config.threshold();
        self.points().any(|p| p.exceeds(axes, threshold))
    }

    fn compute_offset(&self) -> Point3 {
        Point3::mean(self.points()).unwrap_or_default()
    }

    fn apply_offset(&mut self, offset: Point3) {
        let shift = [offset.x, offset.y, offset.z];
        for chunk in self.buffer.chunks_exact_mut(self.item_size) {
            for (c, d) in chunk.iter_mut().zip(shift) {
                *c = T::from_f64(c.to_f64() - d);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_layouts() {
        let mut buf = [0.0_f64; 6];
        assert_eq!(
            BufferRebaser::new(&mut buf, 4).unwrap_err(),
            RebaseError::UnsupportedItemSize(4)
        );
        let mut ragged = [0.0_f64; 5];
        assert_eq!(
            BufferRebaser::new(&mut ragged, 3).unwrap_err(),
            RebaseError::RaggedBuffer {
                len: 5,
                item_size: 3
            }
        );
    }

    #[test]
    fn xyz_stride_shifts_every_component() {
        let mut buf = [0.0, 0.0, 2e7, 10.0, 10.0, 2e7 + 4.0];
        let mut r = BufferRebaser::new(&mut buf, 3).unwrap();
        assert_eq!(r.point_count(), 2);
        assert!(r.should_rebase());
        assert_eq!(r.rebase(None), Some(Point3::new(5.0, 5.0, 2e7 + 2.0)));
        assert_eq!(buf, [-5.0, -5.0, -2.0, 5.0, 5.0, 2.0]);
    }

    #[test]
    fn xy_stride_ignores_z_offset() {
        let mut buf = [1.0, 2.0, 3.0, 4.0];
        let mut r = BufferRebaser::new(&mut buf, 2).unwrap();
        assert!(!r.should_rebase());
        assert!(r.rebase(Some(Point3::new(1.0, 2.0, 100.0))).is_some());
        assert_eq!(buf, [0.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn single_precision_buffer() {
        // Values chosen to be exact in f32.
        let mut buf: [f32; 4] = [2.0e7, 0.0, 2.0e7 + 4.0, 8.0];
        let mut r = BufferRebaser::new(&mut buf, 2).unwrap();
        let offset = r.rebase(None).unwrap();
        assert_eq!(offset, Point3::new(2.0e7 + 2.0, 4.0, 0.0));
        assert_eq!(buf, [-2.0, -4.0, 2.0, 4.0]);
    }

    /// Hundredths of a unit; deliberately not ordered.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Centi(i64);

    impl BufferScalar for Centi {
        #[allow(clippy::cast_precision_loss, reason = "Test values stay below 2^52.")]
        fn to_f64(self) -> f64 {
            self.0 as f64 / 100.0
        }

        #[allow(
            clippy::cast_possible_truncation,
            reason = "Test values stay within i64 range."
        )]
        fn from_f64(v: f64) -> Self {
            Self((v * 100.0).round() as i64)
        }
    }

    #[test]
    fn unordered_fixed_point_storage() {
        let mut buf = [
            Centi(2_000_000_000),
            Centi(0),
            Centi(2_000_000_400),
            Centi(800),
        ];
        let mut r = BufferRebaser::new(&mut buf, 2).unwrap();
        assert_eq!(r.rebase(None), Some(Point3::new(2.0e7 + 2.0, 4.0, 0.0)));
        assert_eq!(buf, [Centi(-200), Centi(-400), Centi(200), Centi(400)]);
    }

    #[test]
    fn empty_buffer_is_inert() {
        let mut buf: [f64; 0] = [];
        let mut r = BufferRebaser::new(&mut buf, 3).unwrap();
        assert!(!r.should_rebase());
        assert_eq!(r.compute_offset(), Point3::ZERO);
        assert_eq!(r.rebase(None), None);
    }
}
