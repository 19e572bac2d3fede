// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate types and the traits rebasers are generic over.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use kurbo::Point;

/// A 3D point; also the type of every rebase offset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3 {
    /// x
    pub x: f64,
    /// y
    pub y: f64,
    /// z
    pub z: f64,
}

impl Point3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component on `axis`. `axis` must name exactly one axis.
    fn component(&self, axis: Axes) -> f64 {
        if axis == Axes::X {
            self.x
        } else if axis == Axes::Y {
            self.y
        } else {
            self.z
        }
    }

    /// Whether any of the given axes has magnitude strictly above `threshold`.
    pub fn exceeds(&self, axes: Axes, threshold: f64) -> bool {
        axes.iter()
            .any(|axis| exceeds_threshold(self.component(axis), threshold))
    }

    /// Arithmetic mean of the points, `None` when there are none.
    pub fn mean(points: impl IntoIterator<Item = Self>) -> Option<Self> {
        let mut sum = Self::ZERO;
        let mut count = 0_usize;
        for p in points {
            sum += p;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Point counts stay far below 2^52."
        )]
        let n = count as f64;
        Some(Self::new(sum.x / n, sum.y / n, sum.z / n))
    }
}

impl From<Point> for Point3 {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y, 0.0)
    }
}

impl Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Whether `value` is far enough from the origin to need rebasing.
///
/// The comparison is strict: a magnitude exactly at the threshold does not trigger.
#[inline]
pub fn exceeds_threshold(value: f64, threshold: f64) -> bool {
    value.abs() > threshold
}

bitflags::bitflags! {
    /// Axes a rebaser inspects and shifts.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// x axis
        const X = 0b0000_0001;
        /// y axis
        const Y = 0b0000_0010;
        /// z axis
        const Z = 0b0000_0100;
        /// Planar geometry; z is ignored.
        const XY = Self::X.bits() | Self::Y.bits();
        /// Full 3D geometry.
        const XYZ = Self::XY.bits() | Self::Z.bits();
    }
}

/// A coordinate that the point and point-array rebasers can shift in place.
pub trait Coord {
    /// Axes this coordinate type carries.
    const AXES: Axes;

    /// The coordinate as a 3D point (z = 0 for planar types).
    fn to_point3(&self) -> Point3;

    /// Subtract `offset` on every carried axis.
    fn subtract(&mut self, offset: Point3);
}

impl Coord for Point {
    const AXES: Axes = Axes::XY;

    fn to_point3(&self) -> Point3 {
        Point3::from(*self)
    }

    fn subtract(&mut self, offset: Point3) {
        self.x -= offset.x;
        self.y -= offset.y;
    }
}

impl Coord for Point3 {
    const AXES: Axes = Axes::XYZ;

    fn to_point3(&self) -> Point3 {
        *self
    }

    fn subtract(&mut self, offset: Point3) {
        *self -= offset;
    }
}

/// An entity positioned by a base point (insert point of a block, text anchor, ...).
pub trait Positioned {
    /// The entity's base point, or `None` if it has none.
    fn base_point(&self) -> Option<Point3>;

    /// Move the entity by `delta`.
    fn translate(&mut self, delta: Point3);
}

/// Element type of a flat coordinate buffer.
///
/// Rebasing math happens in `f64`; this converts in and out of the stored type.
pub trait BufferScalar: Copy + Debug {
    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`.
    fn from_f64(v: f64) -> Self;
}

impl BufferScalar for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Narrowing to the buffer's storage precision is the point of the call."
    )]
    fn from_f64(v: f64) -> Self {
        v as Self
    }
}

impl BufferScalar for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}
