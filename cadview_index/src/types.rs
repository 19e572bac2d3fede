// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: bounding boxes and identity-bearing items.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Rect;

/// Axis-aligned bounding box in 2D world space.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`. Coordinates are assumed to be
/// finite; validating them is the job of geometry construction, not of the index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (bottom)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (top)
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new box from min/max corners.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a box from origin and size.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    /// Zero-area box at a point.
    pub const fn from_point(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    /// Square pick box of half-size `tolerance` centered on a point.
    ///
    /// This is what a click or hover turns into before it reaches an index.
    pub const fn around_point(x: f64, y: f64, tolerance: f64) -> Self {
        Self::new(x - tolerance, y - tolerance, x + tolerance, y + tolerance)
    }

    /// Width along x.
    pub const fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along y.
    pub const fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether two boxes intersect. Touching edges count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    /// Whether the point lies inside or on the boundary.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Whether `other` lies entirely inside this box.
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Smallest box covering every box of the iterator, `None` when it is empty.
    pub fn union_all<'a>(boxes: impl IntoIterator<Item = &'a Self>) -> Option<Self> {
        let mut it = boxes.into_iter();
        let first = *it.next()?;
        Some(it.fold(first, |acc, b| acc.union(b)))
    }
}

impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        // kurbo rects may be stored with swapped corners.
        let r = r.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<BoundingBox> for Rect {
    fn from(b: BoundingBox) -> Self {
        Self::new(b.min_x, b.min_y, b.max_x, b.max_y)
    }
}

/// Identifier of an indexed item.
///
/// Assigned by the owning document model and stable for the item's lifetime. Any
/// small copyable hashable handle works: entity handles, database keys, `u64`s.
pub trait ItemId: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> ItemId for T {}

/// An identity-bearing bounding box; the unit every index stores.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndexedItem<Id> {
    /// Stable identifier, unique within one index instance.
    pub id: Id,
    /// World-space extent of the item.
    pub bbox: BoundingBox,
}

impl<Id> IndexedItem<Id> {
    /// Create a new item.
    pub const fn new(id: Id, bbox: BoundingBox) -> Self {
        Self { id, bbox }
    }
}
