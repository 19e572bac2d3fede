// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `SpatialIndex` contract shared by every index implementation.

use crate::types::{BoundingBox, IndexedItem, ItemId};

/// Equality predicate used by [`SpatialIndex::remove_with`].
///
/// Called as `equals(stored, probe)`.
pub type ItemEq<'a, Id> = &'a dyn Fn(&IndexedItem<Id>, &IndexedItem<Id>) -> bool;

/// Spatial index over identity-bearing bounding boxes.
///
/// Items are keyed by id: inserting an id that is already present replaces the stored
/// item, so no query ever observes two entries for one id. Removing something that is
/// not present is a no-op. Query results are returned in unspecified order.
pub trait SpatialIndex<Id: ItemId> {
    /// Insert one item, replacing any item stored under the same id.
    fn insert(&mut self, item: IndexedItem<Id>);

    /// Insert a batch of items. Later items win over earlier ones with the same id.
    fn load(&mut self, items: Vec<IndexedItem<Id>>);

    /// Remove the item stored under `item.id`.
    fn remove(&mut self, item: &IndexedItem<Id>) {
        self.remove_by_id(item.id);
    }

    /// Remove every stored item for which `equals(stored, item)` holds.
    ///
    /// Use this when only a value-equal copy of the stored item is at hand. Matching
    /// depends on `equals` alone: `item.bbox` may be a placeholder and never limits which
    /// stored items are considered.
    fn remove_with(&mut self, item: &IndexedItem<Id>, equals: ItemEq<'_, Id>);

    /// Remove the item stored under `id`.
    fn remove_by_id(&mut self, id: Id);

    /// Remove everything.
    fn clear(&mut self);

    /// All items whose box intersects `bbox` (touching counts).
    fn search(&self, bbox: &BoundingBox) -> Vec<IndexedItem<Id>>;

    /// Whether [`search`](Self::search) would return anything.
    fn collides(&self, bbox: &BoundingBox) -> bool;

    /// Every stored item.
    fn all(&self) -> Vec<IndexedItem<Id>>;

    /// Number of stored items.
    fn len(&self) -> usize;

    /// True if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items whose box contains the point; the degenerate case of [`search`](Self::search).
    fn search_point(&self, x: f64, y: f64) -> Vec<IndexedItem<Id>> {
        self.search(&BoundingBox::from_point(x, y))
    }
}
