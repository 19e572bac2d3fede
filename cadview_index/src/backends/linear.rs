// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear backend: id-keyed map with full-scan queries. Small and simple; good for tiny sets.

use core::fmt::Debug;

use rustc_hash::FxHashMap;

use crate::index::{ItemEq, SpatialIndex};
use crate::types::{BoundingBox, IndexedItem, ItemId};

/// Brute-force index: O(1) insert/remove, O(n) queries, no structure to maintain.
#[derive(Clone)]
pub struct LinearIndex<Id: ItemId> {
    entries: FxHashMap<Id, BoundingBox>,
}

impl<Id: ItemId> Default for LinearIndex<Id> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<Id: ItemId> Debug for LinearIndex<Id> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearIndex")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<Id: ItemId> LinearIndex<Id> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index holding `items`.
    pub fn from_items(items: Vec<IndexedItem<Id>>) -> Self {
        let mut idx = Self::new();
        idx.load(items);
        idx
    }

    /// Stored box for `id`, if any.
    pub fn get(&self, id: Id) -> Option<BoundingBox> {
        self.entries.get(&id).copied()
    }
}

impl<Id: ItemId> SpatialIndex<Id> for LinearIndex<Id> {
    fn insert(&mut self, item: IndexedItem<Id>) {
        self.entries.insert(item.id, item.bbox);
    }

    fn load(&mut self, items: Vec<IndexedItem<Id>>) {
        self.entries.reserve(items.len());
        for item in items {
            self.entries.insert(item.id, item.bbox);
        }
    }

    fn remove_with(&mut self, item: &IndexedItem<Id>, equals: ItemEq<'_, Id>) {
        self.entries
            .retain(|&id, &mut bbox| !equals(&IndexedItem::new(id, bbox), item));
    }

    fn remove_by_id(&mut self, id: Id) {
        if self.entries.remove(&id).is_none() {
            log::trace!("linear index: remove of absent id {id:?} ignored");
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn search(&self, bbox: &BoundingBox) -> Vec<IndexedItem<Id>> {
        let mut out = Vec::new();
        for (&id, b) in &self.entries {
            if b.intersects(bbox) {
                out.push(IndexedItem::new(id, *b));
            }
        }
        out
    }

    fn collides(&self, bbox: &BoundingBox) -> bool {
        self.entries.values().any(|b| b.intersects(bbox))
    }

    fn all(&self) -> Vec<IndexedItem<Id>> {
        self.entries
            .iter()
            .map(|(&id, &bbox)| IndexedItem::new(id, bbox))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
