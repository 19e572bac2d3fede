// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! R-tree backend built on `rstar`, with STR-style bulk loading.

use core::fmt::Debug;

use rstar::{
    AABB, Envelope, RStarInsertionStrategy, RTree, RTreeObject, RTreeParams, SelectionFunction,
};
use rustc_hash::FxHashMap;

use crate::index::{ItemEq, SpatialIndex};
use crate::types::{BoundingBox, IndexedItem, ItemId};

/// Node fan-out used by [`TreeIndex`]: at most nine entries per node.
#[derive(Copy, Clone, Debug)]
pub struct TreeParams;

impl RTreeParams for TreeParams {
    const MIN_SIZE: usize = 4;
    const MAX_SIZE: usize = 9;
    const REINSERTION_COUNT: usize = 2;
    type DefaultInsertionStrategy = RStarInsertionStrategy;
}

#[derive(Copy, Clone, Debug)]
struct TreeEntry<Id>(IndexedItem<Id>);

impl<Id> RTreeObject for TreeEntry<Id> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        envelope_of(&self.0.bbox)
    }
}

fn envelope_of(b: &BoundingBox) -> AABB<[f64; 2]> {
    AABB::from_corners([b.min_x, b.min_y], [b.max_x, b.max_y])
}

/// Descends only into nodes that can hold `probe`, then matches the leaf with `id`.
struct SelectById<Id> {
    probe: AABB<[f64; 2]>,
    id: Id,
}

impl<Id: ItemId> SelectionFunction<TreeEntry<Id>> for SelectById<Id> {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        envelope.contains_envelope(&self.probe)
    }

    fn should_unpack_leaf(&self, leaf: &TreeEntry<Id>) -> bool {
        leaf.0.id == self.id
    }
}

/// Balanced bounding-box tree.
///
/// Queries descend only into subtrees whose box intersects the query box, which is
/// what makes this the index of choice for large item counts. [`load`](SpatialIndex::load)
/// packs the whole item set in one bulk pass instead of inserting item by item.
///
/// A side table keeps the current box of every id. It enforces the upsert rule and
/// gives [`remove_by_id`](SpatialIndex::remove_by_id) an exact descent probe, so
/// removal by id never depends on caller-supplied coordinates.
#[derive(Clone)]
pub struct TreeIndex<Id: ItemId> {
    tree: RTree<TreeEntry<Id>, TreeParams>,
    boxes: FxHashMap<Id, BoundingBox>,
}

impl<Id: ItemId> Default for TreeIndex<Id> {
    fn default() -> Self {
        Self {
            tree: RTree::new_with_params(),
            boxes: FxHashMap::default(),
        }
    }
}

impl<Id: ItemId> Debug for TreeIndex<Id> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeIndex")
            .field("len", &self.tree.size())
            .field("max_node_entries", &TreeParams::MAX_SIZE)
            .finish_non_exhaustive()
    }
}

impl<Id: ItemId> TreeIndex<Id> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-build an index holding `items`.
    pub fn from_items(items: Vec<IndexedItem<Id>>) -> Self {
        let mut idx = Self::new();
        idx.load(items);
        idx
    }

    /// Stored box for `id`, if any.
    pub fn get(&self, id: Id) -> Option<BoundingBox> {
        self.boxes.get(&id).copied()
    }

    /// Remove the tree entry for `id`, whose stored box is `bbox`.
    fn take(&mut self, id: Id, bbox: &BoundingBox) -> Option<IndexedItem<Id>> {
        let select = SelectById {
            probe: envelope_of(bbox),
            id,
        };
        self.tree.remove_with_selection_function(select).map(|e| e.0)
    }
}

impl<Id: ItemId> SpatialIndex<Id> for TreeIndex<Id> {
    fn insert(&mut self, item: IndexedItem<Id>) {
        if let Some(old) = self.boxes.insert(item.id, item.bbox) {
            log::trace!("tree index: replacing entry for id {:?}", item.id);
            let _ = self.take(item.id, &old);
        }
        self.tree.insert(TreeEntry(item));
    }

    fn load(&mut self, items: Vec<IndexedItem<Id>>) {
        if items.is_empty() {
            return;
        }
        let added = items.len();
        for item in items {
            self.boxes.insert(item.id, item.bbox);
        }
        // The tree has no bulk merge, so existing entries are repacked with the new ones.
        let entries: Vec<_> = self
            .boxes
            .iter()
            .map(|(&id, &bbox)| TreeEntry(IndexedItem::new(id, bbox)))
            .collect();
        log::debug!(
            "tree index: bulk-loading {} entries ({added} new)",
            entries.len()
        );
        self.tree = RTree::bulk_load_with_params(entries);
    }

    fn remove_with(&mut self, item: &IndexedItem<Id>, equals: ItemEq<'_, Id>) {
        // `equals` may match anywhere, so candidates come from a full scan; each match is
        // then removed through its exact stored box.
        let matched: Vec<Id> = self
            .tree
            .iter()
            .filter(|e| equals(&e.0, item))
            .map(|e| e.0.id)
            .collect();
        for id in matched {
            self.remove_by_id(id);
        }
    }

    fn remove_by_id(&mut self, id: Id) {
        let Some(bbox) = self.boxes.remove(&id) else {
            log::trace!("tree index: remove of absent id {id:?} ignored");
            return;
        };
        let _ = self.take(id, &bbox);
    }

    fn clear(&mut self) {
        self.tree = RTree::new_with_params();
        self.boxes.clear();
    }

    fn search(&self, bbox: &BoundingBox) -> Vec<IndexedItem<Id>> {
        self.tree
            .locate_in_envelope_intersecting(&envelope_of(bbox))
            .map(|e| e.0)
            .collect()
    }

    fn collides(&self, bbox: &BoundingBox) -> bool {
        self.tree
            .locate_in_envelope_intersecting(&envelope_of(bbox))
            .next()
            .is_some()
    }

    fn all(&self) -> Vec<IndexedItem<Id>> {
        self.tree.iter().map(|e| e.0).collect()
    }

    fn len(&self) -> usize {
        self.tree.size()
    }
}
