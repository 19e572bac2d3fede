// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-level index: a root tree of group boxes plus one child index per group.
//!
//! CAD scenes nest primitives inside groups (blocks, layers). The root index holds one
//! coarse box per group; each non-empty group owns a secondary index over its members.
//! Queries first find candidate groups, then refine inside each candidate's child index.
//! Removing a group drops its child index in the same step.

use core::fmt::Debug;

use rustc_hash::FxHashMap;

use crate::backends::linear::LinearIndex;
use crate::backends::rtree::TreeIndex;
use crate::config::IndexConfig;
use crate::index::{ItemEq, SpatialIndex};
use crate::types::{BoundingBox, IndexedItem, ItemId};

/// Which implementation backs a group's child index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChildIndexKind {
    /// Full-scan map; used for small groups.
    Linear,
    /// Bulk-loaded R-tree; used for groups above the threshold.
    Tree,
}

/// Secondary index over the members of one group.
#[derive(Clone, Debug)]
pub enum ChildIndex<Id: ItemId> {
    /// Small group.
    Linear(LinearIndex<Id>),
    /// Large group.
    Tree(TreeIndex<Id>),
}

impl<Id: ItemId> ChildIndex<Id> {
    /// The implementation in use.
    pub fn kind(&self) -> ChildIndexKind {
        match self {
            Self::Linear(_) => ChildIndexKind::Linear,
            Self::Tree(_) => ChildIndexKind::Tree,
        }
    }

    fn inner(&self) -> &dyn SpatialIndex<Id> {
        match self {
            Self::Linear(idx) => idx,
            Self::Tree(idx) => idx,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SpatialIndex<Id> {
        match self {
            Self::Linear(idx) => idx,
            Self::Tree(idx) => idx,
        }
    }
}

impl<Id: ItemId> SpatialIndex<Id> for ChildIndex<Id> {
    fn insert(&mut self, item: IndexedItem<Id>) {
        self.inner_mut().insert(item);
    }

    fn load(&mut self, items: Vec<IndexedItem<Id>>) {
        self.inner_mut().load(items);
    }

    fn remove_with(&mut self, item: &IndexedItem<Id>, equals: ItemEq<'_, Id>) {
        self.inner_mut().remove_with(item, equals);
    }

    fn remove_by_id(&mut self, id: Id) {
        self.inner_mut().remove_by_id(id);
    }

    fn clear(&mut self) {
        self.inner_mut().clear();
    }

    fn search(&self, bbox: &BoundingBox) -> Vec<IndexedItem<Id>> {
        self.inner().search(bbox)
    }

    fn collides(&self, bbox: &BoundingBox) -> bool {
        self.inner().collides(bbox)
    }

    fn all(&self) -> Vec<IndexedItem<Id>> {
        self.inner().all()
    }

    fn len(&self) -> usize {
        self.inner().len()
    }
}

/// Result record of [`HierarchicalIndex::search_groups`].
#[derive(Clone, Debug, PartialEq)]
pub struct GroupHit<Id> {
    /// The root-level item whose box intersected the query.
    pub hit: IndexedItem<Id>,
    /// Refined members, or `None` when the item has no child index and stands for itself.
    ///
    /// `Some` with an empty list means the coarse box was hit but no member was.
    pub children: Option<Vec<IndexedItem<Id>>>,
}

/// Root index of group boxes with per-group child indexes.
///
/// Child-index registrations survive [`clear`](SpatialIndex::clear): the child indexes
/// are emptied but stay registered, so re-inserting a group's root item after a clear
/// lands in its existing (empty) child index without registering it again.
#[derive(Clone)]
pub struct HierarchicalIndex<Id: ItemId> {
    root: TreeIndex<Id>,
    children: FxHashMap<Id, ChildIndex<Id>>,
    config: IndexConfig,
}

impl<Id: ItemId> Default for HierarchicalIndex<Id> {
    fn default() -> Self {
        Self::with_config(IndexConfig::default())
    }
}

impl<Id: ItemId> Debug for HierarchicalIndex<Id> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let trees = self
            .children
            .values()
            .filter(|c| c.kind() == ChildIndexKind::Tree)
            .count();
        f.debug_struct("HierarchicalIndex")
            .field("root", &self.root)
            .field("child_indexes", &self.children.len())
            .field("tree_child_indexes", &trees)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<Id: ItemId> HierarchicalIndex<Id> {
    /// Create an empty index with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with an explicit configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            root: TreeIndex::new(),
            children: FxHashMap::default(),
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Build the child index a group with these members should get.
    ///
    /// No members: `None`, the group's root entry answers for itself. Up to
    /// `child_threshold` members: a [`LinearIndex`]. Beyond that: a bulk-loaded [`TreeIndex`].
    pub fn create_child_index(&self, members: Vec<IndexedItem<Id>>) -> Option<ChildIndex<Id>> {
        if members.is_empty() {
            None
        } else if members.len() <= self.config.child_threshold {
            Some(ChildIndex::Linear(LinearIndex::from_items(members)))
        } else {
            Some(ChildIndex::Tree(TreeIndex::from_items(members)))
        }
    }

    /// Index a group: its coarse box goes into the root, its members into a child index.
    ///
    /// Replaces any previous registration for the same id.
    pub fn add_group(&mut self, group: IndexedItem<Id>, members: Vec<IndexedItem<Id>>) {
        self.root.insert(group);
        match self.create_child_index(members) {
            Some(child) => {
                log::debug!(
                    "hierarchical index: group {:?} gets a {:?} child index over {} members",
                    group.id,
                    child.kind(),
                    child.len()
                );
                self.children.insert(group.id, child);
            }
            None => {
                self.children.remove(&group.id);
            }
        }
    }

    /// Add one member to an indexed group.
    ///
    /// Registers a child index if the group has none, promotes a linear child index to a
    /// tree once it outgrows the threshold, and grows the group's root box to cover `item`.
    pub fn insert_child(&mut self, group_id: Id, item: IndexedItem<Id>) {
        let group_box = match self.root.get(group_id) {
            Some(b) if b.contains(&item.bbox) => None,
            Some(b) => Some(b.union(&item.bbox)),
            None => Some(item.bbox),
        };
        if let Some(bbox) = group_box {
            self.root.insert(IndexedItem::new(group_id, bbox));
        }

        let threshold = self.config.child_threshold;
        let child = self
            .children
            .entry(group_id)
            .or_insert_with(|| ChildIndex::Linear(LinearIndex::new()));
        child.insert(item);
        if child.kind() == ChildIndexKind::Linear && child.len() > threshold {
            log::debug!(
                "hierarchical index: promoting child index of {group_id:?} to a tree ({} members)",
                child.len()
            );
            *child = ChildIndex::Tree(TreeIndex::from_items(child.all()));
        }
    }

    /// Two-phase query: candidate groups from the root, refined through child indexes.
    pub fn search_groups(&self, bbox: &BoundingBox) -> Vec<GroupHit<Id>> {
        self.root
            .search(bbox)
            .into_iter()
            .map(|hit| GroupHit {
                hit,
                children: self.children.get(&hit.id).map(|c| c.search(bbox)),
            })
            .collect()
    }

    /// Child index registered for a group.
    pub fn child_index(&self, id: Id) -> Option<&ChildIndex<Id>> {
        self.children.get(&id)
    }

    /// Kind of child index registered for a group.
    pub fn child_index_kind(&self, id: Id) -> Option<ChildIndexKind> {
        self.children.get(&id).map(ChildIndex::kind)
    }

    /// Number of registered child indexes.
    pub fn child_index_count(&self) -> usize {
        self.children.len()
    }
}

impl<Id: ItemId> SpatialIndex<Id> for HierarchicalIndex<Id> {
    /// Insert a root-level item; mirrored into the child index registered under its id.
    fn insert(&mut self, item: IndexedItem<Id>) {
        self.root.insert(item);
        if let Some(child) = self.children.get_mut(&item.id) {
            child.insert(item);
        }
    }

    fn load(&mut self, items: Vec<IndexedItem<Id>>) {
        for item in &items {
            if let Some(child) = self.children.get_mut(&item.id) {
                child.insert(*item);
            }
        }
        self.root.load(items);
    }

    fn remove_with(&mut self, item: &IndexedItem<Id>, equals: ItemEq<'_, Id>) {
        let matched: Vec<Id> = self
            .root
            .all()
            .into_iter()
            .filter(|stored| equals(stored, item))
            .map(|stored| stored.id)
            .collect();
        for id in matched {
            self.remove_by_id(id);
        }
    }

    fn remove_by_id(&mut self, id: Id) {
        self.root.remove_by_id(id);
        self.children.remove(&id);
    }

    fn clear(&mut self) {
        self.root.clear();
        for child in self.children.values_mut() {
            child.clear();
        }
    }

    /// Flattened refined hits: members of refined groups, and leaf candidates as themselves.
    fn search(&self, bbox: &BoundingBox) -> Vec<IndexedItem<Id>> {
        let mut out = Vec::new();
        for hit in self.root.search(bbox) {
            match self.children.get(&hit.id) {
                Some(child) => out.extend(child.search(bbox)),
                None => out.push(hit),
            }
        }
        out
    }

    fn collides(&self, bbox: &BoundingBox) -> bool {
        if !self.root.collides(bbox) {
            return false;
        }
        self.root
            .search(bbox)
            .iter()
            .any(|hit| match self.children.get(&hit.id) {
                Some(child) => child.collides(bbox),
                None => true,
            })
    }

    /// Root-level items.
    fn all(&self) -> Vec<IndexedItem<Id>> {
        self.root.all()
    }

    fn len(&self) -> usize {
        self.root.len()
    }
}
