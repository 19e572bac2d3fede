// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cadview Index: id-keyed 2D bounding-box indexes for picking, hover, and box selection.
//!
//! Every index stores [`IndexedItem`]s (a stable id plus a [`BoundingBox`]) and answers
//! intersection queries through the [`SpatialIndex`] trait.
//!
//! - Insert, bulk-load, and remove items by id. Re-inserting an id replaces the old entry.
//! - Query by intersecting rectangle (touching edges count) or by point.
//! - Ask whether anything collides without materializing the hits.
//!
//! Three implementations share the contract:
//!
//! - [`LinearIndex`]: id-keyed map with full scans. Good for small sets or heavy churn.
//! - [`TreeIndex`]: `rstar` R*-tree with bulk loading. Good for large sets.
//! - [`HierarchicalIndex`]: a root tree of group boxes (blocks, layers) with one child
//!   index per group. Small groups get a `LinearIndex`, large ones a `TreeIndex`
//!   (see [`IndexConfig`]).
//!
//! # Example
//!
//! ```rust
//! use cadview_index::{BoundingBox, IndexedItem, SpatialIndex, TreeIndex};
//!
//! let mut idx = TreeIndex::new();
//! idx.load(vec![
//!     IndexedItem::new(1_u32, BoundingBox::new(0.0, 0.0, 10.0, 10.0)),
//!     IndexedItem::new(2, BoundingBox::new(5.0, 5.0, 15.0, 15.0)),
//! ]);
//!
//! // Box select.
//! let hits = idx.search(&BoundingBox::new(12.0, 12.0, 20.0, 20.0));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 2);
//!
//! // Pick with a small tolerance around the cursor.
//! assert!(idx.collides(&BoundingBox::around_point(-0.5, -0.5, 1.0)));
//! ```
//!
//! Grouped scenes go through the hierarchical index:
//!
//! ```rust
//! use cadview_index::{BoundingBox, HierarchicalIndex, IndexedItem, SpatialIndex};
//!
//! let mut scene = HierarchicalIndex::new();
//! let block = IndexedItem::new(100_u64, BoundingBox::new(0.0, 0.0, 50.0, 50.0));
//! let members = vec![
//!     IndexedItem::new(101, BoundingBox::new(0.0, 0.0, 5.0, 5.0)),
//!     IndexedItem::new(102, BoundingBox::new(45.0, 45.0, 50.0, 50.0)),
//! ];
//! scene.add_group(block, members);
//!
//! // The block's box is hit, but none of its members are.
//! let groups = scene.search_groups(&BoundingBox::new(20.0, 20.0, 30.0, 30.0));
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].children.as_deref(), Some(&[][..]));
//! assert!(!scene.collides(&BoundingBox::new(20.0, 20.0, 30.0, 30.0)));
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are assumed finite. NaN or infinite input is a caller bug; geometry
//! construction is expected to reject it before boxes reach an index.

pub mod backends;
pub mod config;
pub mod hierarchical;
pub mod index;
pub mod types;

pub use backends::linear::LinearIndex;
pub use backends::rtree::{TreeIndex, TreeParams};
pub use config::{DEFAULT_CHILD_THRESHOLD, IndexConfig};
pub use hierarchical::{ChildIndex, ChildIndexKind, GroupHit, HierarchicalIndex};
pub use index::{ItemEq, SpatialIndex};
pub use types::{BoundingBox, IndexedItem, ItemId};
