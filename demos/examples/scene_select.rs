// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene build and box selection.
//!
//! Loads a small drawing into a hierarchical index (two blocks plus loose entities),
//! runs a window selection, then removes a block and selects again.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p cadview_demos --example scene_select`

use cadview_index::{BoundingBox, HierarchicalIndex, IndexedItem, SpatialIndex};

fn block(id: u32, x: f64, y: f64, count: u32) -> (IndexedItem<u32>, Vec<IndexedItem<u32>>) {
    let members: Vec<_> = (0..count)
        .map(|i| {
            let col = f64::from(i % 10);
            let row = f64::from(i / 10);
            IndexedItem::new(
                id * 1000 + i,
                BoundingBox::from_xywh(x + col * 6.0, y + row * 6.0, 4.0, 4.0),
            )
        })
        .collect();
    let bbox = BoundingBox::union_all(members.iter().map(|m| &m.bbox))
        .unwrap_or(BoundingBox::from_point(x, y));
    (IndexedItem::new(id, bbox), members)
}

fn main() {
    env_logger::init();

    let mut scene = HierarchicalIndex::new();

    // A small block stays linear; a large one gets its own tree.
    let (title_block, title_members) = block(1, 0.0, 0.0, 20);
    let (grid_block, grid_members) = block(2, 100.0, 0.0, 250);
    scene.add_group(title_block, title_members);
    scene.add_group(grid_block, grid_members);

    // Loose entities have no child index and answer for themselves.
    let dimension = BoundingBox::new(70.0, 10.0, 90.0, 12.0);
    let leader = BoundingBox::new(70.0, 40.0, 90.0, 42.0);
    scene.insert(IndexedItem::new(9001, dimension));
    scene.insert(IndexedItem::new(9002, leader));

    println!(
        "scene: {} root entries, {} child indexes ({:?} / {:?})",
        scene.len(),
        scene.child_index_count(),
        scene.child_index_kind(1),
        scene.child_index_kind(2),
    );

    let window = BoundingBox::new(50.0, 5.0, 115.0, 20.0);
    let mut picked: Vec<u32> = scene.search(&window).into_iter().map(|it| it.id).collect();
    picked.sort_unstable();
    println!("window {window:?} selects {picked:?}");

    for hit in scene.search_groups(&window) {
        match hit.children {
            Some(children) => println!("  group {} -> {} members", hit.hit.id, children.len()),
            None => println!("  entity {}", hit.hit.id),
        }
    }

    scene.remove_by_id(2);
    let mut picked: Vec<u32> = scene.search(&window).into_iter().map(|it| it.id).collect();
    picked.sort_unstable();
    println!(
        "after removing block 2: {picked:?} ({} child indexes)",
        scene.child_index_count()
    );
}
