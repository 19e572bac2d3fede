// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and pick with a cursor tolerance.
//!
//! Walks a cursor across a row of entities, reporting which entity the cursor hovers
//! and whether a click would hit anything. Then moves an entity and hovers again.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p cadview_demos --example hover_pick`

use cadview_index::{BoundingBox, IndexedItem, SpatialIndex, TreeIndex};
use kurbo::{Point, Rect};

/// Pick tolerance in world units, a few pixels at the current zoom.
const TOLERANCE: f64 = 1.5;

fn main() {
    env_logger::init();

    let mut idx = TreeIndex::new();
    idx.load(
        (0..8_u32)
            .map(|i| {
                let x = f64::from(i) * 20.0;
                IndexedItem::new(i, Rect::new(x, 0.0, x + 10.0, 10.0).into())
            })
            .collect(),
    );

    let mut hovered: Option<u32> = None;
    for step in 0..12 {
        let cursor = Point::new(f64::from(step) * 13.0, 5.0);
        let probe = BoundingBox::around_point(cursor.x, cursor.y, TOLERANCE);
        let now = idx.search(&probe).first().map(|it| it.id);
        if now != hovered {
            match (hovered, now) {
                (Some(old), Some(new)) => println!("{cursor:?}: leave {old}, enter {new}"),
                (Some(old), None) => println!("{cursor:?}: leave {old}"),
                (None, Some(new)) => println!("{cursor:?}: enter {new}"),
                (None, None) => {}
            }
            hovered = now;
        }
        if !idx.collides(&probe) {
            log::debug!("click at {cursor:?} would clear the selection");
        }
    }

    // Dragging entity 3 is a re-insert under the same id.
    let dragged = BoundingBox::from_xywh(200.0, 50.0, 10.0, 10.0);
    idx.insert(IndexedItem::new(3, dragged));
    let at_old = idx.search_point(65.0, 5.0);
    let at_new = idx.search_point(205.0, 55.0);
    println!(
        "after drag: old spot {:?}, new spot {:?}, {} entities",
        at_old.iter().map(|it| it.id).collect::<Vec<_>>(),
        at_new.iter().map(|it| it.id).collect::<Vec<_>>(),
        idx.len()
    );
}
