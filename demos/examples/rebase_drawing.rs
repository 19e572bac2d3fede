// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebasing a survey drawing before upload to a single-precision renderer.
//!
//! The site plan sits around (32 000 000, 4 100 000). The boundary polyline decides the
//! offset; the hatch, the vertex buffer, and the annotation entities reuse it so every
//! piece stays aligned. World coordinates come back through `restore`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p cadview_demos --example rebase_drawing`

use cadview_rebase::{
    BufferRebaser, EntitiesRebaser, LoopsRebaser, Point3, PointsRebaser, Positioned, Rebase,
    RebaseError,
};
use kurbo::Point;

#[derive(Debug)]
struct Label {
    text: &'static str,
    anchor: Option<Point3>,
}

impl Positioned for Label {
    fn base_point(&self) -> Option<Point3> {
        self.anchor
    }

    fn translate(&mut self, delta: Point3) {
        if let Some(anchor) = &mut self.anchor {
            *anchor += delta;
        }
    }
}

fn main() -> Result<(), RebaseError> {
    env_logger::init();

    let (ox, oy) = (32_000_000.0, 4_100_000.0);
    let mut boundary = vec![
        Point::new(ox, oy),
        Point::new(ox + 120.0, oy),
        Point::new(ox + 120.0, oy + 80.0),
        Point::new(ox, oy + 80.0),
    ];
    let mut hatch = vec![vec![
        Point::new(ox + 10.0, oy + 10.0),
        Point::new(ox + 30.0, oy + 10.0),
        Point::new(ox + 30.0, oy + 30.0),
    ]];
    let mut vertices: Vec<f32> = boundary
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, 0.0])
        .collect();
    let mut labels = vec![
        Label {
            text: "Lot 12",
            anchor: Some(Point3::new(ox + 60.0, oy + 40.0, 0.0)),
        },
        Label {
            text: "legend",
            anchor: None,
        },
    ];

    let Some(offset) = PointsRebaser::new(&mut boundary).rebase(None) else {
        println!("drawing is near the origin, nothing to do");
        return Ok(());
    };
    println!("boundary rebased by {offset:?}: {boundary:?}");

    LoopsRebaser::new(&mut hatch).rebase(Some(offset));
    BufferRebaser::new(&mut vertices, 3)?.rebase(Some(offset));
    EntitiesRebaser::new(&mut labels).rebase(Some(offset));

    println!("hatch: {hatch:?}");
    println!("vertex buffer: {vertices:?}");
    for label in &labels {
        println!("label {:?} at {:?}", label.text, label.anchor);
    }

    // Nothing exceeds the threshold any more.
    assert!(!PointsRebaser::new(&mut boundary).should_rebase());

    PointsRebaser::new(&mut boundary).restore(offset);
    println!("restored boundary: {boundary:?}");
    Ok(())
}
