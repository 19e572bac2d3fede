// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cadview_rebase::{BufferRebaser, LoopsRebaser, Point3, PointsRebaser, Rebase};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

const ORIGIN_X: f64 = 3.2e7;
const ORIGIN_Y: f64 = 4.1e6;

fn gen_polyline(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(ORIGIN_X + i as f64 * 0.5, ORIGIN_Y + (i % 17) as f64))
        .collect()
}

fn gen_buffer_f32(n: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(n * 3);
    for i in 0..n {
        out.push((ORIGIN_X + i as f64) as f32);
        out.push((ORIGIN_Y + (i % 31) as f64) as f32);
        out.push(0.0);
    }
    out
}

fn gen_loops(rings: usize, per_ring: usize) -> Vec<Vec<Point>> {
    (0..rings)
        .map(|r| {
            let cx = ORIGIN_X + r as f64 * 40.0;
            (0..per_ring)
                .map(|i| {
                    let a = i as f64 / per_ring as f64 * core::f64::consts::TAU;
                    Point::new(cx + 15.0 * a.cos(), ORIGIN_Y + 15.0 * a.sin())
                })
                .collect()
        })
        .collect()
}

fn bench_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebase_points");
    for &n in &[1_000usize, 100_000] {
        let line = gen_polyline(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("detect_compute_apply_n{n}"), |b| {
            b.iter_batched(
                || line.clone(),
                |mut line| {
                    let offset = PointsRebaser::new(&mut line).rebase(None);
                    black_box(offset);
                },
                BatchSize::LargeInput,
            )
        });
        // Near-origin input: detection only, nothing is touched.
        let near: Vec<_> = (0..n).map(|i| Point::new(i as f64, 0.0)).collect();
        group.bench_function(format!("detect_only_n{n}"), |b| {
            b.iter_batched(
                || near.clone(),
                |mut near| black_box(PointsRebaser::new(&mut near).rebase(None)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebase_buffer_f32");
    for &n in &[1_000usize, 100_000] {
        let buf = gen_buffer_f32(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("xyz_n{n}"), |b| {
            b.iter_batched(
                || buf.clone(),
                |mut buf| {
                    let offset = BufferRebaser::new(&mut buf, 3)
                        .ok()
                        .and_then(|mut r| r.rebase(None));
                    black_box(offset);
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("xyz_shared_offset_n{n}"), |b| {
            b.iter_batched(
                || buf.clone(),
                |mut buf| {
                    let offset = BufferRebaser::new(&mut buf, 3)
                        .ok()
                        .and_then(|mut r| r.rebase(Some(Point3::new(ORIGIN_X, ORIGIN_Y, 0.0))));
                    black_box(offset);
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_loops(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebase_loops");
    let loops = gen_loops(512, 64);
    group.throughput(Throughput::Elements((512 * 64) as u64));
    group.bench_function("rings512_v64", |b| {
        b.iter_batched(
            || loops.clone(),
            |mut loops| black_box(LoopsRebaser::new(&mut loops).rebase(None)),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_points, bench_buffer, bench_loops);
criterion_main!(benches);
