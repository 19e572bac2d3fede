// Copyright 2025 the Cadview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cadview_index::{
    BoundingBox, HierarchicalIndex, IndexedItem, LinearIndex, SpatialIndex, TreeIndex,
};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn gen_grid_items(n: usize, cell: f64) -> Vec<IndexedItem<u32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let id = (y * n + x) as u32;
            let bbox = BoundingBox::from_xywh(x as f64 * cell, y as f64 * cell, cell, cell);
            out.push(IndexedItem::new(id, bbox));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_items(count: usize, extent: f64, size: f64) -> Vec<IndexedItem<u32>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| {
            let x0 = rng.next_f64() * (extent - size);
            let y0 = rng.next_f64() * (extent - size);
            IndexedItem::new(i as u32, BoundingBox::from_xywh(x0, y0, size, size))
        })
        .collect()
}

/// Blocks laid out on a coarse grid, each holding `per_block` small members.
///
/// Group ids are `0..blocks`; member ids start after them.
fn gen_blocks(blocks: usize, per_block: usize) -> Vec<(IndexedItem<u32>, Vec<IndexedItem<u32>>)> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let side = (blocks as f64).sqrt().ceil() as usize;
    let mut next_id = blocks as u32;
    (0..blocks)
        .map(|b| {
            let ox = (b % side) as f64 * 250.0;
            let oy = (b / side) as f64 * 250.0;
            let members: Vec<_> = (0..per_block)
                .map(|_| {
                    let x0 = ox + rng.next_f64() * 190.0;
                    let y0 = oy + rng.next_f64() * 190.0;
                    let id = next_id;
                    next_id += 1;
                    IndexedItem::new(id, BoundingBox::from_xywh(x0, y0, 10.0, 10.0))
                })
                .collect();
            let bbox = BoundingBox::union_all(members.iter().map(|m| &m.bbox))
                .unwrap_or(BoundingBox::from_point(ox, oy));
            (IndexedItem::new(b as u32, bbox), members)
        })
        .collect()
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query_grid");
    let query = BoundingBox::from_xywh(100.0, 100.0, 400.0, 400.0);
    for &n in &[32usize, 64, 128] {
        let items = gen_grid_items(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("linear_load_n{n}"), |b| {
            b.iter_batched(
                || items.clone(),
                |items| {
                    let idx = LinearIndex::from_items(items);
                    black_box(idx.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("tree_insert_n{n}"), |b| {
            b.iter_batched(
                TreeIndex::<u32>::new,
                |mut idx| {
                    for item in items.iter().copied() {
                        idx.insert(item);
                    }
                    black_box(idx.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("tree_bulk_load_n{n}"), |b| {
            b.iter_batched(
                || items.clone(),
                |items| {
                    let idx = TreeIndex::from_items(items);
                    black_box(idx.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy_random");
    let items = gen_random_items(16_384, 4000.0, 12.0);
    let linear = LinearIndex::from_items(items.clone());
    let tree = TreeIndex::from_items(items);
    let mut rng = Rng::new(0x5EED_1234_ABCD_0001);
    let probes: Vec<_> = (0..256)
        .map(|_| BoundingBox::around_point(rng.next_f64() * 4000.0, rng.next_f64() * 4000.0, 4.0))
        .collect();
    group.throughput(Throughput::Elements(probes.len() as u64));

    group.bench_function("linear_pick", |b| {
        b.iter(|| {
            let hits: usize = probes.iter().filter(|p| linear.collides(p)).count();
            black_box(hits);
        })
    });
    group.bench_function("tree_pick", |b| {
        b.iter(|| {
            let hits: usize = probes.iter().filter(|p| tree.collides(p)).count();
            black_box(hits);
        })
    });
    group.bench_function("tree_hover_search", |b| {
        b.iter(|| {
            let hits: usize = probes.iter().map(|p| tree.search(p).len()).sum();
            black_box(hits);
        })
    });
    group.finish();
}

fn bench_update_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_heavy");
    let items = gen_grid_items(64, 10.0);
    group.throughput(Throughput::Elements(items.len() as u64));
    let moved: Vec<_> = items
        .iter()
        .map(|it| {
            let b = it.bbox;
            IndexedItem::new(
                it.id,
                BoundingBox::from_xywh(b.min_x + 3.0, b.min_y + 3.0, 10.0, 10.0),
            )
        })
        .collect();

    group.bench_function("linear_move_all", |b| {
        b.iter_batched(
            || LinearIndex::from_items(items.clone()),
            |mut idx| {
                for item in moved.iter().copied() {
                    idx.insert(item);
                }
                black_box(idx.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("tree_move_all", |b| {
        b.iter_batched(
            || TreeIndex::from_items(items.clone()),
            |mut idx| {
                for item in moved.iter().copied() {
                    idx.insert(item);
                }
                black_box(idx.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("tree_remove_all", |b| {
        b.iter_batched(
            || TreeIndex::from_items(items.clone()),
            |mut idx| {
                for item in &items {
                    idx.remove_by_id(item.id);
                }
                black_box(idx.is_empty());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_hierarchical(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchical_blocks");
    let query = BoundingBox::from_xywh(600.0, 600.0, 500.0, 500.0);
    for &(blocks, per_block) in &[(64usize, 40usize), (64, 400)] {
        let scene = gen_blocks(blocks, per_block);
        let flat: Vec<_> = scene.iter().flat_map(|(_, m)| m.iter().copied()).collect();
        group.throughput(Throughput::Elements(flat.len() as u64));

        group.bench_function(format!("build_query_b{blocks}_m{per_block}"), |b| {
            b.iter_batched(
                || scene.clone(),
                |scene| {
                    let mut idx = HierarchicalIndex::new();
                    for (block, members) in scene {
                        idx.add_group(block, members);
                    }
                    black_box(idx.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("flat_tree_b{blocks}_m{per_block}"), |b| {
            b.iter_batched(
                || flat.clone(),
                |flat| {
                    let idx = TreeIndex::from_items(flat);
                    black_box(idx.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        let mut idx = HierarchicalIndex::new();
        for (block, members) in scene.iter().cloned() {
            idx.add_group(block, members);
        }
        group.bench_function(format!("collides_b{blocks}_m{per_block}"), |b| {
            b.iter(|| black_box(idx.collides(&query)))
        });
        group.bench_function(format!("search_groups_b{blocks}_m{per_block}"), |b| {
            b.iter(|| black_box(idx.search_groups(&query).len()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build_query,
    bench_query_heavy,
    bench_update_heavy,
    bench_hierarchical,
);
criterion_main!(benches);
