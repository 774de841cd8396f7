// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use zoompack_benches::{Lcg, random_hierarchy};
use zoompack_layout::{PackConfig, PackedTree, layout};
use zoompack_view::{CullConfig, ScreenSize, ViewState, visible_in_tree, visible_subset};

fn views(tree: &PackedTree, size: ScreenSize, count: usize, seed: u64) -> Vec<ViewState> {
    let mut rng = Lcg::new(seed);
    let nodes = tree.nodes();
    (0..count)
        .map(|_| {
            let node = &nodes[rng.gen_range_usize(nodes.len())];
            ViewState::fit_circle(node.circle(), size, 1.1)
        })
        .collect()
}

fn bench_culling(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoompack_view");
    group.sample_size(50);

    let size = ScreenSize::new(1280.0, 800.0);
    let config = CullConfig::default();

    for &leaves in &[1_024_usize, 16_384] {
        let data = random_hierarchy(leaves, 8, 0xC011_0000_0000_0001);
        let tree = layout(&data, size.width, size.height, &PackConfig::default()).unwrap();
        let root_view = ViewState::fit_circle(tree.get(tree.root()).circle(), size, 1.1);
        let zoomed = views(&tree, size, 64, 0xC011_0000_0000_0002);

        group.bench_function(BenchmarkId::new("linear_root_view", leaves), |b| {
            b.iter(|| black_box(visible_subset(tree.nodes(), &root_view, size, &config).len()));
        });
        group.bench_function(BenchmarkId::new("pruned_root_view", leaves), |b| {
            b.iter(|| {
                black_box(visible_in_tree(&tree, tree.root(), &root_view, size, &config).len())
            });
        });

        group.bench_function(BenchmarkId::new("linear_zoomed", leaves), |b| {
            b.iter(|| {
                let total: usize = zoomed
                    .iter()
                    .map(|view| visible_subset(tree.nodes(), view, size, &config).len())
                    .sum();
                black_box(total)
            });
        });
        group.bench_function(BenchmarkId::new("pruned_zoomed", leaves), |b| {
            b.iter(|| {
                let total: usize = zoomed
                    .iter()
                    .map(|view| visible_in_tree(&tree, tree.root(), view, size, &config).len())
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_culling);
criterion_main!(benches);
