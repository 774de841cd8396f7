// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use zoompack_benches::random_hierarchy;
use zoompack_layout::{ChildOrder, LeafWeight, PackConfig, layout};

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoompack_layout");
    group.sample_size(30);

    for &(leaves, fanout) in &[(256_usize, 4_usize), (4_096, 8), (16_384, 16)] {
        let data = random_hierarchy(leaves, fanout, 0x5EED_0000_0000_0001);
        group.throughput(Throughput::Elements(leaves as u64));

        let uniform = PackConfig::default();
        group.bench_function(BenchmarkId::new(format!("uniform(f={fanout})"), leaves), |b| {
            b.iter(|| black_box(layout(&data, 1000.0, 1000.0, &uniform)));
        });

        let weighted = PackConfig::default()
            .with_leaf_weight(LeafWeight::Input)
            .with_child_order(ChildOrder::ByValueDescending);
        group.bench_function(BenchmarkId::new(format!("weighted(f={fanout})"), leaves), |b| {
            b.iter(|| black_box(layout(&data, 1000.0, 1000.0, &weighted)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
