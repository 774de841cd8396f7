// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use zoompack_benches::random_hierarchy;
use zoompack_layout::{PackConfig, layout};
use zoompack_nav::{Navigator, TickOutcome};
use zoompack_view::{CullConfig, ScreenSize};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoompack_nav");
    group.sample_size(30);

    let size = ScreenSize::new(1280.0, 800.0);
    let data = random_hierarchy(4_096, 8, 0x7A11_0000_0000_0001);
    let tree = layout(&data, size.width, size.height, &PackConfig::default()).unwrap();
    let target = tree
        .nodes()
        .iter()
        .filter(|n| !n.is_leaf())
        .max_by_key(|n| n.depth())
        .map(|n| n.id())
        .unwrap();
    let cull = CullConfig::default();

    // One full zoom transition, building a render list every frame.
    group.bench_function("zoom_with_frames(n=4096)", |b| {
        b.iter_batched(
            || Navigator::new(tree.clone(), size),
            |mut nav| {
                let ticket = nav.request_zoom(target, 0.0).unwrap();
                let mut now = 0.0;
                let mut drawn = 0_usize;
                loop {
                    let outcome = nav.tick(&ticket, now);
                    drawn += nav.frame(&cull, None).len();
                    if outcome != TickOutcome::Animating {
                        break;
                    }
                    now += FRAME_MS;
                }
                black_box(drawn)
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_navigation);
criterion_main!(benches);
