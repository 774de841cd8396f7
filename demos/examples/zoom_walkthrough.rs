// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless zoom walkthrough.
//!
//! Lays out the bundled hierarchy, zooms into the deepest branch, clicks a
//! sibling mid-flight, then clicks the background to return to the root. Each
//! frame logs how many circles survive culling.
//!
//! Run:
//! - `cargo run -p zoompack_demos --example zoom_walkthrough`
//! - `RUST_LOG=zoompack_nav=trace cargo run -p zoompack_demos --example zoom_walkthrough`

use kurbo::Point;
use tracing::info;
use zoompack_demos::{SAMPLE_JSON, init_tracing, parse_hierarchy};
use zoompack_layout::{ChildOrder, LeafWeight, PackConfig, layout};
use zoompack_nav::{Navigator, TickOutcome, TickTicket};
use zoompack_view::{CullConfig, ScreenSize, transform};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn pump(
    nav: &mut Navigator,
    ticket: &TickTicket,
    mut now: f64,
    until: f64,
    cull: &CullConfig,
) -> f64 {
    while now <= until {
        let outcome = nav.tick(ticket, now);
        let items = nav.frame(cull, None);
        let labels = items.iter().filter(|i| i.show_label).count();
        info!(
            t = now,
            zoom = nav.view().zoom(nav.screen_size().width),
            drawn = items.len(),
            labels,
            ?outcome,
            "frame"
        );
        if outcome != TickOutcome::Animating {
            break;
        }
        now += FRAME_MS;
    }
    now
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let data = parse_hierarchy(SAMPLE_JSON)?;
    let size = ScreenSize::new(960.0, 720.0);
    let config = PackConfig::default()
        .with_leaf_weight(LeafWeight::Input)
        .with_child_order(ChildOrder::ByValueDescending);
    let tree = layout(&data, size.width, size.height, &config)?;
    info!(nodes = tree.len(), "packed");

    let mut nav = Navigator::new(tree, size);
    let cull = CullConfig::default();

    let deepest = nav
        .tree()
        .nodes()
        .iter()
        .filter(|n| !n.is_leaf())
        .max_by_key(|n| n.depth())
        .map(|n| n.id())
        .ok_or("hierarchy has no branches")?;
    info!(node = nav.tree().get(deepest).name(), "zooming");
    let ticket = nav.request_zoom(deepest, 0.0).ok_or("already focused")?;
    let now = pump(&mut nav, &ticket, 0.0, 300.0, &cull);

    // Click the first top-level branch while the first zoom is still running.
    let root = nav.tree().root();
    let sibling = nav
        .tree()
        .get(root)
        .children()
        .iter()
        .copied()
        .find(|&c| !nav.tree().get(c).is_leaf() && !nav.tree().is_ancestor_or_self(c, deepest))
        .ok_or("no sibling branch")?;
    let on_screen = transform(nav.tree().get(sibling).circle(), &nav.view(), size.width).center;
    info!(
        node = nav.tree().get(sibling).name(),
        x = on_screen.x,
        y = on_screen.y,
        "clicking"
    );
    if let Some(next) = nav.click_at(on_screen, now) {
        assert!(ticket.is_stale());
        let now = pump(&mut nav, &next, now, f64::INFINITY, &cull);

        let corner = Point::new(-size.width * 0.5 + 1.0, -size.height * 0.5 + 1.0);
        info!("clicking the background");
        if let Some(back) = nav.click_at(corner, now) {
            pump(&mut nav, &back, now, f64::INFINITY, &cull);
        }
    }

    info!(debug = ?nav.debug_info(), "done");
    Ok(())
}
