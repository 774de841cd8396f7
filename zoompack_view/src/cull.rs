// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility culling of packed circles against the screen rectangle.

use alloc::vec::Vec;

use kurbo::Circle;
use zoompack_layout::{NodeId, PackedTree, PositionedCircle};

use crate::viewport::{ScreenSize, ViewState, transform};

/// Culling and labeling thresholds, in screen pixels.
///
/// None of these values are part of the layout contract; they are tuning knobs
/// for how much work a frame does.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CullConfig {
    /// Extra pixels around the screen rectangle that still count as visible.
    pub margin: f64,
    /// Circles with a screen radius at or below this are skipped.
    pub min_radius: f64,
    /// Circles with a screen radius below this get no label.
    pub label_min_radius: f64,
}

impl Default for CullConfig {
    fn default() -> Self {
        Self {
            margin: 100.0,
            min_radius: 0.5,
            label_min_radius: 15.0,
        }
    }
}

impl CullConfig {
    /// Returns a copy with the given margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Returns a copy with the given minimum render radius.
    #[must_use]
    pub fn with_min_radius(mut self, min_radius: f64) -> Self {
        self.min_radius = min_radius;
        self
    }

    /// Returns a copy with the given label threshold.
    #[must_use]
    pub fn with_label_min_radius(mut self, label_min_radius: f64) -> Self {
        self.label_min_radius = label_min_radius;
        self
    }
}

/// Returns `true` if a screen-space circle should be drawn.
///
/// The circle's bounding box must touch the screen rectangle grown by `margin`
/// on every side, and its radius must exceed `min_radius`. Touching edges count
/// as intersecting.
#[must_use]
#[inline]
pub fn is_visible(screen: Circle, size: ScreenSize, margin: f64, min_radius: f64) -> bool {
    let r = screen.radius.max(0.0);
    if r <= min_radius {
        return false;
    }
    let bounds = size.screen_rect().inflate(margin, margin);
    let c = screen.center;
    c.x + r >= bounds.x0 && c.x - r <= bounds.x1 && c.y + r >= bounds.y0 && c.y - r <= bounds.y1
}

/// Filters `nodes` down to the ones visible under `view`, preserving order.
///
/// This is a linear scan and the reference behavior for culling. The result
/// depends on the view and the screen size and must be recomputed whenever
/// either changes.
pub fn visible_subset<'a, I>(
    nodes: I,
    view: &ViewState,
    size: ScreenSize,
    config: &CullConfig,
) -> Vec<&'a PositionedCircle>
where
    I: IntoIterator<Item = &'a PositionedCircle>,
{
    nodes
        .into_iter()
        .filter(|node| {
            is_visible(
                transform(node.circle(), view, size.width),
                size,
                config.margin,
                config.min_radius,
            )
        })
        .collect()
}

/// Returns `true` if a culled node's subtree may still hold visible nodes.
///
/// Children lie inside their parent only up to rounding, and tangent children
/// (zero padding) share the parent's boundary. The subtree is kept whenever the
/// parent misses the visibility test by no more than a rounding-sized slack
/// scaled to the layout and screen magnitudes involved.
fn subtree_may_be_visible(
    node: &PositionedCircle,
    screen: Circle,
    view: &ViewState,
    size: ScreenSize,
    config: &CullConfig,
) -> bool {
    let k = view.zoom(size.width);
    let layout_mag = node.x().abs()
        + node.y().abs()
        + node.radius()
        + view.center.x.abs()
        + view.center.y.abs();
    let screen_mag = screen.center.x.abs() + screen.center.y.abs() + screen.radius + 1.0;
    let slack = 1e-9 * (k * layout_mag + screen_mag);
    let r = screen.radius.max(0.0) + slack;
    if r <= config.min_radius {
        return false;
    }
    let margin = config.margin + slack;
    let bounds = size.screen_rect().inflate(margin, margin);
    let c = screen.center;
    c.x + r >= bounds.x0 && c.x - r <= bounds.x1 && c.y + r >= bounds.y0 && c.y - r <= bounds.y1
}

/// Visible nodes of the subtree rooted at `from`, in pre-order.
///
/// Children lie inside their parent, so when a node is culled (off screen or
/// too small) by more than rounding error its whole subtree is culled as well
/// and skipped in one step. Each node is still emitted by the exact
/// [`is_visible`] test, so the output matches [`visible_subset`] over
/// [`PackedTree::descendants`], but the work is proportional to the visible
/// part of the tree rather than its size.
///
/// # Panics
///
/// Panics if `from` does not belong to `tree`.
#[track_caller]
pub fn visible_in_tree<'a>(
    tree: &'a PackedTree,
    from: NodeId,
    view: &ViewState,
    size: ScreenSize,
    config: &CullConfig,
) -> Vec<&'a PositionedCircle> {
    let range = tree.subtree_range(from);
    let nodes = tree.nodes();
    let mut out = Vec::new();
    let mut i = range.start;
    while i < range.end {
        let node = &nodes[i];
        let screen = transform(node.circle(), view, size.width);
        if is_visible(screen, size, config.margin, config.min_radius) {
            out.push(node);
            i += 1;
        } else if subtree_may_be_visible(node, screen, view, size, config) {
            i += 1;
        } else {
            i = tree.subtree_range(node.id()).end;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    const SIZE: ScreenSize = ScreenSize {
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn circle_on_screen_is_visible() {
        assert!(is_visible(Circle::new(Point::ZERO, 10.0), SIZE, 0.0, 0.5));
    }

    #[test]
    fn circle_touching_edge_is_visible() {
        // Screen spans x in [-100, 100]; this circle's box ends exactly at -100.
        let c = Circle::new(Point::new(-110.0, 0.0), 10.0);
        assert!(is_visible(c, SIZE, 0.0, 0.5));
        let c = Circle::new(Point::new(-110.5, 0.0), 10.0);
        assert!(!is_visible(c, SIZE, 0.0, 0.5));
        assert!(is_visible(c, SIZE, 1.0, 0.5), "margin brings it back");
    }

    #[test]
    fn tiny_circles_are_culled() {
        assert!(!is_visible(Circle::new(Point::ZERO, 0.5), SIZE, 0.0, 0.5));
        assert!(is_visible(Circle::new(Point::ZERO, 0.51), SIZE, 0.0, 0.5));
        assert!(!is_visible(Circle::new(Point::ZERO, -3.0), SIZE, 0.0, 0.0));
    }
}
