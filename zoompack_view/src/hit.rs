// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use zoompack_layout::{NodeId, PackedTree};

use crate::viewport::{ScreenSize, ViewState, inverse_transform};

/// Finds the click target under a center-origin screen point.
///
/// Returns the deepest non-root node with children whose circle contains the
/// point. Leaves are never targets, so a click on a leaf resolves to its
/// parent. `None` means the background (including the root's own circle).
#[must_use]
pub fn hit_test(
    tree: &PackedTree,
    view: &ViewState,
    size: ScreenSize,
    point: Point,
) -> Option<NodeId> {
    let p = inverse_transform(point, view, size.width);
    let mut hit = None;
    let mut current = tree.root();
    // Siblings never overlap, so at most one child contains the point.
    while let Some(next) = tree.get(current).children().iter().copied().find(|&c| {
        let node = tree.get(c);
        !node.is_leaf() && (p - node.center()).hypot2() <= node.radius() * node.radius()
    }) {
        hit = Some(next);
        current = next;
    }
    hit
}

#[cfg(test)]
mod tests {
    use zoompack_layout::{HierarchyNode, PackConfig, layout};

    use super::*;

    #[test]
    fn background_and_leaves() {
        let data = HierarchyNode::branch(
            "root",
            [
                HierarchyNode::leaf("a", 1.0),
                HierarchyNode::branch(
                    "b",
                    [HierarchyNode::leaf("c", 1.0), HierarchyNode::leaf("d", 1.0)],
                ),
            ],
        );
        let tree = layout(&data, 100.0, 100.0, &PackConfig::default()).unwrap();
        let size = ScreenSize::new(100.0, 100.0);
        let view = ViewState::new(Point::ZERO, 100.0);

        assert_eq!(hit_test(&tree, &view, size, Point::new(49.0, 49.0)), None);

        let a = &tree.nodes()[1];
        assert_eq!(hit_test(&tree, &view, size, a.center()), None, "leaves are inert");

        let b = &tree.nodes()[2];
        let c = &tree.nodes()[3];
        assert_eq!(hit_test(&tree, &view, size, b.center()), Some(b.id()));
        assert_eq!(
            hit_test(&tree, &view, size, c.center()),
            Some(b.id()),
            "a leaf click goes to its parent"
        );
    }
}
