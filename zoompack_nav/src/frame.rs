// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame render list.

use alloc::vec::Vec;

use kurbo::Circle;
use zoompack_layout::{NodeId, PackedTree};
use zoompack_view::{CullConfig, ScreenSize, ViewState, transform, visible_in_tree};

/// One circle to draw, already in center-origin screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderItem {
    /// The node drawn.
    pub node: NodeId,
    /// Screen-space circle.
    pub circle: Circle,
    /// Depth in the tree; the root's children are at depth one.
    pub depth: u32,
    /// Leaves are drawn as inert fills.
    pub is_leaf: bool,
    /// Pointer is over this node.
    pub hovered: bool,
    /// This node is the navigation focus.
    pub focused: bool,
    /// Children of the focus large enough to carry a label.
    pub show_label: bool,
}

pub(crate) fn build_frame(
    tree: &PackedTree,
    view: &ViewState,
    size: ScreenSize,
    focus: NodeId,
    cull: &CullConfig,
    hovered: Option<NodeId>,
) -> Vec<RenderItem> {
    let root = tree.root();
    visible_in_tree(tree, root, view, size, cull)
        .into_iter()
        .filter(|node| node.id() != root)
        .map(|node| {
            let circle = transform(node.circle(), view, size.width);
            RenderItem {
                node: node.id(),
                circle,
                depth: node.depth(),
                is_leaf: node.is_leaf(),
                hovered: hovered == Some(node.id()),
                focused: node.id() == focus,
                show_label: node.parent() == Some(focus) && circle.radius >= cull.label_min_radius,
            }
        })
        .collect()
}
