// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoompack Layout: turn a weighted hierarchy into nested, packed circles.
//!
//! This crate is the boundary between raw hierarchical data and the
//! navigation engine. It:
//! - Normalizes leaf weights ([`normalize_leaves`]) so every leaf packs into
//!   an equal-area circle by default.
//! - Flattens the hierarchy into a [`PackedTree`], a pre-order index arena
//!   where parents and children refer to each other by [`NodeId`].
//! - Delegates geometry to a [`Packer`]; [`SiblingPacker`] is the default.
//!
//! The packed tree is static per dataset and extent. Zooming never re-runs
//! the layout; the view crates scale the layout-space circles instead.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoompack_layout::{HierarchyNode, PackConfig, layout};
//!
//! let data = HierarchyNode::branch(
//!     "root",
//!     [
//!         HierarchyNode::leaf("a", 10.0),
//!         HierarchyNode::branch(
//!             "b",
//!             [HierarchyNode::leaf("c", 5.0), HierarchyNode::leaf("d", 5.0)],
//!         ),
//!     ],
//! );
//! let tree = layout(&data, 1000.0, 1000.0, &PackConfig::default()).unwrap();
//!
//! let root = tree.get(tree.root());
//! assert_eq!(root.center(), kurbo::Point::ZERO);
//! assert!((root.radius() - 500.0).abs() < 1e-9);
//! assert_eq!(tree.len(), 5);
//! ```

extern crate alloc;

mod config;
mod enclose;
mod error;
mod hierarchy;
mod pack;
mod tree;

pub use config::{ChildOrder, LeafWeight, PackConfig};
pub use error::LayoutError;
pub use hierarchy::{HierarchyNode, normalize_leaves};
pub use pack::{Packer, SiblingPacker};
pub use tree::{NodeId, PackedTree, PositionedCircle};

use tracing::debug;

/// Lays out `tree` into a `width` × `height` extent with the default packer.
///
/// See [`layout_with`].
pub fn layout(
    tree: &HierarchyNode,
    width: f64,
    height: f64,
    config: &PackConfig,
) -> Result<PackedTree, LayoutError> {
    layout_with(&SiblingPacker, tree, width, height, config)
}

/// Lays out `tree` with a caller-supplied [`Packer`].
///
/// Steps, in order:
/// 1. Validate the extent and padding.
/// 2. Normalize leaf weights according to [`PackConfig::leaf_weight`].
/// 3. Reorder siblings if [`PackConfig::child_order`] asks for it.
/// 4. Flatten into a [`PackedTree`], rejecting non-positive or non-finite leaves.
/// 5. Run the packer.
pub fn layout_with<P: Packer + ?Sized>(
    packer: &P,
    tree: &HierarchyNode,
    width: f64,
    height: f64,
    config: &PackConfig,
) -> Result<PackedTree, LayoutError> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(LayoutError::InvalidExtent { width, height });
    }
    if !(config.padding.is_finite() && config.padding >= 0.0) {
        return Err(LayoutError::InvalidPadding {
            padding: config.padding,
        });
    }

    let mut normalized = normalize_leaves(tree, config.leaf_weight);
    if config.child_order == ChildOrder::ByValueDescending {
        hierarchy::sort_by_weight_descending(&mut normalized);
    }

    let mut packed = PackedTree::from_hierarchy(&normalized)?;
    packer.pack(&mut packed, width, height, config.padding)?;
    debug!(
        nodes = packed.len(),
        root_radius = packed.get(packed.root()).radius(),
        width,
        height,
        "packed hierarchy"
    );
    Ok(packed)
}
