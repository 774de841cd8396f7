// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoompack View: screen mapping for packed circles.
//!
//! This crate is the stateless half of the navigation engine:
//! - [`ViewState`] describes the current pan/zoom as a layout-space center
//!   plus a layout-space extent that spans the screen width.
//! - [`transform`] / [`inverse_transform`] map between layout space and
//!   center-origin screen space with a uniform similarity (no rotation).
//! - [`visible_subset`] and [`visible_in_tree`] cull circles that are off
//!   screen or too small to matter.
//! - [`hit_test`] resolves a pointer position to a click target.
//!
//! Nothing here owns state across frames; the navigator in `zoompack_nav`
//! drives the view and calls into these functions every frame.
//!
//! ## Culling example
//!
//! ```rust
//! use kurbo::Point;
//! use zoompack_layout::{HierarchyNode, PackConfig, layout};
//! use zoompack_view::{CullConfig, ScreenSize, ViewState, visible_in_tree, visible_subset};
//!
//! let data = HierarchyNode::branch(
//!     "root",
//!     [HierarchyNode::leaf("a", 1.0), HierarchyNode::leaf("b", 1.0)],
//! );
//! let tree = layout(&data, 1000.0, 1000.0, &PackConfig::default()).unwrap();
//! let size = ScreenSize::new(1000.0, 1000.0);
//!
//! // Zoom deep into the first leaf: the sibling falls off screen.
//! let a = &tree.nodes()[1];
//! let view = ViewState::new(a.center(), a.radius());
//! let config = CullConfig::default().with_margin(0.0);
//!
//! let linear = visible_subset(tree.nodes(), &view, size, &config);
//! let pruned = visible_in_tree(&tree, tree.root(), &view, size, &config);
//! assert_eq!(linear.len(), 2);
//! assert_eq!(linear.len(), pruned.len());
//! ```
//!
//! ## Design notes
//!
//! - Screen space has its origin at the viewport center, matching a drawing
//!   surface whose view box is centered on `(0, 0)`. Use
//!   [`ScreenSize::center_to_top_left`] for top-left-origin surfaces.
//! - A non-positive scale reference or screen extent is clamped to
//!   [`MIN_EXTENT`] rather than reported; degenerate viewports are a caller bug.

extern crate alloc;

mod cull;
mod hit;
mod viewport;

pub use cull::{CullConfig, is_visible, visible_in_tree, visible_subset};
pub use hit::hit_test;
pub use viewport::{MIN_EXTENT, ScreenSize, ViewState, inverse_transform, transform};
