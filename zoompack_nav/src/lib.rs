// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoompack Nav: zoom-to-node navigation over a packed circle tree.
//!
//! A [`Navigator`] owns a [`PackedTree`](zoompack_layout::PackedTree), the
//! screen size, the current [`ViewState`](zoompack_view::ViewState), and the
//! focused node. Clicking a node zooms to it; clicking the background zooms
//! back to the root. Transitions are eased and cancellable:
//!
//! - [`Navigator::request_zoom`] arms an [`AnimationJob`] and returns a
//!   [`TickTicket`].
//! - The host's frame loop calls [`Navigator::tick`] with that ticket and the
//!   current time until it reports [`TickOutcome::Finished`] or
//!   [`TickOutcome::Stale`].
//! - A newer request cancels the older job; its ticket goes stale and any
//!   leftover ticks are ignored.
//!
//! ```rust
//! use zoompack_layout::{HierarchyNode, PackConfig, layout};
//! use zoompack_nav::{Navigator, TickOutcome};
//! use zoompack_view::ScreenSize;
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
//! let b = tree.nodes()[2].id();
//! let mut nav = Navigator::new(tree, ScreenSize::new(1000.0, 1000.0));
//!
//! let ticket = nav.request_zoom(b, 0.0).unwrap();
//! let mut now = 0.0;
//! while nav.tick(&ticket, now) == TickOutcome::Animating {
//!     now += 16.0;
//! }
//! assert_eq!(nav.focus(), b);
//! assert_eq!(nav.view(), nav.fit_view(b));
//! ```
//!
//! The navigator is single-threaded state; hosts that share it wrap it in
//! their own lock. Time is whatever monotonic clock the host passes in.

extern crate alloc;

mod animation;
mod easing;
mod frame;
mod navigator;

pub use animation::{AnimationJob, CancelToken, TickTicket};
pub use easing::{Easing, ease_in_out_cubic, ease_out_cubic, linear};
pub use frame::RenderItem;
pub use navigator::{NavConfig, NavPhase, Navigator, NavigatorDebugInfo, TickOutcome};
