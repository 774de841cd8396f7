// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use tracing::{debug, trace};
use zoompack_layout::{NodeId, PackedTree, PositionedCircle};
use zoompack_view::{CullConfig, ScreenSize, ViewState, hit_test, visible_in_tree};

use crate::animation::{AnimationJob, TickTicket};
use crate::easing::Easing;
use crate::frame::{RenderItem, build_frame};

/// Navigation tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavConfig {
    /// Default zoom transition length, in the unit of the timestamps passed in
    /// (milliseconds by convention).
    pub duration: f64,
    /// Ratio of framed extent to the focused circle's diameter.
    pub fit_padding: f64,
    /// Curve applied to transition progress.
    pub easing: Easing,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            duration: 750.0,
            fit_padding: 1.1,
            easing: Easing::EaseInOutCubic,
        }
    }
}

impl NavConfig {
    /// Returns a copy with the given default duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Returns a copy with the given fit padding.
    #[must_use]
    pub fn with_fit_padding(mut self, fit_padding: f64) -> Self {
        self.fit_padding = fit_padding;
        self
    }

    /// Returns a copy with the given easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Result of driving a ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The job wrote an intermediate view and wants another frame.
    Animating,
    /// The job wrote its target view and retired.
    Finished,
    /// The ticket's job was superseded or already finished; nothing was written.
    Stale,
}

/// Whether a navigator is at rest or mid-transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    /// No animation is in flight.
    Idle,
    /// A zoom transition is in flight.
    Animating,
}

/// Snapshot of a navigator's state for inspectors and logs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigatorDebugInfo {
    /// Current view.
    pub view: ViewState,
    /// Current screen size.
    pub screen_size: ScreenSize,
    /// Screen pixels per layout unit under the current view.
    pub zoom: f64,
    /// Focused node.
    pub focus: NodeId,
    /// Depth of the focused node.
    pub focus_depth: u32,
    /// Idle or animating.
    pub phase: NavPhase,
    /// Identifier of the in-flight job, if any.
    pub job: Option<u64>,
    /// View the in-flight job converges to, if any.
    pub target_view: Option<ViewState>,
    /// Current revision.
    pub revision: u64,
}

/// Owns a packed tree and the view over it, and moves the view between nodes.
///
/// Time never advances on its own: every method that starts or drives an
/// animation takes the current timestamp `now`. Any monotonic clock works as
/// long as it is used consistently with [`NavConfig::duration`].
///
/// At most one zoom animation is in flight. Requesting a new zoom cancels the
/// running one and starts from whatever view is current, so the motion never
/// jumps. When an animation completes, the view equals the target exactly.
///
/// # Panics
///
/// Methods taking a [`NodeId`] panic if the id was not issued by the tree this
/// navigator currently owns.
#[derive(Debug)]
pub struct Navigator {
    tree: PackedTree,
    size: ScreenSize,
    config: NavConfig,
    view: ViewState,
    focus: NodeId,
    job: Option<AnimationJob>,
    next_job: u64,
    revision: u64,
}

impl Navigator {
    /// Creates a navigator with the default configuration, framing the root.
    #[must_use]
    pub fn new(tree: PackedTree, size: ScreenSize) -> Self {
        Self::with_config(tree, size, NavConfig::default())
    }

    /// Creates a navigator with `config`, framing the root.
    #[must_use]
    pub fn with_config(tree: PackedTree, size: ScreenSize, config: NavConfig) -> Self {
        let root = tree.root();
        let view = ViewState::fit_circle(tree.get(root).circle(), size, config.fit_padding);
        debug!(
            nodes = tree.len(),
            width = size.width,
            height = size.height,
            "navigator created"
        );
        Self {
            tree,
            size,
            config,
            view,
            focus: root,
            job: None,
            next_job: 1,
            revision: 0,
        }
    }

    /// The packed tree being navigated.
    #[must_use]
    pub fn tree(&self) -> &PackedTree {
        &self.tree
    }

    /// The current view.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The focused node; the root when nothing has been zoomed into.
    #[must_use]
    pub fn focus(&self) -> NodeId {
        self.focus
    }

    /// The current screen size.
    #[must_use]
    pub fn screen_size(&self) -> ScreenSize {
        self.size
    }

    /// The navigation configuration.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// The in-flight animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    /// Returns `true` while a zoom animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.job.is_some()
    }

    /// Idle or animating.
    #[must_use]
    pub fn phase(&self) -> NavPhase {
        if self.is_animating() {
            NavPhase::Animating
        } else {
            NavPhase::Idle
        }
    }

    /// Monotonic counter bumped whenever the view, focus, screen size, or tree
    /// changes. Renderers can skip a frame when it has not moved.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// The view that frames `node` on the current screen.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to this navigator's tree.
    #[must_use]
    #[track_caller]
    pub fn fit_view(&self, node: NodeId) -> ViewState {
        ViewState::fit_circle(self.tree.get(node).circle(), self.size, self.config.fit_padding)
    }

    /// Starts a zoom to `node` using the configured duration.
    ///
    /// See [`Navigator::request_zoom_with_duration`].
    #[track_caller]
    pub fn request_zoom(&mut self, node: NodeId, now: f64) -> Option<TickTicket> {
        self.request_zoom_with_duration(node, self.config.duration, now)
    }

    /// Starts a zoom to `node` lasting `duration`.
    ///
    /// Zooming to the already focused node does nothing, even mid-flight. Any
    /// other target becomes the focus immediately, cancels the running
    /// animation, and arms a new one from the current view. A non-positive
    /// `duration` snaps to the target instead.
    ///
    /// Returns a ticket to drive with [`Navigator::tick`], or `None` when no
    /// animation was armed.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to this navigator's tree.
    #[track_caller]
    pub fn request_zoom_with_duration(
        &mut self,
        node: NodeId,
        duration: f64,
        now: f64,
    ) -> Option<TickTicket> {
        assert!(
            self.tree.contains(node),
            "zoom target {node:?} does not belong to this navigator's tree"
        );
        if node == self.focus {
            trace!(node = node.index(), "zoom to focused node ignored");
            return None;
        }
        let target = self.fit_view(node);
        self.focus = node;
        if let Some(preempted) = self.cancel_job() {
            debug!(job = preempted, "zoom preempted");
        }
        self.bump_revision();

        if duration.is_nan() || duration <= 0.0 {
            self.view = target;
            debug!(node = node.index(), "zoom snapped");
            return None;
        }

        let id = self.next_job;
        self.next_job += 1;
        let job = AnimationJob::new(id, now, self.view, target, duration, self.config.easing);
        let ticket = job.ticket();
        debug!(job = id, node = node.index(), duration, "zoom armed");
        self.job = Some(job);
        Some(ticket)
    }

    /// Starts a zoom back to the root.
    pub fn request_zoom_to_root(&mut self, now: f64) -> Option<TickTicket> {
        self.request_zoom(self.tree.root(), now)
    }

    /// Applies a click whose target has already been resolved.
    ///
    /// `Some(node)` zooms to that node; `None` (the background) zooms to the
    /// root.
    ///
    /// # Panics
    ///
    /// Panics if `hit` names a node outside this navigator's tree.
    #[track_caller]
    pub fn handle_click(&mut self, hit: Option<NodeId>, now: f64) -> Option<TickTicket> {
        match hit {
            Some(node) => self.request_zoom(node, now),
            None => self.request_zoom_to_root(now),
        }
    }

    /// Resolves a center-origin screen point with [`hit_test`] and applies the
    /// click.
    pub fn click_at(&mut self, point: Point, now: f64) -> Option<TickTicket> {
        let hit = hit_test(&self.tree, &self.view, self.size, point);
        self.handle_click(hit, now)
    }

    /// Advances the in-flight animation to `now`.
    ///
    /// Returns `true` while the animation still wants frames. Does nothing and
    /// returns `false` when idle.
    pub fn advance(&mut self, now: f64) -> bool {
        let Some(job) = &self.job else {
            return false;
        };
        let id = job.id();
        let progress = job.progress(now);
        self.view = job.sample(now);
        self.bump_revision();
        if progress >= 1.0 {
            debug!(job = id, "zoom finished");
            self.cancel_job();
            false
        } else {
            trace!(job = id, progress, "zoom tick");
            true
        }
    }

    /// Drives the job behind `ticket` to `now`.
    ///
    /// A stale ticket writes nothing, so a frame callback left over from a
    /// preempted animation cannot disturb the current one. Tickets are bound to
    /// the job that issued them; one from another navigator is always stale.
    pub fn tick(&mut self, ticket: &TickTicket, now: f64) -> TickOutcome {
        let live = self.job.as_ref().is_some_and(|job| {
            job.id() == ticket.job && job.token().same_as(&ticket.token) && !ticket.is_stale()
        });
        if !live {
            trace!(job = ticket.job, "stale tick ignored");
            return TickOutcome::Stale;
        }
        if self.advance(now) {
            TickOutcome::Animating
        } else {
            TickOutcome::Finished
        }
    }

    /// Updates the screen size.
    ///
    /// The layout and the view are kept; only the layout-to-screen mapping
    /// changes. An in-flight animation keeps its target.
    pub fn set_screen_size(&mut self, size: ScreenSize) {
        if size == self.size {
            return;
        }
        debug!(width = size.width, height = size.height, "screen resized");
        self.size = size;
        self.bump_revision();
    }

    /// Replaces the tree, cancels any animation, and frames the new root.
    pub fn reload(&mut self, tree: PackedTree) {
        self.cancel_job();
        self.tree = tree;
        self.focus = self.tree.root();
        self.view = self.fit_view(self.focus);
        self.bump_revision();
        debug!(nodes = self.tree.len(), "tree reloaded");
    }

    /// Visible nodes under the current view, in pre-order, root included.
    #[must_use]
    pub fn visible(&self, cull: &CullConfig) -> Vec<&PositionedCircle> {
        visible_in_tree(&self.tree, self.tree.root(), &self.view, self.size, cull)
    }

    /// Builds the render list for the current view.
    ///
    /// The root is not drawn. `hovered` marks one node for highlighting.
    #[must_use]
    pub fn frame(&self, cull: &CullConfig, hovered: Option<NodeId>) -> Vec<RenderItem> {
        build_frame(&self.tree, &self.view, self.size, self.focus, cull, hovered)
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn debug_info(&self) -> NavigatorDebugInfo {
        NavigatorDebugInfo {
            view: self.view,
            screen_size: self.size,
            zoom: self.view.zoom(self.size.width),
            focus: self.focus,
            focus_depth: self.tree.get(self.focus).depth(),
            phase: self.phase(),
            job: self.job.as_ref().map(AnimationJob::id),
            target_view: self.job.as_ref().map(AnimationJob::target_view),
            revision: self.revision,
        }
    }

    /// Drops the in-flight job and flags its token; returns its id.
    fn cancel_job(&mut self) -> Option<u64> {
        let job = self.job.take()?;
        job.token().cancel();
        Some(job.id())
    }
}

#[cfg(test)]
mod tests {
    use zoompack_layout::{HierarchyNode, PackConfig, layout};

    use super::*;

    fn navigator() -> Navigator {
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
        let tree = layout(&data, 600.0, 400.0, &PackConfig::default()).unwrap();
        Navigator::new(tree, ScreenSize::new(600.0, 400.0))
    }

    #[test]
    fn starts_idle_on_the_root() {
        let nav = navigator();
        assert_eq!(nav.focus(), nav.tree().root());
        assert_eq!(nav.phase(), NavPhase::Idle);
        assert_eq!(nav.view(), nav.fit_view(nav.tree().root()));
        assert_eq!(nav.revision(), 0);
    }

    #[test]
    fn advance_when_idle_is_a_no_op() {
        let mut nav = navigator();
        let before = nav.view();
        assert!(!nav.advance(1_000.0));
        assert_eq!(nav.view(), before);
        assert_eq!(nav.revision(), 0);
    }

    #[test]
    fn debug_info_reports_the_job() {
        let mut nav = navigator();
        let b = nav.tree().nodes()[2].id();
        let ticket = nav.request_zoom(b, 0.0).unwrap();
        let info = nav.debug_info();
        assert_eq!(info.phase, NavPhase::Animating);
        assert_eq!(info.job, Some(ticket.job()));
        assert_eq!(info.target_view, Some(nav.fit_view(b)));
        assert_eq!(info.focus, b);
        assert_eq!(info.focus_depth, 1);

        assert_eq!(nav.tick(&ticket, 10_000.0), TickOutcome::Finished);
        let info = nav.debug_info();
        assert_eq!(info.phase, NavPhase::Idle);
        assert_eq!(info.job, None);
        assert_eq!(info.view, nav.fit_view(b));
    }

    #[test]
    fn resize_keeps_the_view() {
        let mut nav = navigator();
        let view = nav.view();
        nav.set_screen_size(ScreenSize::new(600.0, 400.0));
        assert_eq!(nav.revision(), 0, "same size is not a change");
        nav.set_screen_size(ScreenSize::new(300.0, 200.0));
        assert_eq!(nav.view(), view);
        assert_eq!(nav.revision(), 1);
    }
}
