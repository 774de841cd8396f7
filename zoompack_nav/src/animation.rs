// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom animation jobs and the tickets that drive them.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use zoompack_view::ViewState;

use crate::easing::Easing;

/// Shared flag telling a frame loop that its animation no longer owns the view.
///
/// The flag is raised when a newer zoom preempts the job, when the navigator
/// reloads or snaps, and when the job completes. Once raised it never clears.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Returns `true` if both handles share the same flag.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Handle returned when a zoom animation is armed.
///
/// Pass it back to [`Navigator::tick`](crate::Navigator::tick) from the frame
/// loop. A ticket whose job has been superseded or has finished is stale and
/// its ticks are ignored.
#[derive(Clone, Debug)]
pub struct TickTicket {
    pub(crate) job: u64,
    pub(crate) token: CancelToken,
}

impl TickTicket {
    /// Identifier of the job this ticket belongs to.
    #[must_use]
    pub fn job(&self) -> u64 {
        self.job
    }

    /// Returns `true` if the job behind this ticket no longer drives the view.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The cancellation flag shared with the job.
    #[must_use]
    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

/// One in-flight transition from a start view to a target view.
#[derive(Clone, Debug)]
pub struct AnimationJob {
    id: u64,
    start_time: f64,
    start_view: ViewState,
    target_view: ViewState,
    duration: f64,
    easing: Easing,
    token: CancelToken,
}

impl AnimationJob {
    pub(crate) fn new(
        id: u64,
        start_time: f64,
        start_view: ViewState,
        target_view: ViewState,
        duration: f64,
        easing: Easing,
    ) -> Self {
        Self {
            id,
            start_time,
            start_view,
            target_view,
            duration,
            easing,
            token: CancelToken::new(),
        }
    }

    /// Job identifier, unique per navigator.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Time at which the job was armed.
    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// View at the moment the job was armed.
    #[must_use]
    pub fn start_view(&self) -> ViewState {
        self.start_view
    }

    /// View the job converges to.
    #[must_use]
    pub fn target_view(&self) -> ViewState {
        self.target_view
    }

    /// Length of the transition, in the same unit as the timestamps.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Easing curve applied to the raw progress.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The job's cancellation flag.
    #[must_use]
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub(crate) fn ticket(&self) -> TickTicket {
        TickTicket {
            job: self.id,
            token: self.token.clone(),
        }
    }

    /// Raw progress at `now`, clamped to `[0, 1]`.
    ///
    /// Timestamps before the start time (clock skew) count as zero progress.
    #[must_use]
    pub fn progress(&self, now: f64) -> f64 {
        let t = (now - self.start_time) / self.duration;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }

    /// Interpolated view at `now`.
    ///
    /// Returns the target bit-for-bit once progress reaches one.
    #[must_use]
    pub fn sample(&self, now: f64) -> ViewState {
        let t = self.progress(now);
        if t >= 1.0 {
            self.target_view
        } else {
            self.start_view.lerp(self.target_view, self.easing.apply(t))
        }
    }
}
