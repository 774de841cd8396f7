// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Circle, Point, Rect, Vec2};

/// Smallest extent used in place of a non-positive scale reference or screen size.
///
/// Degenerate viewports are a caller bug; clamping keeps the transform finite
/// instead of producing infinities or NaNs mid-animation.
pub const MIN_EXTENT: f64 = 1e-9;

/// Current pan/zoom descriptor in layout space.
///
/// `center` is the layout-space point shown at the center of the screen.
/// `scale_reference` is the layout-space extent that spans the screen width,
/// so the effective zoom factor is `screen_width / scale_reference`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    /// Layout-space point at the screen center.
    pub center: Point,
    /// Layout-space extent mapped to the screen width.
    pub scale_reference: f64,
}

impl ViewState {
    /// Creates a view centered on `center` with the given scale reference.
    #[must_use]
    pub fn new(center: Point, scale_reference: f64) -> Self {
        Self {
            center,
            scale_reference,
        }
    }

    /// Returns the view that centers `circle` and fits its diameter, scaled by
    /// `padding`, into the smaller screen dimension.
    ///
    /// A `padding` of `1.1` leaves a 10% margin around the circle.
    #[must_use]
    pub fn fit_circle(circle: Circle, size: ScreenSize, padding: f64) -> Self {
        let width = size.width.max(MIN_EXTENT);
        let height = size.height.max(MIN_EXTENT);
        let span = 2.0 * circle.radius * padding;
        Self {
            center: circle.center,
            scale_reference: span * width / width.min(height),
        }
    }

    /// Effective zoom factor: screen pixels per layout unit.
    #[must_use]
    pub fn zoom(&self, screen_width: f64) -> f64 {
        screen_width.max(MIN_EXTENT) / self.scale_reference.max(MIN_EXTENT)
    }

    /// Layout units per screen pixel; the inverse of [`ViewState::zoom`].
    #[must_use]
    pub fn layout_units_per_pixel(&self, screen_width: f64) -> f64 {
        1.0 / self.zoom(screen_width)
    }

    /// Interpolates center x, center y and scale reference independently.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `target` up to rounding.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            center: Point::new(
                lerp(self.center.x, target.center.x, t),
                lerp(self.center.y, target.center.y, t),
            ),
            scale_reference: lerp(self.scale_reference, target.scale_reference, t),
        }
    }

    /// Layout-space rectangle currently covered by the screen.
    #[must_use]
    pub fn visible_layout_rect(&self, size: ScreenSize) -> Rect {
        let screen = size.screen_rect();
        let p0 = inverse_transform(Point::new(screen.x0, screen.y0), self, size.width);
        let p1 = inverse_transform(Point::new(screen.x1, screen.y1), self, size.width);
        Rect::from_points(p0, p1)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Screen extent in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ScreenSize {
    /// Creates a screen size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The screen rectangle in center-origin screen space: `[-w/2, w/2] × [-h/2, h/2]`.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        let hw = self.width.max(0.0) * 0.5;
        let hh = self.height.max(0.0) * 0.5;
        Rect::new(-hw, -hh, hw, hh)
    }

    /// Converts a center-origin screen point into top-left-origin pixels.
    #[must_use]
    pub fn center_to_top_left(&self, point: Point) -> Point {
        point + self.half_extent()
    }

    /// Converts a top-left-origin pixel position into center-origin screen space.
    #[must_use]
    pub fn top_left_to_center(&self, point: Point) -> Point {
        point - self.half_extent()
    }

    fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Maps a layout-space circle to screen space.
///
/// With `k = screen_width / view.scale_reference`:
/// `x' = (x - cx) * k`, `y' = (y - cy) * k`, `r' = r * k`. The screen origin
/// is the viewport center. A negative output radius (floating error on tiny
/// circles) is clamped to zero.
#[must_use]
#[inline]
pub fn transform(circle: Circle, view: &ViewState, screen_width: f64) -> Circle {
    let k = view.zoom(screen_width);
    Circle::new(
        Point::new(
            (circle.center.x - view.center.x) * k,
            (circle.center.y - view.center.y) * k,
        ),
        (circle.radius * k).max(0.0),
    )
}

/// Maps a center-origin screen point back to layout space.
#[must_use]
#[inline]
pub fn inverse_transform(point: Point, view: &ViewState, screen_width: f64) -> Point {
    let k = view.zoom(screen_width);
    Point::new(view.center.x + point.x / k, view.center.y + point.y / k)
}
