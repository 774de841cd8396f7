// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves applied to animation progress.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with `f(0) = 0` and `f(1) = 1`.
//! Inputs outside the unit interval are clamped first.

/// Cubic ease-in-out: slow start, fast middle, slow finish.
#[inline]
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Cubic ease-out: fast start, slow finish.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Linear interpolation (no easing).
#[inline]
#[must_use]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Selectable easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// See [`linear`].
    Linear,
    /// See [`ease_out_cubic`].
    EaseOutCubic,
    /// See [`ease_in_out_cubic`].
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Applies the curve to `t`.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => linear(t),
            Self::EaseOutCubic => ease_out_cubic(t),
            Self::EaseInOutCubic => ease_in_out_cubic(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
            assert_eq!(easing.apply(-3.0), 0.0, "{easing:?} below range");
            assert_eq!(easing.apply(7.0), 1.0, "{easing:?} above range");
        }
    }

    #[test]
    fn in_out_cubic_is_symmetric_around_midpoint() {
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(0.25), 0.0625);
        assert_eq!(ease_in_out_cubic(0.75), 0.9375);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = easing.apply(f64::from(i) / 100.0);
                assert!(v >= prev, "{easing:?} decreases at step {i}");
                prev = v;
            }
        }
    }
}
