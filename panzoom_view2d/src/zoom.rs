// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

/// Largest scale change a single wheel or key tick may produce.
pub const MAX_TICK_CHANGE: f64 = 0.25;

/// Inclusive range of allowed scale values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl ZoomLimits {
    /// Creates a range, returning `None` when either end is NaN or `min > max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Option<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return None;
        }
        Some(Self { min, max })
    }

    /// Returns `true` when `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }

    /// Clamps a requested `ratio` so that `scale * ratio` stays in range.
    ///
    /// Returns the ratio to apply together with the resulting scale, or
    /// `None` when `scale` already sits on the limit the ratio pushes towards.
    /// The ratio itself is clamped (not only the result) so that the focal
    /// point math stays consistent with the scale that is finally applied.
    #[must_use]
    pub fn clamp_ratio(&self, scale: f64, ratio: f64) -> Option<ClampedRatio> {
        let requested = scale * ratio;
        let mut clamped = ClampedRatio {
            ratio,
            scale: requested,
        };
        if requested < self.min {
            if scale == self.min {
                return None;
            }
            clamped = ClampedRatio {
                ratio: self.min / scale,
                scale: self.min,
            };
        }
        if requested > self.max {
            if scale == self.max {
                return None;
            }
            clamped = ClampedRatio {
                ratio: self.max / scale,
                scale: self.max,
            };
        }
        Some(clamped)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

/// Result of [`ZoomLimits::clamp_ratio`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampedRatio {
    /// Ratio to apply to the translation around the focal point.
    pub ratio: f64,
    /// Scale after applying the ratio; exactly the limit when clamped.
    pub scale: f64,
}

/// Maps a signed wheel/key delta to a scale multiplier.
///
/// Positive deltas (scrolling down) shrink, negative deltas grow, and a
/// single tick never changes the scale by more than [`MAX_TICK_CHANGE`].
#[must_use]
pub fn scale_multiplier(delta: f64, speed: f64) -> f64 {
    let sign = if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    };
    let adjusted = (speed * delta / 128.0).abs().min(MAX_TICK_CHANGE);
    1.0 - sign * adjusted
}

/// Converts a point from owner-relative screen units into the model space.
///
/// Without a coordinate matrix the spaces coincide. Otherwise the matrix's
/// scale (`a`, `d`) and offset (`e`, `f`) terms are applied.
#[must_use]
pub fn to_model_space(point: Point, screen_ctm: Option<Affine>) -> Point {
    match screen_ctm {
        Some(ctm) => {
            let [a, _, _, d, e, f] = ctm.as_coeffs();
            Point::new(point.x * a - e, point.y * d - f)
        }
        None => point,
    }
}
