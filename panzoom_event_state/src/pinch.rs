// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.

use kurbo::Point;

/// One pinch update: how much to scale and about which point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Scale multiplier relative to the previous update.
    pub multiplier: f64,
    /// Midpoint between the two touches, in client coordinates.
    pub midpoint: Point,
}

/// Remembers the finger distance between pinch updates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    reference: Option<f64>,
}

impl PinchState {
    /// Starts tracking with the current pair of touches.
    pub fn start(&mut self, a: Point, b: Point) {
        self.reference = Some(a.distance(b));
    }

    /// Computes the step for a new pair of touch positions.
    ///
    /// The multiplier is `1 + (distance / previous - 1) * speed`. Returns
    /// `None` when no pinch is active or the previous distance was zero.
    pub fn update(&mut self, a: Point, b: Point, speed: f64) -> Option<PinchStep> {
        let previous = self.reference?;
        let distance = a.distance(b);
        self.reference = Some(distance);
        if previous == 0.0 {
            return None;
        }
        Some(PinchStep {
            multiplier: 1.0 + (distance / previous - 1.0) * speed,
            midpoint: a.midpoint(b),
        })
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.reference = None;
    }

    /// Returns `true` while two fingers are being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.reference.is_some()
    }
}
