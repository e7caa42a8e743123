// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: per-move deltas plus the displacement from where the drag began.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] with the press position (mouse down or first finger).
//! 2) On each move call [`DragState::update`] and apply the returned delta as a pan.
//! 3) When fingers are added or lifted, [`DragState::reseat`] moves the reference
//!    point without producing a delta, so the content does not jump.
//! 4) On release, [`DragState::displacement`] tells a click apart from a pan.
//! 5) [`DragState::end`] resets everything.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use panzoom_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(drag.update(Point::new(14.0, 23.0)), Some(Vec2::new(4.0, 3.0)));
//! assert_eq!(drag.displacement(), Some(5.0));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks the pointer positions of one drag session.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Where the drag began; `None` when idle.
    pub origin: Option<Point>,
    /// Last position a delta was measured from.
    pub last: Option<Point>,
}

impl DragState {
    /// Begins a new drag at `pos`, discarding any previous session.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Records a new position and returns the delta since the previous one.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.origin?;
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Moves the reference position to `pos` without reporting a delta.
    ///
    /// Does nothing when no drag is active.
    pub fn reseat(&mut self, pos: Point) {
        if self.origin.is_some() {
            self.last = Some(pos);
        }
    }

    /// Vector from the drag origin to the last recorded position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        match (self.origin, self.last) {
            (Some(origin), Some(last)) => Some(last - origin),
            _ => None,
        }
    }

    /// Distance between the drag origin and the last recorded position.
    #[must_use]
    pub fn displacement(&self) -> Option<f64> {
        self.total_offset().map(Vec2::hypot)
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        self.origin = None;
        self.last = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}
