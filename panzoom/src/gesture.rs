// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture memory of the input router.

use kurbo::Point;
use panzoom_event_state::click::ClickState;
use panzoom_event_state::drag::DragState;
use panzoom_event_state::pinch::PinchState;
use panzoom_event_state::tap::TapState;

use crate::input::ClickInput;

/// Everything the router remembers between native events.
///
/// Drag positions are in model space; pinch, tap and focal points are
/// owner-relative.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GestureSession {
    pub(crate) drag: DragState,
    pub(crate) pinch: PinchState,
    pub(crate) tap: TapState,
    pub(crate) click: ClickState<ClickInput>,
    /// `panstart` fired and `panend` has not.
    pub(crate) pan_started: bool,
    /// Two fingers touched at some point during this touch session.
    pub(crate) multi_touch: bool,
    /// Document touch listeners are attached.
    pub(crate) touch_in_progress: bool,
    /// Document mouse listeners are attached.
    pub(crate) mouse_in_progress: bool,
    /// The last mouse down, for click detection.
    pub(crate) mouse_down: Option<ClickInput>,
    /// Owner-relative position of the last one-finger touch start.
    pub(crate) last_single_offset: Option<Point>,
    /// The last one-finger touch start, for tap-to-click.
    pub(crate) touch_down: Option<ClickInput>,
}

impl GestureSession {
    /// Ends a mouse drag. Keeps the pan flag for the caller's `panend`.
    pub(crate) fn end_mouse(&mut self) {
        self.mouse_in_progress = false;
        self.drag.end();
    }

    /// Ends a touch session. Keeps the pan flag for the caller's `panend`.
    pub(crate) fn end_touch(&mut self) {
        self.touch_in_progress = false;
        self.multi_touch = false;
        self.pinch.end();
        self.drag.end();
    }

    /// Ends whatever is in flight and forgets the pending click and the
    /// previous tap.
    pub(crate) fn reset(&mut self) {
        self.end_mouse();
        self.end_touch();
        self.tap.reset();
        self.pan_started = false;
        self.mouse_down = None;
        self.touch_down = None;
        self.click.cancel();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use panzoom_event_state::tap::TapOutcome;

    use super::*;

    #[test]
    fn reset_drops_every_in_flight_gesture() {
        let mut session = GestureSession::default();
        session.tap.on_touch_start(0, Some(Vec2::ZERO));
        session.tap.on_all_released(40);
        session.drag.start(Point::new(1.0, 1.0));
        session.pinch.start(Point::ZERO, Point::new(10.0, 0.0));
        session.touch_in_progress = true;
        session.multi_touch = true;
        session.pan_started = true;
        session.click.schedule(
            300,
            ClickInput {
                client: Point::ZERO,
                time: 0,
            },
        );

        session.reset();
        assert!(!session.drag.is_dragging(), "drag ended");
        assert!(!session.pinch.is_active(), "pinch ended");
        assert!(!session.touch_in_progress, "touch listeners released");
        assert!(!session.multi_touch, "multi touch flag cleared");
        assert!(!session.pan_started, "pan flag cleared");
        assert!(!session.click.is_pending(), "click dropped");

        // The tap before the reset no longer pairs into a double tap.
        session.tap.on_touch_start(100, Some(Vec2::ZERO));
        assert_eq!(session.tap.on_all_released(140), TapOutcome::ClickCandidate);
    }
}
