// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch session classification: double tap, click candidate, or neither.
//!
//! [`TapState`] remembers when the current touch session started and when the
//! previous one ended. When the last finger lifts, [`TapState::on_all_released`]
//! decides what the session was.

use kurbo::Vec2;

use crate::click::{CLICK_MAX_DURATION_MS, CLICK_SLOP, DOUBLE_TAP_WINDOW_MS};

/// What a finished touch session amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// The session ended within the double-tap window of the previous one.
    DoubleTap,
    /// A short single-finger touch that barely moved.
    ClickCandidate,
    /// A pan, a pinch, or a long press.
    None,
}

/// Timing and movement memory for touch sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TapState {
    last_start: Option<u64>,
    last_end: Option<u64>,
    single_offset: Option<Vec2>,
}

impl TapState {
    /// Records the start of a touch session.
    ///
    /// `single_offset` is the finger's displacement tracker for one-finger
    /// sessions; pass `None` for multi-touch so the session can never be a
    /// click candidate.
    pub fn on_touch_start(&mut self, now: u64, single_offset: Option<Vec2>) {
        self.last_start = Some(now);
        self.single_offset = single_offset;
    }

    /// Updates the one-finger displacement seen so far.
    pub fn on_single_move(&mut self, offset: Vec2) {
        if self.single_offset.is_some() {
            self.single_offset = Some(offset);
        }
    }

    /// Marks the session as multi-touch.
    pub fn on_multi_touch(&mut self) {
        self.single_offset = None;
    }

    /// Classifies the session that just ended at `now`.
    pub fn on_all_released(&mut self, now: u64) -> TapOutcome {
        let previous_end = self.last_end.replace(now);

        if let Some(prev) = previous_end
            && now.saturating_sub(prev) < DOUBLE_TAP_WINDOW_MS
        {
            return TapOutcome::DoubleTap;
        }

        let short = self
            .last_start
            .is_some_and(|start| now.saturating_sub(start) < CLICK_MAX_DURATION_MS);
        let still = self
            .single_offset
            .is_some_and(|offset| offset.hypot() <= CLICK_SLOP);
        if short && still {
            TapOutcome::ClickCandidate
        } else {
            TapOutcome::None
        }
    }

    /// Forgets everything, including the previous session's end time.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
