// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred single-click delivery.
//!
//! A click on a pan/zoom surface is ambiguous until the double-click window
//! has passed. [`ClickState`] holds the pending click with its deadline. The
//! owner polls it on each frame and delivers the payload once the deadline is
//! reached, unless a double click or a new gesture got there first.

/// A press/release pair shorter than this may count as a click (ms).
pub const CLICK_MAX_DURATION_MS: u64 = 200;

/// A press/release pair that moved further than this is a drag, not a click.
pub const CLICK_SLOP: f64 = 5.0;

/// Two taps closer together than this form a double tap (ms).
///
/// A pending click fires once this much time has passed since release.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Pending-click state machine.
///
/// `T` is whatever the caller wants delivered with the click, usually the
/// originating pointer event.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ClickState<T> {
    /// Nothing scheduled.
    #[default]
    Idle,
    /// A click waits for its deadline.
    Pending {
        /// Timestamp (ms) at or after which the click fires.
        deadline: u64,
        /// Data delivered with the click.
        payload: T,
    },
    /// A double click replaced the pending click; nothing will fire.
    Superseded,
}

impl<T> ClickState<T> {
    /// Schedules a click, replacing any click that was already pending.
    pub fn schedule(&mut self, deadline: u64, payload: T) {
        *self = Self::Pending { deadline, payload };
    }

    /// Drops a pending click without recording why.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Marks a pending click as replaced by a double click.
    ///
    /// Returns `true` if a click was actually pending.
    pub fn supersede(&mut self) -> bool {
        let was_pending = self.is_pending();
        *self = Self::Superseded;
        was_pending
    }

    /// Returns the payload if the deadline has been reached at `now`.
    ///
    /// A fired click leaves the machine idle, so each click is delivered once.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match self {
            Self::Pending { deadline, .. } if now >= *deadline => {
                match core::mem::replace(self, Self::Idle) {
                    Self::Pending { payload, .. } => Some(payload),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Returns `true` while a click waits for its deadline.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Deadline of the pending click, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        match self {
            Self::Pending { deadline, .. } => Some(*deadline),
            _ => None,
        }
    }
}
