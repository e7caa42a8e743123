// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panzoom_event_state --heading-base-level=0

//! Panzoom Event State: gesture session state machines for pan/zoom input.
//!
//! A pan/zoom surface needs a handful of small pieces of state that live
//! across several input events. Each module handles one of them:
//!
//! - [`drag`]: movement deltas for a mouse or one-finger pan, plus the total
//!   displacement used to tell a click from a drag.
//! - [`click`]: a deferred single click that is delivered only if no second
//!   click arrives first.
//! - [`tap`]: double-tap and click-candidate detection for touch sessions.
//! - [`pinch`]: two-finger distance tracking that yields zoom multipliers.
//!
//! None of these read a clock. Every timestamp is supplied by the caller in
//! milliseconds, which keeps the machines deterministic under test.
//!
//! ## Usage Patterns
//!
//! ### Deferred clicks
//!
//! ```rust
//! use panzoom_event_state::click::{ClickState, DOUBLE_TAP_WINDOW_MS};
//!
//! let mut click = ClickState::default();
//! click.schedule(1_000 + DOUBLE_TAP_WINDOW_MS, "single");
//!
//! assert_eq!(click.poll(1_200), None);
//! assert_eq!(click.poll(1_300), Some("single"));
//! assert_eq!(click.poll(1_400), None);
//! ```
//!
//! ### Pinch zoom
//!
//! ```rust
//! use kurbo::Point;
//! use panzoom_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.start(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
//!
//! let step = pinch.update(Point::new(0.0, 0.0), Point::new(200.0, 0.0), 1.0).unwrap();
//! assert_eq!(step.multiplier, 2.0);
//! assert_eq!(step.midpoint, Point::new(100.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod click;
pub mod drag;
pub mod pinch;
pub mod tap;
