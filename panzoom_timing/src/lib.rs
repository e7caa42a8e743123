// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panzoom_timing --heading-base-level=0

//! Panzoom Timing: animation primitives driven by a host clock.
//!
//! - [`Easing`] and [`CubicBezier`]: CSS-compatible timing curves.
//! - [`Tween`]: eased interpolation of `f64`, [`kurbo::Vec2`] or
//!   [`kurbo::Point`] values.
//! - [`AnimationSlot`]: holds one running animation; starting a new one
//!   replaces the old.
//! - [`Kinetic`]: velocity tracking during a pan and exponential coasting
//!   after release.
//!
//! Nothing here reads a clock. Callers pass millisecond timestamps to every
//! sampling method, typically the timestamp of the current display frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use panzoom_timing::{AnimationSlot, Tween, TweenStep};
//!
//! let mut zoom = AnimationSlot::default();
//! zoom.replace(Tween::new(1.0, 2.0));
//!
//! let mut now = 1_000;
//! loop {
//!     let Some(tween) = zoom.get_mut() else { break };
//!     match tween.sample(now) {
//!         TweenStep::Running(scale) => assert!((1.0..2.0).contains(&scale)),
//!         TweenStep::Finished(scale) => {
//!             assert_eq!(scale, 2.0);
//!             zoom.cancel();
//!         }
//!     }
//!     now += 16;
//! }
//! ```

mod easing;
mod kinetic;
mod tween;

pub use easing::{CubicBezier, Easing};
pub use kinetic::{Kinetic, KineticSettings, SAMPLE_INTERVAL_MS, TIME_CONSTANT_MS};
pub use tween::{AnimationSlot, DEFAULT_DURATION_MS, Interpolate, Tween, TweenStep};
