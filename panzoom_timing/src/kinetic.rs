// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinetic deceleration after a pan is released.
//!
//! While a pan is in progress the owner feeds the current translation to
//! [`Kinetic::track`] on every frame; a velocity estimate is updated at most
//! once per [`SAMPLE_INTERVAL_MS`]. On release, [`Kinetic::stop`] turns the
//! velocity into a coast target and [`Kinetic::step`] yields the decaying
//! positions towards it.

use kurbo::{Point, Vec2};

/// Minimum spacing between velocity samples (ms).
pub const SAMPLE_INTERVAL_MS: u64 = 100;

/// Exponential decay constant of the coast (ms).
pub const TIME_CONSTANT_MS: f64 = 342.0;

/// Offset magnitude (px) below which an axis stops coasting.
const REST_THRESHOLD: f64 = 0.5;

/// Tuning for kinetic deceleration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KineticSettings {
    /// Axes slower than this (px/s) do not coast.
    pub min_velocity: f64,
    /// Fraction of the release velocity turned into coast distance.
    pub amplitude: f64,
}

impl Default for KineticSettings {
    fn default() -> Self {
        Self {
            min_velocity: 5.0,
            amplitude: 0.25,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tracker {
    last_point: Point,
    last_sample: u64,
    velocity: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Coast {
    started_at: u64,
    amplitude: Vec2,
    target: Point,
}

/// Velocity tracker and post-release coast.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Kinetic {
    settings: KineticSettings,
    tracker: Option<Tracker>,
    coast: Option<Coast>,
}

impl Kinetic {
    /// Creates an idle kinetic scroller.
    #[must_use]
    pub fn new(settings: KineticSettings) -> Self {
        Self {
            settings,
            tracker: None,
            coast: None,
        }
    }

    /// Begins tracking from `point`, abandoning any coast in progress.
    pub fn start(&mut self, now: u64, point: Point) {
        self.coast = None;
        self.tracker = Some(Tracker {
            last_point: point,
            last_sample: now,
            velocity: Vec2::ZERO,
        });
    }

    /// Feeds the current position. Samples velocity once per interval.
    pub fn track(&mut self, now: u64, point: Point) {
        let Some(tracker) = self.tracker.as_mut() else {
            return;
        };
        let elapsed = now.saturating_sub(tracker.last_sample);
        if elapsed < SAMPLE_INTERVAL_MS {
            return;
        }
        let dt = 1000.0 / (1.0 + elapsed as f64);
        let delta = point - tracker.last_point;
        tracker.velocity = delta * (0.8 * dt) + tracker.velocity * 0.2;
        tracker.last_point = point;
        tracker.last_sample = now;
    }

    /// Ends tracking at `point` and starts coasting if fast enough.
    ///
    /// Returns `true` when a coast began.
    pub fn stop(&mut self, now: u64, point: Point) -> bool {
        self.track(now, point);
        let Some(tracker) = self.tracker.take() else {
            return false;
        };
        let amplitude = Vec2::new(
            self.axis_amplitude(tracker.velocity.x),
            self.axis_amplitude(tracker.velocity.y),
        );
        if amplitude == Vec2::ZERO {
            return false;
        }
        tracing::trace!(?amplitude, "kinetic coast");
        self.coast = Some(Coast {
            started_at: now,
            amplitude,
            target: point + amplitude,
        });
        true
    }

    fn axis_amplitude(&self, velocity: f64) -> f64 {
        if velocity.abs() > self.settings.min_velocity {
            self.settings.amplitude * velocity
        } else {
            0.0
        }
    }

    /// Next coast position at `now`, or `None` once every axis has settled.
    pub fn step(&mut self, now: u64) -> Option<Point> {
        let coast = self.coast.as_mut()?;
        let elapsed = now.saturating_sub(coast.started_at) as f64;
        let decay = (-elapsed / TIME_CONSTANT_MS).exp();

        let mut offset = -coast.amplitude * decay;
        if offset.x.abs() <= REST_THRESHOLD {
            offset.x = 0.0;
            coast.amplitude.x = 0.0;
        }
        if offset.y.abs() <= REST_THRESHOLD {
            offset.y = 0.0;
            coast.amplitude.y = 0.0;
        }
        if offset == Vec2::ZERO {
            self.coast = None;
            return None;
        }
        Some(coast.target + offset)
    }

    /// Stops tracking and coasting.
    pub fn cancel(&mut self) {
        self.tracker = None;
        self.coast = None;
    }

    /// Returns `true` between [`Kinetic::start`] and [`Kinetic::stop`].
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_some()
    }

    /// Returns `true` while tracking or coasting.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tracker.is_some() || self.coast.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    fn fling(kinetic: &mut Kinetic) {
        kinetic.start(0, Point::ZERO);
        kinetic.track(50, Point::new(20.0, 0.0));
        kinetic.track(100, Point::new(40.0, 0.0));
        kinetic.track(200, Point::new(80.0, 0.0));
    }

    #[test]
    fn samples_are_rate_limited() {
        let mut kinetic = Kinetic::default();
        kinetic.start(0, Point::ZERO);
        kinetic.track(99, Point::new(50.0, 0.0));
        // Too early: nothing sampled, the release is too slow to coast.
        assert!(!kinetic.stop(99, Point::new(50.0, 0.0)));
        assert!(!kinetic.is_active());
    }

    #[test]
    fn fast_release_coasts_towards_target() {
        let mut kinetic = Kinetic::new(KineticSettings::default());
        fling(&mut kinetic);
        assert!(kinetic.is_tracking());
        assert!(kinetic.stop(200, Point::new(80.0, 0.0)));
        assert!(!kinetic.is_tracking());
        assert!(kinetic.is_active());

        let first = kinetic.step(216).unwrap();
        let later = kinetic.step(500).unwrap();
        assert!(first.x > 80.0, "coast moves forward: {first:?}");
        assert!(later.x > first.x, "coast keeps moving: {later:?}");
        // The slow axis does not move.
        assert_eq!(first.y, 0.0);
    }

    #[test]
    fn coast_settles() {
        let mut kinetic = Kinetic::default();
        fling(&mut kinetic);
        kinetic.stop(200, Point::new(80.0, 0.0));

        let mut now = 200;
        while kinetic.step(now).is_some() {
            now += 16;
            assert!(now < 10_000, "coast never settled");
        }
        assert!(!kinetic.is_active());
        assert_eq!(kinetic.step(now + 16), None);
    }

    #[test]
    fn slow_release_does_not_coast() {
        let mut kinetic = Kinetic::default();
        kinetic.start(0, Point::ZERO);
        kinetic.track(100, Point::new(0.1, 0.1));
        assert!(!kinetic.stop(100, Point::new(0.1, 0.1)));
    }

    #[test]
    fn restart_and_cancel_drop_the_coast() {
        let mut kinetic = Kinetic::default();
        fling(&mut kinetic);
        kinetic.stop(200, Point::new(80.0, 0.0));

        kinetic.start(300, Point::new(90.0, 0.0));
        assert!(kinetic.is_tracking());
        assert_eq!(kinetic.step(316), None);

        kinetic.cancel();
        assert!(!kinetic.is_active());
    }
}
