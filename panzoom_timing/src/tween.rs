// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-clocked tweens and single-occupancy animation slots.

use kurbo::{Point, Vec2};

use crate::easing::Easing;

/// Default tween length in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 400;

/// Values a [`Tween`] can interpolate.
pub trait Interpolate: Copy {
    /// Value at progress `t` between `self` (t = 0) and `to` (t = 1).
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Vec2 {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::lerp(self, to, t)
    }
}

impl Interpolate for Point {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::lerp(self, to, t)
    }
}

/// Result of sampling a tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenStep<T> {
    /// Intermediate value; more frames follow.
    Running(T),
    /// Final value; the tween is over.
    Finished(T),
}

impl<T> TweenStep<T> {
    /// The sampled value, whichever state it came from.
    pub fn value(self) -> T {
        match self {
            Self::Running(v) | Self::Finished(v) => v,
        }
    }

    /// Returns `true` for [`TweenStep::Finished`].
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Eased interpolation between two values over a fixed duration.
///
/// The clock starts on the first [`Tween::sample`], so a tween built during
/// an input event begins moving on the following frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: u64,
    easing: Easing,
    started_at: Option<u64>,
}

impl<T: Interpolate> Tween<T> {
    /// A tween with the default duration and easing.
    pub fn new(from: T, to: T) -> Self {
        Self {
            from,
            to,
            duration: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            started_at: None,
        }
    }

    /// Replaces the duration (ms).
    #[must_use]
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// Replaces the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Samples the tween at `now` (ms).
    pub fn sample(&mut self, now: u64) -> TweenStep<T> {
        let start = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(start);
        if elapsed >= self.duration {
            return TweenStep::Finished(self.to);
        }
        let t = elapsed as f64 / self.duration as f64;
        TweenStep::Running(self.from.lerp(self.to, self.easing.apply(t)))
    }
}

/// Holds at most one running animation; starting another replaces it.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSlot<A> {
    current: Option<A>,
}

impl<A> Default for AnimationSlot<A> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<A> AnimationSlot<A> {
    /// Installs `animation`, returning the one it replaced.
    pub fn replace(&mut self, animation: A) -> Option<A> {
        self.current.replace(animation)
    }

    /// Cancels the running animation. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Returns `true` while an animation occupies the slot.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Mutable access to the running animation.
    pub fn get_mut(&mut self) -> Option<&mut A> {
        self.current.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_first_sample() {
        let mut tween = Tween::new(0.0, 10.0).with_easing(Easing::Linear);
        assert_eq!(tween.sample(5_000), TweenStep::Running(0.0));
        assert_eq!(tween.sample(5_100), TweenStep::Running(2.5));
        assert_eq!(tween.sample(5_400), TweenStep::Finished(10.0));
        assert_eq!(tween.sample(9_999), TweenStep::Finished(10.0));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(3.0, 4.0)).with_duration(0);
        let step = tween.sample(10);
        assert!(step.is_finished());
        assert_eq!(step.value(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn eased_values_stay_between_endpoints() {
        let mut tween = Tween::new(1.0, 3.0);
        tween.sample(0);
        for now in (0..400).step_by(25) {
            let v = tween.sample(now).value();
            assert!((1.0..=3.0).contains(&v), "value {v} at {now}");
        }
    }

    #[test]
    fn slot_replaces_and_cancels() {
        let mut slot = AnimationSlot::default();
        assert!(!slot.is_active());
        assert_eq!(slot.replace(1), None);
        assert_eq!(slot.replace(2), Some(1));
        assert_eq!(slot.get_mut(), Some(&mut 2));
        assert!(slot.cancel());
        assert!(!slot.cancel());
        assert!(!slot.is_active());
    }
}
