// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth move and smooth zoom animations driven from `PanZoom::frame`.

use kurbo::{Point, Vec2};
use panzoom_timing::{AnimationSlot, Easing, Tween, TweenStep};

/// Spreads a translation over time as a series of increments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MoveAnimation {
    tween: Tween<Vec2>,
    applied: Vec2,
}

impl MoveAnimation {
    pub(crate) fn new(delta: Vec2, easing: Easing) -> Self {
        Self {
            tween: Tween::new(Vec2::ZERO, delta).with_easing(easing),
            applied: Vec2::ZERO,
        }
    }

    /// Increment to apply since the previous step, and whether this was the last.
    pub(crate) fn step(&mut self, now: u64) -> (Vec2, bool) {
        let sample = self.tween.sample(now);
        let finished = sample.is_finished();
        let value = sample.value();
        let increment = value - self.applied;
        self.applied = value;
        (increment, finished)
    }
}

/// Tweens the scale about a fixed owner-relative point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ZoomAnimation {
    tween: Tween<f64>,
    focal: Point,
}

impl ZoomAnimation {
    pub(crate) fn new(focal: Point, from: f64, to: f64, easing: Easing) -> Self {
        Self {
            tween: Tween::new(from, to).with_easing(easing),
            focal,
        }
    }

    pub(crate) fn focal(&self) -> Point {
        self.focal
    }

    pub(crate) fn step(&mut self, now: u64) -> TweenStep<f64> {
        self.tween.sample(now)
    }
}

/// One move slot and one zoom slot; starting either replaces its predecessor.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Animations {
    pub(crate) zoom: AnimationSlot<ZoomAnimation>,
    pub(crate) pan: AnimationSlot<MoveAnimation>,
}

impl Animations {
    pub(crate) fn is_active(&self) -> bool {
        self.zoom.is_active() || self.pan.is_active()
    }

    pub(crate) fn cancel_all(&mut self) {
        self.zoom.cancel();
        self.pan.cancel();
    }
}
