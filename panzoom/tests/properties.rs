// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invariants that hold across arbitrary input sequences.

mod common;

use kurbo::Point;
use panzoom::{Bounds, PanZoomOptions, SmoothScroll, WheelInput};
use proptest::prelude::*;

use common::{deliver_frame, engine};

#[derive(Clone, Debug)]
enum Step {
    Wheel { x: f64, y: f64, delta: f64 },
    Move { dx: f64, dy: f64 },
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0.0f64..100.0, 0.0f64..100.0, -400.0f64..400.0)
            .prop_map(|(x, y, delta)| Step::Wheel { x, y, delta }),
        (-500.0f64..500.0, -500.0f64..500.0).prop_map(|(dx, dy)| Step::Move { dx, dy }),
    ]
}

fn bounded_options() -> PanZoomOptions {
    PanZoomOptions {
        bounds: Bounds::Container,
        min_zoom: 0.5,
        max_zoom: 4.0,
        smooth_scroll: SmoothScroll::Disabled,
        ..PanZoomOptions::default()
    }
}

proptest! {
    /// Wheel zoom never pushes the scale outside the configured limits.
    #[test]
    fn wheel_zoom_respects_limits(steps in proptest::collection::vec(step(), 1..40)) {
        let mut pz = engine(bounded_options());
        for (i, step) in steps.into_iter().enumerate() {
            let now = 16 * (i as u64 + 1);
            match step {
                Step::Wheel { x, y, delta } => {
                    pz.on_wheel(&WheelInput::new(Point::new(x, y), delta, now)).unwrap();
                }
                Step::Move { dx, dy } => pz.move_by(dx, dy, false),
            }
            deliver_frame(&mut pz, now);
            let scale = pz.transform().scale;
            prop_assert!((0.5..=4.0).contains(&scale), "scale {} escaped the limits", scale);
        }
    }

    /// After any pan the content still overlaps the padded container.
    #[test]
    fn pans_stay_inside_container_bounds(steps in proptest::collection::vec(step(), 1..40)) {
        let mut pz = engine(bounded_options());
        for (i, step) in steps.into_iter().enumerate() {
            let now = 16 * (i as u64 + 1);
            match step {
                Step::Wheel { x, y, delta } => {
                    pz.on_wheel(&WheelInput::new(Point::new(x, y), delta, now)).unwrap();
                }
                Step::Move { dx, dy } => {
                    pz.move_by(dx, dy, false);
                    let t = pz.transform();
                    let (left, top) = (t.x, t.y);
                    let (right, bottom) = (t.x + 100.0 * t.scale, t.y + 100.0 * t.scale);
                    prop_assert!(right >= 5.0 - 1e-9, "content left of bounds: {:?}", t);
                    prop_assert!(left <= 95.0 + 1e-9, "content right of bounds: {:?}", t);
                    prop_assert!(bottom >= 5.0 - 1e-9, "content above bounds: {:?}", t);
                    prop_assert!(top <= 95.0 + 1e-9, "content below bounds: {:?}", t);
                }
            }
            deliver_frame(&mut pz, now);
        }
    }

    /// The element always shows the model's transform once a frame ran.
    #[test]
    fn applied_style_tracks_the_model(steps in proptest::collection::vec(step(), 1..20)) {
        let mut pz = engine(PanZoomOptions {
            smooth_scroll: SmoothScroll::Disabled,
            ..PanZoomOptions::default()
        });
        for (i, step) in steps.into_iter().enumerate() {
            let now = 16 * (i as u64 + 1);
            match step {
                Step::Wheel { x, y, delta } => {
                    pz.on_wheel(&WheelInput::new(Point::new(x, y), delta, now)).unwrap();
                }
                Step::Move { dx, dy } => pz.move_by(dx, dy, false),
            }
            deliver_frame(&mut pz, now);
            let t = pz.transform();
            let expected = format!("matrix({}, 0, 0, {}, {}, {})", t.scale, t.scale, t.x, t.y);
            prop_assert_eq!(pz.element().styles.get("transform"), Some(&expected));
        }
    }
}
