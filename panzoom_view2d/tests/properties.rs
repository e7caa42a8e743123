// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Algebraic properties of the zoom and containment math.

use kurbo::{Point, Rect};
use panzoom_view2d::{Bounds, PanZoomView, Scene, Transform, ZoomLimits};
use proptest::prelude::*;

fn scene() -> Scene {
    Scene::new(
        Rect::new(0.0, 0.0, 400.0, 300.0),
        Rect::new(0.0, 0.0, 200.0, 150.0),
    )
}

proptest! {
    /// Whatever the ratio, the scale never leaves the limits.
    #[test]
    fn zoom_keeps_scale_within_limits(
        ratios in proptest::collection::vec(0.01f64..100.0, 1..20),
        fx in -500.0f64..500.0,
        fy in -500.0f64..500.0,
    ) {
        let limits = ZoomLimits::new(0.25, 8.0).unwrap();
        let mut view = PanZoomView::default();
        view.set_limits(limits);
        for ratio in ratios {
            view.zoom_by_ratio(Point::new(fx, fy), ratio, &scene()).unwrap();
            let scale = view.transform().scale;
            prop_assert!(limits.contains(scale), "scale {} escaped {:?}", scale, limits);
        }
    }

    /// Once a limit is reached, pushing further changes nothing.
    #[test]
    fn pushing_past_the_limit_is_a_no_op(push in 1.0001f64..50.0, fx in 0.0f64..400.0) {
        let mut view = PanZoomView::default();
        view.set_limits(ZoomLimits::new(0.5, 3.0).unwrap());
        view.zoom_by_ratio(Point::new(fx, 10.0), 1000.0, &scene()).unwrap();
        let at_limit = view.transform();
        prop_assert_eq!(at_limit.scale, 3.0);

        let changed = view.zoom_by_ratio(Point::new(fx, 10.0), push, &scene()).unwrap();
        prop_assert!(!changed, "zoom past the limit reported a change");
        prop_assert_eq!(view.transform(), at_limit);
    }

    /// Zooming by `r` then `1/r` about the same point restores the transform.
    #[test]
    fn zoom_round_trip_restores_transform(
        x in -300.0f64..300.0,
        y in -300.0f64..300.0,
        scale in 0.1f64..10.0,
        ratio in 0.2f64..5.0,
        fx in -200.0f64..600.0,
        fy in -200.0f64..600.0,
    ) {
        let start = Transform::new(x, y, scale);
        let mut view = PanZoomView::new(start);
        let focal = Point::new(fx, fy);

        view.zoom_by_ratio(focal, ratio, &scene()).unwrap();
        view.zoom_by_ratio(focal, 1.0 / ratio, &scene()).unwrap();

        let end = view.transform();
        prop_assert!((end.x - start.x).abs() < 1e-6, "x {} vs {}", end.x, start.x);
        prop_assert!((end.y - start.y).abs() < 1e-6, "y {} vs {}", end.y, start.y);
        prop_assert!((end.scale - start.scale).abs() < 1e-9, "scale {} vs {}", end.scale, start.scale);
    }

    /// With container bounds, content never fully leaves the padded owner.
    #[test]
    fn moves_never_leave_container_bounds(
        moves in proptest::collection::vec((-2000.0f64..2000.0, -2000.0f64..2000.0), 1..30),
        scale in 0.2f64..5.0,
    ) {
        let scene = scene();
        let mut view = PanZoomView::new(Transform::new(0.0, 0.0, scale));
        view.set_bounds(Bounds::Container);
        let allowed = view.bounding_box(&scene).unwrap();

        for (x, y) in moves {
            view.move_to(x, y, &scene);
            let client = view.client_rect(&scene);
            prop_assert!(client.x1 >= allowed.x0 - 1e-9, "content left of bounds: {:?}", client);
            prop_assert!(client.x0 <= allowed.x1 + 1e-9, "content right of bounds: {:?}", client);
            prop_assert!(client.y1 >= allowed.y0 - 1e-9, "content above bounds: {:?}", client);
            prop_assert!(client.y0 <= allowed.y1 + 1e-9, "content below bounds: {:?}", client);
        }
    }
}
