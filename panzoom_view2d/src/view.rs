// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

use crate::bounds::{Bounds, DEFAULT_BOUNDS_PADDING, keep_inside};
use crate::error::GeometryError;
use crate::transform::Transform;
use crate::zoom::{ZoomLimits, to_model_space};

/// Geometry read from the host element for a single operation.
///
/// The model never caches layout: callers gather a fresh `Scene` whenever
/// an operation needs it, so container resizes are picked up immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    /// Layout rectangle of the owner container in client coordinates.
    pub owner_rect: Rect,
    /// Bounding box of the content in its own local units.
    pub content_bbox: Rect,
    /// Optional matrix mapping local units to screen pixels.
    pub screen_ctm: Option<Affine>,
}

impl Scene {
    /// Creates a scene without a coordinate matrix.
    #[must_use]
    pub fn new(owner_rect: Rect, content_bbox: Rect) -> Self {
        Self {
            owner_rect,
            content_bbox,
            screen_ctm: None,
        }
    }

    /// Converts an owner-relative point into model space.
    #[must_use]
    pub fn to_model(&self, point: Point) -> Point {
        to_model_space(point, self.screen_ctm)
    }
}

/// Pan/zoom state together with the constraints that govern it.
///
/// `PanZoomView` owns the [`Transform`] and guarantees that after every
/// completed operation the scale is inside the configured [`ZoomLimits`]
/// and, when [`Bounds`] are set, the content overlaps the allowed region.
#[derive(Clone, Debug, PartialEq)]
pub struct PanZoomView {
    transform: Transform,
    bounds: Bounds,
    bounds_padding: f64,
    limits: ZoomLimits,
}

impl PanZoomView {
    /// Creates an unbounded view with default limits `[0, +inf)`.
    #[must_use]
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            bounds: Bounds::Unbounded,
            bounds_padding: DEFAULT_BOUNDS_PADDING,
            limits: ZoomLimits::default(),
        }
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns the containment bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Sets the containment bounds. Takes effect on the next operation.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Returns the padding fraction used by [`Bounds::Container`].
    #[must_use]
    pub fn bounds_padding(&self) -> f64 {
        self.bounds_padding
    }

    /// Sets the padding fraction used by [`Bounds::Container`].
    pub fn set_bounds_padding(&mut self, padding: f64) {
        self.bounds_padding = padding;
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Sets the zoom limits.
    ///
    /// The current scale is not touched; callers decide how to bring an
    /// out-of-range scale back (see [`PanZoomView::clamped_scale`]).
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
    }

    /// Returns the current scale clamped into the limits.
    #[must_use]
    pub fn clamped_scale(&self) -> f64 {
        self.transform.scale.clamp(self.limits.min, self.limits.max)
    }

    /// Returns the allowed rectangle, or `None` when unbounded.
    #[must_use]
    pub fn bounding_box(&self, scene: &Scene) -> Option<Rect> {
        self.bounds
            .allowed_rect(scene.owner_rect.size(), self.bounds_padding)
    }

    /// Returns the content rectangle in client space.
    #[must_use]
    pub fn client_rect(&self, scene: &Scene) -> Rect {
        self.transform.client_rect(scene.content_bbox)
    }

    /// Returns `true` for the hard containment configuration: bounds set,
    /// padding of exactly `1` and a minimum zoom of exactly `1`.
    ///
    /// In this mode a zoom step always applies its scale and clamps after,
    /// instead of skipping the scale when the bounds moved the content.
    #[must_use]
    pub fn is_hard_containment(&self) -> bool {
        self.bounds.is_bounded() && self.bounds_padding == 1.0 && self.limits.min == 1.0
    }

    /// Slides the translation back inside the bounds.
    ///
    /// Returns `true` when anything moved.
    pub fn keep_inside_bounds(&mut self, scene: &Scene) -> bool {
        match self.bounding_box(scene) {
            Some(allowed) => keep_inside(&mut self.transform, scene.content_bbox, allowed),
            None => false,
        }
    }

    /// Moves the translation to `(x, y)`, then applies the bounds.
    pub fn move_to(&mut self, x: f64, y: f64, scene: &Scene) {
        self.transform.x = x;
        self.transform.y = y;
        self.keep_inside_bounds(scene);
    }

    /// Brings a scale that drifted outside the limits back to the nearest
    /// limit, keeping `focal` stationary. Used after the limits change.
    ///
    /// Returns `true` when the transform changed.
    pub fn enforce_limits(&mut self, focal: Point, scene: &Scene) -> bool {
        let scale = self.clamped_scale();
        if scale == self.transform.scale {
            return false;
        }
        let ratio = scale / self.transform.scale;
        if ratio.is_finite() && focal.x.is_finite() && focal.y.is_finite() {
            let focal = scene.to_model(focal);
            self.transform.x = focal.x - ratio * (focal.x - self.transform.x);
            self.transform.y = focal.y - ratio * (focal.y - self.transform.y);
        }
        self.transform.scale = scale;
        self.keep_inside_bounds(scene);
        true
    }

    /// Zooms by `ratio` keeping the owner-relative `focal` point stationary.
    ///
    /// Returns `Ok(false)` when the scale already sits on the limit that
    /// `ratio` pushes towards; the model is untouched in that case.
    ///
    /// When the bounds had to move the content during this step the scale
    /// change is skipped, so that snapping back and zooming never happen in
    /// the same step. Hard containment (see
    /// [`PanZoomView::is_hard_containment`]) always applies the scale.
    pub fn zoom_by_ratio(
        &mut self,
        focal: Point,
        ratio: f64,
        scene: &Scene,
    ) -> Result<bool, GeometryError> {
        if !focal.x.is_finite() || !focal.y.is_finite() || !ratio.is_finite() {
            return Err(GeometryError::NonFiniteZoom);
        }

        let Some(clamped) = self.limits.clamp_ratio(self.transform.scale, ratio) else {
            return Ok(false);
        };
        let ratio = clamped.ratio;

        let focal = scene.to_model(focal);
        self.transform.x = focal.x - ratio * (focal.x - self.transform.x);
        self.transform.y = focal.y - ratio * (focal.y - self.transform.y);

        if self.is_hard_containment() {
            self.transform.scale = clamped.scale;
            self.keep_inside_bounds(scene);
        } else if !self.keep_inside_bounds(scene) {
            self.transform.scale = clamped.scale;
        }

        Ok(true)
    }

    /// Zooms to an absolute scale about `focal`.
    pub fn zoom_abs(
        &mut self,
        focal: Point,
        scale: f64,
        scene: &Scene,
    ) -> Result<bool, GeometryError> {
        let ratio = scale / self.transform.scale;
        self.zoom_by_ratio(focal, ratio, scene)
    }

    /// Fits `rect` (in model units) into the owner, preserving aspect ratio.
    ///
    /// The scale is the smaller of the width and height fits, clamped into
    /// the limits, and the rectangle's center lands on the owner's center.
    /// On error the model is left untouched.
    pub fn show_rectangle(&mut self, rect: Rect, scene: &Scene) -> Result<(), GeometryError> {
        let owner = scene.owner_rect;
        let size = scene.to_model(Point::new(owner.width(), owner.height()));

        let width = rect.width();
        let height = rect.height();
        if !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::InvalidRectangle);
        }

        let scale = (size.x / width)
            .min(size.y / height)
            .clamp(self.limits.min, self.limits.max);
        self.transform = Transform::new(
            -(rect.x0 + width / 2.0) * scale + size.x / 2.0,
            -(rect.y0 + height / 2.0) * scale + size.y / 2.0,
            scale,
        );
        Ok(())
    }

    /// Fits the whole content into the bounding box (or the owner when
    /// unbounded) and centers it.
    ///
    /// Returns `false` without changes when the content has an empty box.
    pub fn autocenter(&mut self, scene: &Scene) -> bool {
        let (left, top, width, height) = match self.bounding_box(scene) {
            Some(b) => (b.x0, b.y0, b.width(), b.height()),
            None => (0.0, 0.0, scene.owner_rect.width(), scene.owner_rect.height()),
        };
        let bbox = scene.content_bbox;
        if bbox.width() == 0.0 || bbox.height() == 0.0 {
            return false;
        }

        let scale = (width / bbox.width())
            .min(height / bbox.height())
            .clamp(self.limits.min, self.limits.max);
        self.transform = Transform::new(
            -(bbox.x0 + bbox.width() / 2.0) * scale + width / 2.0 + left,
            -(bbox.y0 + bbox.height() / 2.0) * scale + height / 2.0 + top,
            scale,
        );
        true
    }
}

impl Default for PanZoomView {
    fn default() -> Self {
        Self::new(Transform::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect};

    use super::{PanZoomView, Scene};
    use crate::{Bounds, GeometryError, Transform, ZoomLimits};

    fn scene() -> Scene {
        Scene::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
        )
    }

    #[test]
    fn zoom_keeps_focal_point_fixed() {
        let mut view = PanZoomView::default();
        let focal = Point::new(30.0, 70.0);
        // Content point currently under the focal point.
        let before = Point::new(
            (focal.x - view.transform().x) / view.transform().scale,
            (focal.y - view.transform().y) / view.transform().scale,
        );

        assert_eq!(view.zoom_by_ratio(focal, 2.0, &scene()), Ok(true));
        let t = view.transform();
        assert_eq!(t.scale, 2.0);
        let after = t.client_point(before);
        assert!((after.x - focal.x).abs() < 1e-9);
        assert!((after.y - focal.y).abs() < 1e-9);
    }

    #[test]
    fn non_finite_zoom_input_is_rejected() {
        let mut view = PanZoomView::default();
        assert_eq!(
            view.zoom_by_ratio(Point::new(f64::NAN, 0.0), 2.0, &scene()),
            Err(GeometryError::NonFiniteZoom)
        );
        assert_eq!(
            view.zoom_by_ratio(Point::ZERO, f64::INFINITY, &scene()),
            Err(GeometryError::NonFiniteZoom)
        );
        assert_eq!(view.transform(), Transform::IDENTITY);
    }

    #[test]
    fn zoom_stops_exactly_at_limits() {
        let mut view = PanZoomView::default();
        view.set_limits(ZoomLimits::new(0.5, 2.0).unwrap());

        assert_eq!(view.zoom_by_ratio(Point::ZERO, 10.0, &scene()), Ok(true));
        assert_eq!(view.transform().scale, 2.0);
        assert_eq!(view.zoom_by_ratio(Point::ZERO, 10.0, &scene()), Ok(false));
        assert_eq!(view.transform().scale, 2.0);
    }

    #[test]
    fn tightened_limits_pull_the_scale_back() {
        let mut view = PanZoomView::new(Transform::new(10.0, 10.0, 4.0));
        assert!(!view.enforce_limits(Point::new(50.0, 50.0), &scene()));

        view.set_limits(ZoomLimits::new(0.5, 2.0).unwrap());
        assert!(view.enforce_limits(Point::new(50.0, 50.0), &scene()));
        // Ratio 0.5 about (50, 50): 50 - 0.5 * (50 - 10) = 30.
        assert_eq!(view.transform(), Transform::new(30.0, 30.0, 2.0));
    }

    #[test]
    fn screen_matrix_moves_the_focal_point() {
        let mut view = PanZoomView::default();
        let scene = Scene {
            screen_ctm: Some(Affine::new([1.0, 0.0, 0.0, 1.0, 10.0, 10.0])),
            ..scene()
        };
        view.zoom_by_ratio(Point::new(50.0, 50.0), 2.0, &scene)
            .unwrap();
        // Focal point in model space is (40, 40).
        assert_eq!(view.transform(), Transform::new(-40.0, -40.0, 2.0));
    }

    #[test]
    fn bounds_adjustment_skips_the_scale_change() {
        let mut view = PanZoomView::new(Transform::new(-90.0, 0.0, 1.0));
        view.set_bounds(Bounds::Container);
        // Zooming in about the left edge throws the content off to the left,
        // the bounds push it back and the scale is left alone for this step.
        view.zoom_by_ratio(Point::new(0.0, 50.0), 2.0, &scene())
            .unwrap();
        assert_eq!(view.transform(), Transform::new(-95.0, -50.0, 1.0));
    }

    #[test]
    fn hard_containment_always_applies_the_scale() {
        let mut view = PanZoomView::new(Transform::new(-95.0, 0.0, 2.0));
        view.set_bounds(Bounds::Container);
        view.set_bounds_padding(1.0);
        view.set_limits(ZoomLimits::new(1.0, 4.0).unwrap());
        assert!(view.is_hard_containment());

        view.zoom_by_ratio(Point::new(100.0, 50.0), 0.75, &scene())
            .unwrap();
        assert_eq!(view.transform().scale, 1.5);
    }

    #[test]
    fn show_rectangle_fits_the_smaller_axis() {
        let mut view = PanZoomView::default();
        view.show_rectangle(Rect::new(0.0, 0.0, 200.0, 50.0), &scene())
            .unwrap();
        let t = view.transform();
        assert_eq!(t.scale, 0.5);
        // Rect center (100, 25) lands on the owner center (50, 50).
        let center = t.client_point(Point::new(100.0, 25.0));
        assert_eq!(center, Point::new(50.0, 50.0));
    }

    #[test]
    fn show_rectangle_rejects_non_finite_extents() {
        let mut view = PanZoomView::new(Transform::new(3.0, 4.0, 1.5));
        let err = view.show_rectangle(Rect::new(0.0, 0.0, f64::INFINITY, 10.0), &scene());
        assert_eq!(err, Err(GeometryError::InvalidRectangle));
        assert_eq!(view.transform(), Transform::new(3.0, 4.0, 1.5));
    }

    #[test]
    fn autocenter_fits_content_into_owner() {
        let mut view = PanZoomView::default();
        let scene = Scene::new(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            Rect::new(0.0, 0.0, 50.0, 50.0),
        );
        assert!(view.autocenter(&scene));
        let t = view.transform();
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.x, 50.0);
        assert_eq!(t.y, 0.0);
    }

    #[test]
    fn autocenter_skips_empty_content() {
        let mut view = PanZoomView::default();
        let scene = Scene::new(Rect::new(0.0, 0.0, 200.0, 100.0), Rect::ZERO);
        assert!(!view.autocenter(&scene));
        assert_eq!(view.transform(), Transform::IDENTITY);
    }
}
