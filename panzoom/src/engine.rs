// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use panzoom_timing::{Easing, Kinetic};
use panzoom_view2d::{Bounds, PanZoomView, Scene, Transform};

use crate::adapter::{AdapterKind, GeometryAdapter};
use crate::animation::{Animations, MoveAnimation, ZoomAnimation};
use crate::element::{Element, ElementKind};
use crate::error::{ConfigError, PanZoomError};
use crate::events::{Emitter, EventKind, ListenerId, PanZoomEvent};
use crate::gesture::GestureSession;
use crate::host::{Host, Listeners};
use crate::options::{
    Hooks, PanZoomOptions, SmoothScroll, validate_bounds, validate_limits, validate_speed,
    validate_transform_origin,
};
use crate::scheduler::FrameScheduler;
use crate::text_selection::TextSelection;

mod router;

/// Pan and zoom engine for one element.
///
/// The engine owns the transform of `element` and the per-gesture state of
/// its input router. The host forwards native events to the `on_*`
/// handlers (only those whose [`Listeners`] bit is currently attached) and
/// calls [`PanZoom::frame`] whenever the engine asked for a frame through
/// [`Host::request_frame`]. Model changes are written to the element once
/// per frame.
#[derive(Debug)]
pub struct PanZoom<E: Element, H: Host> {
    element: E,
    host: H,
    adapter: AdapterKind,
    view: PanZoomView,
    zoom_speed: f64,
    pinch_speed: f64,
    double_click_speed: f64,
    transform_origin: Option<Point>,
    easing: Easing,
    hooks: Hooks,
    emitter: Emitter,
    scheduler: FrameScheduler,
    animations: Animations,
    kinetic: Option<Kinetic>,
    gesture: GestureSession,
    text_selection: TextSelection,
    listeners: Listeners,
    keyboard_enabled: bool,
    paused: bool,
    disposed: bool,
}

impl<E: Element, H: Host> PanZoom<E, H> {
    /// Creates an engine for `element` and attaches its listeners.
    ///
    /// The adapter is chosen from [`Element::kind`] unless the options force
    /// one, and any transform the element already carries seeds the model.
    /// When `initial_x`, `initial_y` or `initial_zoom` differ from the seeded
    /// transform, the content is zoomed to `initial_zoom` about the
    /// owner-relative point `(initial_x, initial_y)`.
    pub fn new(mut element: E, host: H, options: PanZoomOptions) -> Result<Self, ConfigError> {
        let PanZoomOptions {
            bounds,
            bounds_padding,
            min_zoom,
            max_zoom,
            zoom_speed,
            pinch_speed,
            zoom_double_click_speed,
            transform_origin,
            autocenter,
            initial_x,
            initial_y,
            initial_zoom,
            smooth_scroll,
            easing,
            enable_text_selection,
            disable_keyboard_interaction,
            adapter,
            hooks,
        } = options;

        let adapter = match adapter {
            Some(adapter) => adapter,
            None => AdapterKind::select(element.kind())?,
        };
        tracing::debug!(?adapter, kind = ?element.kind(), "panzoom adapter selected");

        let mut transform = Transform::IDENTITY;
        adapter.init_transform(&mut element, &mut transform);

        let limits = validate_limits(min_zoom, max_zoom)?;
        validate_bounds(bounds, bounds_padding)?;
        let zoom_speed = validate_speed(zoom_speed)?;
        let pinch_speed = validate_speed(pinch_speed)?;
        let double_click_speed = validate_speed(zoom_double_click_speed)?;
        let transform_origin = validate_transform_origin(transform_origin)?;
        if [initial_x, initial_y, initial_zoom]
            .into_iter()
            .flatten()
            .any(|v| !v.is_finite())
        {
            return Err(ConfigError::InvalidInitialTransform);
        }

        let keyboard_enabled = !disable_keyboard_interaction;
        adapter.attach(&mut element, keyboard_enabled);

        let mut view = PanZoomView::new(transform);
        view.set_limits(limits);
        view.set_bounds(bounds);
        view.set_bounds_padding(bounds_padding);

        let kinetic = match smooth_scroll {
            SmoothScroll::Kinetic(settings) => Some(Kinetic::new(settings)),
            SmoothScroll::Disabled => None,
        };

        let mut engine = Self {
            element,
            host,
            adapter,
            view,
            zoom_speed,
            pinch_speed,
            double_click_speed,
            transform_origin,
            easing,
            hooks,
            emitter: Emitter::new(),
            scheduler: FrameScheduler::default(),
            animations: Animations::default(),
            kinetic,
            gesture: GestureSession::default(),
            text_selection: TextSelection::new(enable_text_selection),
            listeners: Listeners::empty(),
            keyboard_enabled,
            paused: false,
            disposed: false,
        };

        if autocenter {
            engine.autocenter();
        }
        engine.sync_listeners();
        engine.mark_dirty();

        let seeded = engine.view.transform();
        let x = initial_x.unwrap_or(seeded.x);
        let y = initial_y.unwrap_or(seeded.y);
        let scale = initial_zoom.unwrap_or(seeded.scale);
        if x != seeded.x || y != seeded.y || scale != seeded.scale {
            engine
                .apply_zoom_abs(Point::new(x, y), scale)
                .map_err(|_| ConfigError::InvalidInitialTransform)?;
        }

        Ok(engine)
    }

    /// A copy of the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.view.transform()
    }

    /// The driven element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Mutable access to the driven element.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The adapter in use.
    pub fn adapter(&self) -> AdapterKind {
        self.adapter
    }

    /// Native listeners currently attached.
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// Subscribes to a notification.
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&PanZoomEvent) + 'static,
    ) -> ListenerId {
        self.emitter.on(kind, listener)
    }

    /// Unsubscribes. Returns `false` for an unknown id.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    /// Moves the translation to `(x, y)`, subject to the bounds.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let scene = self.scene();
        self.view.move_to(x, y, &scene);
        self.emit(EventKind::Pan);
        self.mark_dirty();
    }

    /// Moves by `(dx, dy)`, immediately or as a smooth animation.
    ///
    /// A smooth move replaces any smooth move still running.
    pub fn move_by(&mut self, dx: f64, dy: f64, smooth: bool) {
        if smooth {
            self.animations
                .pan
                .replace(MoveAnimation::new(Vec2::new(dx, dy), self.easing));
            self.request_frame();
        } else {
            let t = self.view.transform();
            self.move_to(t.x + dx, t.y + dy);
        }
    }

    /// Animates the translation to `(x, y)`.
    pub fn smooth_move_to(&mut self, x: f64, y: f64) {
        let t = self.view.transform();
        self.move_by(x - t.x, y - t.y, true);
    }

    /// Smoothly brings the center of `target` to the center of its scene.
    ///
    /// `target` must be a graphics element inside the scene.
    pub fn center_on<T: Element + ?Sized>(&mut self, target: &T) -> Result<(), PanZoomError> {
        if target.kind() != ElementKind::SvgGraphics {
            return Err(PanZoomError::NotInScene);
        }
        let rect = target.client_rect();
        let container = target.owner_client_rect();
        let center = rect.center();
        let dx = container.width() / 2.0 - (center.x - container.x0);
        let dy = container.height() / 2.0 - (center.y - container.y0);
        self.move_by(dx, dy, true);
        Ok(())
    }

    /// Zooms by `ratio` about the owner-relative point `(x, y)`.
    ///
    /// Stops kinetic motion and any smooth zoom first.
    pub fn zoom_to(&mut self, x: f64, y: f64, ratio: f64) -> Result<(), PanZoomError> {
        self.cancel_kinetic();
        self.animations.zoom.cancel();
        self.apply_zoom_by_ratio(Point::new(x, y), ratio)
    }

    /// Zooms to the absolute `scale` about the owner-relative point `(x, y)`.
    pub fn zoom_abs(&mut self, x: f64, y: f64, scale: f64) -> Result<(), PanZoomError> {
        self.apply_zoom_abs(Point::new(x, y), scale)
    }

    /// Animates a zoom by `ratio` about `(x, y)`; fires `zoomend` when done.
    pub fn smooth_zoom(&mut self, x: f64, y: f64, ratio: f64) -> Result<(), PanZoomError> {
        let from = self.view.transform().scale;
        self.start_zoom_animation(Point::new(x, y), from, from * ratio, ratio)
    }

    /// Animates a zoom to the absolute `scale` about `(x, y)`.
    pub fn smooth_zoom_abs(&mut self, x: f64, y: f64, scale: f64) -> Result<(), PanZoomError> {
        let from = self.view.transform().scale;
        self.start_zoom_animation(Point::new(x, y), from, scale, scale)
    }

    fn start_zoom_animation(
        &mut self,
        focal: Point,
        from: f64,
        to: f64,
        requested: f64,
    ) -> Result<(), PanZoomError> {
        if !focal.is_finite() || !requested.is_finite() || !to.is_finite() {
            return Err(PanZoomError::NonFiniteZoom);
        }
        self.cancel_kinetic();
        self.animations
            .zoom
            .replace(ZoomAnimation::new(focal, from, to, self.easing));
        self.request_frame();
        Ok(())
    }

    /// Fits `rect` (model units) into the owner.
    ///
    /// Non-finite extents fail and leave the transform untouched.
    pub fn show_rectangle(&mut self, rect: Rect) -> Result<(), PanZoomError> {
        let scene = self.scene();
        self.view.show_rectangle(rect, &scene)?;
        self.mark_dirty();
        Ok(())
    }

    /// Fits and centers the whole content. Content with an empty box is
    /// left alone.
    pub fn autocenter(&mut self) {
        let scene = self.scene();
        if self.view.autocenter(&scene) {
            self.mark_dirty();
        }
    }

    /// Detaches every listener and ends gestures in flight; the model and
    /// any animations are kept.
    pub fn pause(&mut self) {
        if self.paused || self.disposed {
            return;
        }
        self.release_events();
        self.paused = true;
        self.sync_listeners();
        tracing::debug!("panzoom paused");
    }

    /// Reattaches the listeners detached by [`PanZoom::pause`].
    pub fn resume(&mut self) {
        if !self.paused || self.disposed {
            return;
        }
        self.paused = false;
        self.sync_listeners();
        self.mark_dirty();
        tracing::debug!("panzoom resumed");
    }

    /// Returns `true` between [`PanZoom::pause`] and [`PanZoom::resume`].
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Tears the engine down.
    ///
    /// Fires a last `panend` if a pan was running. Afterwards every input
    /// handler and [`PanZoom::frame`] does nothing.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.release_events();
        self.gesture.reset();
        self.animations.cancel_all();
        self.disposed = true;
        self.sync_listeners();
        self.scheduler.cancel(&mut self.host);
        tracing::debug!("panzoom disposed");
    }

    /// Returns `true` once [`PanZoom::dispose`] ran.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Advances animations, kinetic motion and the click timer to `now`
    /// and writes the transform to the element if it changed.
    ///
    /// Requests the next frame itself while anything is still moving.
    pub fn frame(&mut self, now: u64) -> Result<(), PanZoomError> {
        if self.disposed {
            return Ok(());
        }
        self.scheduler.begin_frame();

        if let Some(anim) = self.animations.zoom.get_mut() {
            let focal = anim.focal();
            let step = anim.step(now);
            if step.is_finished() {
                self.animations.zoom.cancel();
            }
            if let Err(err) = self.apply_zoom_abs(focal, step.value()) {
                self.animations.zoom.cancel();
                return Err(err);
            }
            if step.is_finished() {
                self.emit(EventKind::ZoomEnd);
            }
        }

        if let Some(anim) = self.animations.pan.get_mut() {
            let (increment, finished) = anim.step(now);
            if finished {
                self.animations.pan.cancel();
            }
            self.move_by(increment.x, increment.y, false);
        }

        let translation = self.view.transform().translation();
        let coast = match self.kinetic.as_mut() {
            Some(kinetic) if kinetic.is_tracking() => {
                kinetic.track(now, translation);
                None
            }
            Some(kinetic) => kinetic.step(now),
            None => None,
        };
        if let Some(point) = coast {
            self.animations.zoom.cancel();
            self.move_to(point.x, point.y);
        }

        if let Some(click) = self.gesture.click.poll(now)
            && let Some(on_click) = self.hooks.on_click.as_mut()
        {
            on_click(&click);
        }

        if self.scheduler.take_dirty() {
            let transform = self.view.transform();
            self.adapter.apply_transform(&mut self.element, transform);
            tracing::trace!(?transform, "transform applied");
            self.emitter.emit(EventKind::Transform, transform);
        }

        let live = self.animations.is_active()
            || self.kinetic.as_ref().is_some_and(Kinetic::is_active)
            || self.gesture.click.is_pending();
        if live {
            self.request_frame();
        }
        Ok(())
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.view.limits().min
    }

    /// Sets the smallest allowed scale, pulling the current scale up to it
    /// if needed.
    pub fn set_min_zoom(&mut self, min_zoom: f64) -> Result<(), ConfigError> {
        let limits = validate_limits(min_zoom, self.max_zoom())?;
        self.view.set_limits(limits);
        self.enforce_limits();
        Ok(())
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.view.limits().max
    }

    /// Sets the largest allowed scale, pulling the current scale down to it
    /// if needed.
    pub fn set_max_zoom(&mut self, max_zoom: f64) -> Result<(), ConfigError> {
        let limits = validate_limits(self.min_zoom(), max_zoom)?;
        self.view.set_limits(limits);
        self.enforce_limits();
        Ok(())
    }

    fn enforce_limits(&mut self) {
        let scene = self.scene();
        let focal = self.midpoint();
        if self.view.enforce_limits(focal, &scene) {
            self.emit(EventKind::Zoom);
            self.mark_dirty();
        }
    }

    /// Wheel and keyboard zoom speed.
    #[must_use]
    pub fn zoom_speed(&self) -> f64 {
        self.zoom_speed
    }

    /// Sets the wheel and keyboard zoom speed.
    pub fn set_zoom_speed(&mut self, speed: f64) -> Result<(), ConfigError> {
        self.zoom_speed = validate_speed(speed)?;
        Ok(())
    }

    /// Pinch zoom speed.
    #[must_use]
    pub fn pinch_speed(&self) -> f64 {
        self.pinch_speed
    }

    /// Sets the pinch zoom speed.
    pub fn set_pinch_speed(&mut self, speed: f64) -> Result<(), ConfigError> {
        self.pinch_speed = validate_speed(speed)?;
        Ok(())
    }

    /// Scale multiplier of a double click or double tap.
    #[must_use]
    pub fn zoom_double_click_speed(&self) -> f64 {
        self.double_click_speed
    }

    /// Sets the double click and double tap multiplier.
    pub fn set_zoom_double_click_speed(&mut self, speed: f64) -> Result<(), ConfigError> {
        self.double_click_speed = validate_speed(speed)?;
        Ok(())
    }

    /// Fixed zoom point as fractions of the owner size.
    #[must_use]
    pub fn transform_origin(&self) -> Option<Point> {
        self.transform_origin
    }

    /// Sets or clears the fixed zoom point.
    pub fn set_transform_origin(&mut self, origin: Option<Point>) -> Result<(), ConfigError> {
        self.transform_origin = validate_transform_origin(origin)?;
        Ok(())
    }

    /// Containment bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.view.bounds()
    }

    /// Replaces the containment bounds and slides the content inside them.
    pub fn set_bounds(&mut self, bounds: Bounds) -> Result<(), ConfigError> {
        validate_bounds(bounds, self.view.bounds_padding())?;
        self.view.set_bounds(bounds);
        self.keep_inside_bounds();
        Ok(())
    }

    /// Padding of [`Bounds::Container`] as a fraction of the owner size.
    #[must_use]
    pub fn bounds_padding(&self) -> f64 {
        self.view.bounds_padding()
    }

    /// Sets the container padding fraction.
    pub fn set_bounds_padding(&mut self, padding: f64) -> Result<(), ConfigError> {
        validate_bounds(self.view.bounds(), padding)?;
        self.view.set_bounds_padding(padding);
        self.keep_inside_bounds();
        Ok(())
    }

    fn keep_inside_bounds(&mut self) {
        let scene = self.scene();
        if self.view.keep_inside_bounds(&scene) {
            self.emit(EventKind::Pan);
            self.mark_dirty();
        }
    }

    fn apply_zoom_by_ratio(&mut self, focal: Point, ratio: f64) -> Result<(), PanZoomError> {
        let scene = self.scene();
        if self.view.zoom_by_ratio(focal, ratio, &scene)? {
            self.emit(EventKind::Zoom);
            self.mark_dirty();
        }
        Ok(())
    }

    fn apply_zoom_abs(&mut self, focal: Point, scale: f64) -> Result<(), PanZoomError> {
        let ratio = scale / self.view.transform().scale;
        self.apply_zoom_by_ratio(focal, ratio)
    }

    fn scene(&self) -> Scene {
        Scene {
            owner_rect: self.adapter.owner_rect(&self.element),
            content_bbox: self.adapter.bbox(&self.element),
            screen_ctm: self.adapter.screen_ctm(&self.element),
        }
    }

    fn owner_rect(&self) -> Rect {
        self.adapter.owner_rect(&self.element)
    }

    /// Client point to owner-relative point.
    fn offset(&self, client: Point) -> Point {
        let owner = self.owner_rect();
        Point::new(client.x - owner.x0, client.y - owner.y0)
    }

    /// Client point to model space, where drags are measured.
    fn model_point(&self, client: Point) -> Point {
        self.scene().to_model(self.offset(client))
    }

    fn midpoint(&self) -> Point {
        let owner = self.owner_rect();
        Point::new(owner.width() / 2.0, owner.height() / 2.0)
    }

    /// The configured transform origin in owner-relative pixels.
    fn origin_offset(&self) -> Option<Point> {
        let origin = self.transform_origin?;
        let owner = self.owner_rect();
        Some(Point::new(owner.width() * origin.x, owner.height() * origin.y))
    }

    fn emit(&mut self, kind: EventKind) {
        self.emitter.emit(kind, self.view.transform());
    }

    fn mark_dirty(&mut self) {
        if self.disposed {
            return;
        }
        self.scheduler.mark_dirty(&mut self.host);
    }

    fn request_frame(&mut self) {
        if self.disposed {
            return;
        }
        self.scheduler.request(&mut self.host);
    }

    fn cancel_kinetic(&mut self) {
        if let Some(kinetic) = self.kinetic.as_mut() {
            kinetic.cancel();
        }
    }

    /// Pushes the listener set implied by the current state to the host.
    fn sync_listeners(&mut self) {
        let wanted = if self.paused || self.disposed {
            Listeners::empty()
        } else {
            let mut set = Listeners::OWNER;
            set.set(Listeners::KEY_DOWN, self.keyboard_enabled);
            set.set(Listeners::DOCUMENT_MOUSE, self.gesture.mouse_in_progress);
            set.set(Listeners::DOCUMENT_TOUCH, self.gesture.touch_in_progress);
            set
        };
        if wanted != self.listeners {
            self.listeners = wanted;
            self.host.listeners_changed(wanted);
        }
    }

    /// Ends gestures in flight without coasting, as pause and dispose do.
    ///
    /// A touch session cut short this way also forgets the previous tap.
    fn release_events(&mut self) {
        let was_panning = self.gesture.pan_started;
        if self.gesture.touch_in_progress {
            self.gesture.tap.reset();
        }
        self.gesture.end_mouse();
        self.gesture.end_touch();
        self.gesture.pan_started = false;
        self.cancel_kinetic();
        self.text_selection.release(&mut self.host);
        if was_panning {
            tracing::debug!("pan end on release");
            self.emit(EventKind::PanEnd);
        }
    }

    fn trigger_pan_start(&mut self, now: u64) {
        if self.gesture.pan_started {
            return;
        }
        self.gesture.pan_started = true;
        let translation = self.view.transform().translation();
        if let Some(kinetic) = self.kinetic.as_mut() {
            kinetic.start(now, translation);
            self.request_frame();
        }
        tracing::debug!(?translation, "pan start");
        self.emit(EventKind::PanStart);
    }

    fn trigger_pan_end(&mut self, now: u64) {
        if !self.gesture.pan_started {
            return;
        }
        self.gesture.pan_started = false;
        let translation = self.view.transform().translation();
        let multi_touch = self.gesture.multi_touch;
        let coasting = match self.kinetic.as_mut() {
            Some(kinetic) if multi_touch => {
                kinetic.cancel();
                false
            }
            Some(kinetic) => kinetic.stop(now, translation),
            None => false,
        };
        if coasting {
            self.request_frame();
        }
        tracing::debug!(?translation, coasting, "pan end");
        self.emit(EventKind::PanEnd);
    }
}
