// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options, caller hooks and their validation.

use core::fmt;

use kurbo::Point;
use panzoom_timing::{Easing, KineticSettings};
use panzoom_view2d::{Bounds, DEFAULT_BOUNDS_PADDING, ZoomLimits};

use crate::adapter::AdapterKind;
use crate::error::ConfigError;
use crate::input::{ClickInput, KeyInput, KeyIntent, PointerInput, TouchInput, WheelInput};

/// Default wheel and keyboard zoom speed.
pub const DEFAULT_ZOOM_SPEED: f64 = 1.0;

/// Default pinch speed.
pub const DEFAULT_PINCH_SPEED: f64 = 1.0;

/// Default scale multiplier of a double click or double tap.
pub const DEFAULT_ZOOM_DOUBLE_CLICK_SPEED: f64 = 1.75;

/// Post-release motion after a pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SmoothScroll {
    /// Coast with kinetic deceleration.
    Kinetic(KineticSettings),
    /// Stop as soon as the pointer is released.
    Disabled,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::Kinetic(KineticSettings::default())
    }
}

type Hook<T> = Option<Box<dyn FnMut(&T) -> bool>>;

/// Caller hooks consulted by the input handlers.
///
/// For `filter_key`, `before_wheel` and `before_mouse_down`, returning `true`
/// makes the engine ignore the event. For `on_touch` and `on_double_click`,
/// returning `false` leaves the native event's default action alone; the
/// gesture itself is still handled.
#[derive(Default)]
pub struct Hooks {
    /// Sees every key press with its decoded intent.
    pub filter_key: Option<Box<dyn FnMut(&KeyInput, KeyIntent) -> bool>>,
    /// Sees every wheel event.
    pub before_wheel: Hook<WheelInput>,
    /// Sees every mouse down.
    pub before_mouse_down: Hook<PointerInput>,
    /// Sees every touch start.
    pub on_touch: Hook<TouchInput>,
    /// Sees every double click.
    pub on_double_click: Hook<PointerInput>,
    /// Receives clicks that turned out not to be pans or double clicks.
    pub on_click: Option<Box<dyn FnMut(&ClickInput)>>,
}

impl Hooks {
    /// Sets [`Hooks::filter_key`].
    #[must_use]
    pub fn with_filter_key(mut self, f: impl FnMut(&KeyInput, KeyIntent) -> bool + 'static) -> Self {
        self.filter_key = Some(Box::new(f));
        self
    }

    /// Sets [`Hooks::before_wheel`].
    #[must_use]
    pub fn with_before_wheel(mut self, f: impl FnMut(&WheelInput) -> bool + 'static) -> Self {
        self.before_wheel = Some(Box::new(f));
        self
    }

    /// Sets [`Hooks::before_mouse_down`].
    #[must_use]
    pub fn with_before_mouse_down(
        mut self,
        f: impl FnMut(&PointerInput) -> bool + 'static,
    ) -> Self {
        self.before_mouse_down = Some(Box::new(f));
        self
    }

    /// Sets [`Hooks::on_touch`].
    #[must_use]
    pub fn with_on_touch(mut self, f: impl FnMut(&TouchInput) -> bool + 'static) -> Self {
        self.on_touch = Some(Box::new(f));
        self
    }

    /// Sets [`Hooks::on_double_click`].
    #[must_use]
    pub fn with_on_double_click(mut self, f: impl FnMut(&PointerInput) -> bool + 'static) -> Self {
        self.on_double_click = Some(Box::new(f));
        self
    }

    /// Sets [`Hooks::on_click`].
    #[must_use]
    pub fn with_on_click(mut self, f: impl FnMut(&ClickInput) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("filter_key", &self.filter_key.is_some())
            .field("before_wheel", &self.before_wheel.is_some())
            .field("before_mouse_down", &self.before_mouse_down.is_some())
            .field("on_touch", &self.on_touch.is_some())
            .field("on_double_click", &self.on_double_click.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Options for [`PanZoom::new`](crate::PanZoom::new).
#[derive(Debug)]
pub struct PanZoomOptions {
    /// Region the content may not fully leave.
    pub bounds: Bounds,
    /// Inset of [`Bounds::Container`] as a fraction of the owner size.
    pub bounds_padding: f64,
    /// Smallest allowed scale.
    pub min_zoom: f64,
    /// Largest allowed scale.
    pub max_zoom: f64,
    /// Wheel and keyboard zoom speed.
    pub zoom_speed: f64,
    /// Pinch zoom speed.
    pub pinch_speed: f64,
    /// Scale multiplier of a double click or double tap.
    pub zoom_double_click_speed: f64,
    /// Fixed zoom point as fractions of the owner size, instead of the pointer.
    pub transform_origin: Option<Point>,
    /// Fit the content into the owner at startup.
    pub autocenter: bool,
    /// Horizontal focal point (owner-relative) of the initial zoom.
    pub initial_x: Option<f64>,
    /// Vertical focal point (owner-relative) of the initial zoom.
    pub initial_y: Option<f64>,
    /// Initial scale, reached by zooming about `(initial_x, initial_y)`.
    pub initial_zoom: Option<f64>,
    /// Post-release motion.
    pub smooth_scroll: SmoothScroll,
    /// Timing curve of smooth moves and smooth zooms.
    pub easing: Easing,
    /// Leave text selection alone during mouse pans.
    pub enable_text_selection: bool,
    /// Do not make the owner focusable and ignore key presses.
    pub disable_keyboard_interaction: bool,
    /// Force an adapter instead of choosing by element kind.
    pub adapter: Option<AdapterKind>,
    /// Caller hooks.
    pub hooks: Hooks,
}

impl Default for PanZoomOptions {
    fn default() -> Self {
        Self {
            bounds: Bounds::Unbounded,
            bounds_padding: DEFAULT_BOUNDS_PADDING,
            min_zoom: 0.0,
            max_zoom: f64::INFINITY,
            zoom_speed: DEFAULT_ZOOM_SPEED,
            pinch_speed: DEFAULT_PINCH_SPEED,
            zoom_double_click_speed: DEFAULT_ZOOM_DOUBLE_CLICK_SPEED,
            transform_origin: None,
            autocenter: false,
            initial_x: None,
            initial_y: None,
            initial_zoom: None,
            smooth_scroll: SmoothScroll::default(),
            easing: Easing::Ease,
            enable_text_selection: false,
            disable_keyboard_interaction: false,
            adapter: None,
            hooks: Hooks::default(),
        }
    }
}

pub(crate) fn validate_speed(speed: f64) -> Result<f64, ConfigError> {
    if speed.is_finite() {
        Ok(speed)
    } else {
        Err(ConfigError::InvalidZoomSpeed)
    }
}

pub(crate) fn validate_bounds(bounds: Bounds, padding: f64) -> Result<(), ConfigError> {
    if bounds.is_valid() && padding.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds)
    }
}

pub(crate) fn validate_limits(min: f64, max: f64) -> Result<ZoomLimits, ConfigError> {
    ZoomLimits::new(min, max).ok_or(ConfigError::InvalidZoomLimits)
}

pub(crate) fn validate_transform_origin(
    origin: Option<Point>,
) -> Result<Option<Point>, ConfigError> {
    match origin {
        Some(p) if !p.is_finite() => Err(ConfigError::InvalidTransformOrigin),
        other => Ok(other),
    }
}
