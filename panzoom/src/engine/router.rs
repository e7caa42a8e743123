// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native input handlers.
//!
//! Each handler runs only while its [`Listeners`] bit is attached and
//! returns what the host should do with the native event.

use kurbo::Vec2;
use panzoom_event_state::click::{CLICK_MAX_DURATION_MS, CLICK_SLOP, DOUBLE_TAP_WINDOW_MS};
use panzoom_event_state::tap::TapOutcome;
use panzoom_view2d::scale_multiplier;

use super::PanZoom;
use crate::element::Element;
use crate::error::PanZoomError;
use crate::host::{Disposition, Host, Listeners};
use crate::input::{ClickInput, KeyInput, KeyIntent, PointerInput, TouchInput, WheelInput};

/// Arrow keys move by this fraction of the smaller owner dimension.
const KEYBOARD_MOVE_RATIO: f64 = 0.05;

/// Key zoom feeds `z * KEY_ZOOM_DELTA` into the wheel multiplier.
const KEY_ZOOM_DELTA: f64 = 100.0;

const CONSUMED: Disposition = Disposition::PREVENT_DEFAULT.union(Disposition::STOP_PROPAGATION);

impl<E: Element, H: Host> PanZoom<E, H> {
    /// `mousedown` on the owner.
    pub fn on_mouse_down(&mut self, input: &PointerInput) -> Result<Disposition, PanZoomError> {
        if !self.listeners.contains(Listeners::MOUSE_DOWN) {
            return Ok(Disposition::empty());
        }
        self.gesture.click.cancel();
        if let Some(veto) = self.hooks.before_mouse_down.as_mut()
            && veto(input)
        {
            return Ok(Disposition::empty());
        }
        self.gesture.mouse_down = Some(ClickInput {
            client: input.client,
            time: input.time,
        });

        // Compatibility mouse events fired after a touch.
        if self.gesture.touch_in_progress {
            return Ok(Disposition::STOP_PROPAGATION);
        }
        if !input.is_primary() {
            return Ok(Disposition::empty());
        }

        self.cancel_kinetic();
        let point = self.model_point(input.client);
        self.gesture.drag.start(point);
        self.gesture.mouse_in_progress = true;
        self.sync_listeners();
        self.text_selection.capture(&mut self.host);
        tracing::debug!(?point, "mouse drag armed");
        Ok(Disposition::empty())
    }

    /// `mousemove` on the document during a mouse drag.
    pub fn on_mouse_move(&mut self, input: &PointerInput) -> Result<Disposition, PanZoomError> {
        if !self.listeners.contains(Listeners::DOCUMENT_MOUSE) || self.gesture.touch_in_progress {
            return Ok(Disposition::empty());
        }
        self.trigger_pan_start(input.time);
        let point = self.model_point(input.client);
        if let Some(delta) = self.gesture.drag.update(point) {
            self.move_by(delta.x, delta.y, false);
        }
        Ok(Disposition::empty())
    }

    /// `mouseup` on the document during a mouse drag.
    pub fn on_mouse_up(&mut self, input: &PointerInput) -> Result<Disposition, PanZoomError> {
        if !self.listeners.contains(Listeners::DOCUMENT_MOUSE) {
            return Ok(Disposition::empty());
        }
        if let Some(down) = self.gesture.mouse_down.take()
            && input.time.saturating_sub(down.time) < CLICK_MAX_DURATION_MS
        {
            let displacement = self.gesture.drag.displacement().unwrap_or(0.0);
            self.schedule_click(down, displacement, input.time);
        }
        self.text_selection.release(&mut self.host);
        self.trigger_pan_end(input.time);
        self.gesture.end_mouse();
        self.sync_listeners();
        Ok(Disposition::empty())
    }

    /// `wheel` on the owner.
    pub fn on_wheel(&mut self, input: &WheelInput) -> Result<Disposition, PanZoomError> {
        if !self.listeners.contains(Listeners::WHEEL) {
            return Ok(Disposition::empty());
        }
        if let Some(veto) = self.hooks.before_wheel.as_mut()
            && veto(input)
        {
            return Ok(Disposition::empty());
        }
        self.cancel_kinetic();

        let multiplier = scale_multiplier(input.pixel_delta(), self.zoom_speed);
        if multiplier == 1.0 {
            return Ok(Disposition::empty());
        }
        let focal = self
            .origin_offset()
            .unwrap_or_else(|| self.offset(input.client));
        self.zoom_to(focal.x, focal.y, multiplier)?;
        Ok(Disposition::PREVENT_DEFAULT)
    }

    /// `keydown` on the owner.
    pub fn on_key_down(&mut self, input: &KeyInput) -> Result<Disposition, PanZoomError> {
        if !self.listeners.contains(Listeners::KEY_DOWN) {
            return Ok(Disposition::empty());
        }
        let intent = KeyIntent::from_key(input.key);
        if let Some(filter) = self.hooks.filter_key.as_mut()
            && filter(input, intent)
        {
            return Ok(Disposition::empty());
        }

        let mut disposition = Disposition::empty();
        if intent.is_move() {
            disposition = CONSUMED;
            let owner = self.owner_rect();
            let step = owner.width().min(owner.height()) * KEYBOARD_MOVE_RATIO;
            self.move_by(step * f64::from(intent.x), step * f64::from(intent.y), false);
        }
        if intent.z != 0 {
            let multiplier = scale_multiplier(f64::from(intent.z) * KEY_ZOOM_DELTA, self.zoom_speed);
            let focal = self.origin_offset().unwrap_or_else(|| self.midpoint());
            self.smooth_zoom(focal.x, focal.y, multiplier)?;
        }
        Ok(disposition)
    }

    /// `dblclick` on the owner.
    pub fn on_double_click(&mut self, input: &PointerInput) -> Result<Disposition, PanZoomError> {
        if !self.listeners.contains(Listeners::DOUBLE_CLICK) {
            return Ok(Disposition::empty());
        }
        let prevent = self
            .hooks
            .on_double_click
            .as_mut()
            .is_none_or(|hook| hook(input));
        self.gesture.click.supersede();

        let focal = self
            .origin_offset()
            .unwrap_or_else(|| self.offset(input.client));
        self.smooth_zoom(focal.x, focal.y, self.double_click_speed)?;
        Ok(if prevent {
            CONSUMED
        } else {
            Disposition::empty()
        })
    }

    /// `touchstart` on the owner.
    pub fn on_touch_start(&mut self, input: &TouchInput) -> Result<Disposition, PanZoomError> {
        if !self.listeners.contains(Listeners::TOUCH_START) {
            return Ok(Disposition::empty());
        }
        let prevent = self
            .hooks
            .on_touch
            .as_mut()
            .is_none_or(|hook| hook(input));
        self.gesture.click.cancel();

        match input.touches.as_slice() {
            [touch] => {
                let offset = self.offset(*touch);
                self.gesture.tap.on_touch_start(input.time, Some(Vec2::ZERO));
                self.gesture.last_single_offset = Some(offset);
                self.gesture.touch_down = Some(ClickInput {
                    client: *touch,
                    time: input.time,
                });
                let point = self.model_point(*touch);
                self.gesture.drag.start(point);
                self.cancel_kinetic();
                self.start_touch_session();
            }
            [a, b] => {
                let (a, b) = (self.offset(*a), self.offset(*b));
                self.gesture.pinch.start(a, b);
                self.gesture.multi_touch = true;
                self.gesture.tap.on_multi_touch();
                self.start_touch_session();
            }
            _ => {}
        }

        Ok(if prevent {
            CONSUMED
        } else {
            Disposition::empty()
        })
    }

    /// `touchmove` on the document during a touch session.
    pub fn on_touch_move(&mut self, input: &TouchInput) -> Result<Disposition, PanZoomError> {
        if !self.listeners.contains(Listeners::DOCUMENT_TOUCH) {
            return Ok(Disposition::empty());
        }
        match input.touches.as_slice() {
            [touch] => {
                let point = self.model_point(*touch);
                let Some(delta) = self.gesture.drag.update(point) else {
                    self.gesture.drag.start(point);
                    return Ok(Disposition::STOP_PROPAGATION);
                };
                if let Some(offset) = self.gesture.drag.total_offset() {
                    self.gesture.tap.on_single_move(offset);
                }
                if delta.x != 0.0 && delta.y != 0.0 {
                    self.trigger_pan_start(input.time);
                }
                self.move_by(delta.x, delta.y, false);
                Ok(Disposition::STOP_PROPAGATION)
            }
            [a, b] => {
                self.gesture.multi_touch = true;
                self.gesture.tap.on_multi_touch();
                let (a, b) = (self.offset(*a), self.offset(*b));
                if !self.gesture.pinch.is_active() {
                    self.gesture.pinch.start(a, b);
                    return Ok(CONSUMED);
                }
                if let Some(step) = self.gesture.pinch.update(a, b, self.pinch_speed) {
                    let focal = self.origin_offset().unwrap_or(step.midpoint);
                    self.zoom_to(focal.x, focal.y, step.multiplier)?;
                }
                Ok(CONSUMED)
            }
            _ => Ok(Disposition::empty()),
        }
    }

    /// `touchend` or `touchcancel` on the document during a touch session.
    ///
    /// `input.touches` lists the fingers still down.
    pub fn on_touch_end(&mut self, input: &TouchInput) -> Result<Disposition, PanZoomError> {
        if !self.listeners.contains(Listeners::DOCUMENT_TOUCH) {
            return Ok(Disposition::empty());
        }
        if let Some(first) = input.touches.first() {
            let point = self.model_point(*first);
            if self.gesture.drag.is_dragging() {
                self.gesture.drag.reseat(point);
            } else {
                self.gesture.drag.start(point);
            }
            if input.touches.len() < 2 {
                self.gesture.pinch.end();
            }
            return Ok(Disposition::empty());
        }

        let now = input.time;
        match self.gesture.tap.on_all_released(now) {
            TapOutcome::DoubleTap => {
                let focal = self
                    .origin_offset()
                    .or(self.gesture.last_single_offset)
                    .unwrap_or_else(|| self.midpoint());
                self.smooth_zoom(focal.x, focal.y, self.double_click_speed)?;
            }
            TapOutcome::ClickCandidate => {
                if let Some(down) = self.gesture.touch_down {
                    self.schedule_click(down, 0.0, now);
                }
            }
            TapOutcome::None => {}
        }
        self.trigger_pan_end(now);
        self.gesture.end_touch();
        self.sync_listeners();
        tracing::debug!("touch session ended");
        Ok(Disposition::empty())
    }

    fn start_touch_session(&mut self) {
        if self.gesture.touch_in_progress {
            return;
        }
        self.gesture.touch_in_progress = true;
        self.sync_listeners();
        tracing::debug!("touch session started");
    }

    /// Defers a click until the double-click window has passed.
    ///
    /// Only done when a click hook is installed and the pointer stayed within
    /// [`CLICK_SLOP`] of where it went down.
    fn schedule_click(&mut self, click: ClickInput, displacement: f64, now: u64) {
        if self.hooks.on_click.is_none() {
            return;
        }
        self.gesture.click.cancel();
        if displacement > CLICK_SLOP {
            return;
        }
        self.gesture
            .click
            .schedule(now + DOUBLE_TAP_WINDOW_MS, click);
        self.request_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_zoom_steps_are_capped() {
        assert_eq!(scale_multiplier(KEY_ZOOM_DELTA, 1.0), 0.75);
        assert_eq!(scale_multiplier(-KEY_ZOOM_DELTA, 1.0), 1.25);
        assert_eq!(CONSUMED.bits(), 0b11);
    }
}
