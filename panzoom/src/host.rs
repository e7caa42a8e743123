// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The embedding environment: frame scheduling, listeners, text selection.

bitflags::bitflags! {
    /// Native listeners the engine wants attached.
    ///
    /// The host receives the full set through [`Host::listeners_changed`]
    /// whenever it changes, and routes the matching native events to the
    /// `PanZoom::on_*` handlers.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// `mousedown` on the owner.
        const MOUSE_DOWN     = 0b0000_0001;
        /// `keydown` on the owner.
        const KEY_DOWN       = 0b0000_0010;
        /// `wheel` on the owner.
        const WHEEL          = 0b0000_0100;
        /// `dblclick` on the owner.
        const DOUBLE_CLICK   = 0b0000_1000;
        /// `touchstart` on the owner.
        const TOUCH_START    = 0b0001_0000;
        /// `mousemove` and `mouseup` on the document, during a mouse drag.
        const DOCUMENT_MOUSE = 0b0010_0000;
        /// `touchmove`, `touchend` and `touchcancel` on the document, during a touch session.
        const DOCUMENT_TOUCH = 0b0100_0000;
        /// Everything attached to the owner while the engine is live.
        const OWNER = Self::MOUSE_DOWN.bits()
            | Self::KEY_DOWN.bits()
            | Self::WHEEL.bits()
            | Self::DOUBLE_CLICK.bits()
            | Self::TOUCH_START.bits();
    }
}

bitflags::bitflags! {
    /// What the host should do with the native event after a handler ran.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Disposition: u8 {
        /// Call `preventDefault()`.
        const PREVENT_DEFAULT  = 0b01;
        /// Call `stopPropagation()`.
        const STOP_PROPAGATION = 0b10;
    }
}

/// Services the engine needs from its environment.
///
/// Only [`Host::request_frame`] is required. When it is called, the host
/// must call `PanZoom::frame` once on the next display refresh.
pub trait Host {
    /// Asks for one `PanZoom::frame` call on the next display refresh.
    fn request_frame(&mut self);

    /// Withdraws a frame request that has not fired yet.
    fn cancel_frame(&mut self) {}

    /// The set of attached native listeners changed.
    fn listeners_changed(&mut self, _listeners: Listeners) {}

    /// Suppress text selection and native drag while a mouse pan runs.
    fn capture_text_selection(&mut self) {}

    /// Restore what [`Host::capture_text_selection`] suppressed.
    fn release_text_selection(&mut self) {}
}
