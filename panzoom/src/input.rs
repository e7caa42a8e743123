// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-neutral input events.
//!
//! Positions are client (viewport) coordinates; times are host milliseconds.

use kurbo::Point;
use smallvec::SmallVec;

/// A mouse button event or move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer position.
    pub client: Point,
    /// Native button index.
    pub button: u8,
    /// The host reports the left button as `1` (legacy convention).
    pub legacy_buttons: bool,
    /// Event time.
    pub time: u64,
}

impl PointerInput {
    /// A primary-button event at `client`.
    #[must_use]
    pub fn new(client: Point, time: u64) -> Self {
        Self {
            client,
            button: 0,
            legacy_buttons: false,
            time,
        }
    }

    /// Returns `true` for the left button under either convention.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.button == 0 || (self.button == 1 && self.legacy_buttons)
    }
}

/// A wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Pointer position.
    pub client: Point,
    /// Vertical delta in `delta_mode` units.
    pub delta_y: f64,
    /// `0` for pixels, `1` for lines, `2` for pages.
    pub delta_mode: u32,
    /// Event time.
    pub time: u64,
}

impl WheelInput {
    /// A pixel-mode wheel event.
    #[must_use]
    pub fn new(client: Point, delta_y: f64, time: u64) -> Self {
        Self {
            client,
            delta_y,
            delta_mode: 0,
            time,
        }
    }

    /// The delta in pixels; line and page units count as 100 px.
    #[must_use]
    pub fn pixel_delta(&self) -> f64 {
        if self.delta_mode > 0 {
            self.delta_y * 100.0
        } else {
            self.delta_y
        }
    }
}

/// Keys the engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// `-` / `_` on the main keyboard.
    Minus,
    /// Numpad subtract.
    Subtract,
    /// `=` / `+` on the main keyboard.
    Equal,
    /// Numpad add.
    Add,
    /// Anything else, by key code.
    Other(u32),
}

impl Key {
    /// Decodes a legacy DOM `keyCode`.
    #[must_use]
    pub fn from_code(code: u32) -> Self {
        match code {
            38 => Self::ArrowUp,
            40 => Self::ArrowDown,
            37 => Self::ArrowLeft,
            39 => Self::ArrowRight,
            189 => Self::Minus,
            109 => Self::Subtract,
            187 => Self::Equal,
            107 => Self::Add,
            other => Self::Other(other),
        }
    }
}

/// A key press on the owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// Pressed key.
    pub key: Key,
    /// Event time.
    pub time: u64,
}

/// The pan/zoom meaning of a key press.
///
/// `x` and `y` are move directions, `z` is `1` to zoom out and `-1` to zoom in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyIntent {
    /// `1` for left, `-1` for right.
    pub x: i8,
    /// `1` for up, `-1` for down.
    pub y: i8,
    /// `1` for zoom out, `-1` for zoom in.
    pub z: i8,
}

impl KeyIntent {
    /// Decodes a key.
    #[must_use]
    pub fn from_key(key: Key) -> Self {
        let (x, y, z) = match key {
            Key::ArrowUp => (0, 1, 0),
            Key::ArrowDown => (0, -1, 0),
            Key::ArrowLeft => (1, 0, 0),
            Key::ArrowRight => (-1, 0, 0),
            Key::Minus | Key::Subtract => (0, 0, 1),
            Key::Equal | Key::Add => (0, 0, -1),
            Key::Other(_) => (0, 0, 0),
        };
        Self { x, y, z }
    }

    /// Returns `true` when the key moves the content.
    #[must_use]
    pub fn is_move(&self) -> bool {
        self.x != 0 || self.y != 0
    }
}

/// A touch event: `touchstart`, `touchmove`, `touchend` or `touchcancel`.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchInput {
    /// Touches still on the surface after the event, in client coordinates.
    pub touches: SmallVec<[Point; 2]>,
    /// Event time.
    pub time: u64,
}

impl TouchInput {
    /// Builds a touch event from touch positions.
    #[must_use]
    pub fn new(touches: &[Point], time: u64) -> Self {
        Self {
            touches: SmallVec::from_slice(touches),
            time,
        }
    }
}

/// A click, delivered once the double-click window has passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickInput {
    /// Where the click happened.
    pub client: Point,
    /// When the press began.
    pub time: u64,
}
