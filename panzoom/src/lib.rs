// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panzoom --heading-base-level=0

//! Panzoom: pan and zoom for a single element.
//!
//! [`PanZoom`] turns mouse, wheel, keyboard and touch input into a
//! translate-plus-scale [`Transform`] and writes it to an [`Element`] once
//! per display frame. It supports:
//! - focal-point zoom with [`scale_multiplier`]-style wheel steps and pinch,
//! - smooth zoom, smooth move and kinetic deceleration after a pan,
//! - containment [`Bounds`] and zoom limits,
//! - deferred clicks that do not fire for pans or double clicks.
//!
//! The engine never reads a clock or touches a real DOM. The embedder
//! implements [`Element`] for its node, [`Host`] for frame scheduling and
//! listener bookkeeping, forwards native events to the `on_*` handlers
//! with host timestamps, and calls [`PanZoom::frame`] when asked.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use panzoom::{Element, ElementKind, Host, PanZoom, PanZoomOptions, WheelInput};
//!
//! struct Div { style: String }
//!
//! impl Element for Div {
//!     fn kind(&self) -> ElementKind { ElementKind::Html }
//!     fn client_rect(&self) -> Rect { Rect::new(0.0, 0.0, 200.0, 200.0) }
//!     fn owner_client_rect(&self) -> Rect { Rect::new(0.0, 0.0, 200.0, 200.0) }
//!     fn client_size(&self) -> Size { Size::new(200.0, 200.0) }
//!     fn set_style(&mut self, property: &str, value: &str) {
//!         if property == "transform" {
//!             self.style = value.to_string();
//!         }
//!     }
//!     fn set_attribute(&mut self, _: &str, _: &str) {}
//!     fn set_owner_attribute(&mut self, _: &str, _: &str) {}
//!     fn remove_owner_attribute(&mut self, _: &str) {}
//! }
//!
//! struct Frames(usize);
//!
//! impl Host for Frames {
//!     fn request_frame(&mut self) { self.0 += 1; }
//! }
//!
//! let div = Div { style: String::new() };
//! let mut pz = PanZoom::new(div, Frames(0), PanZoomOptions::default()).unwrap();
//!
//! // Scroll up one notch at (100, 100): zoom in about the cursor.
//! pz.on_wheel(&WheelInput::new(Point::new(100.0, 100.0), -32.0, 0)).unwrap();
//! pz.frame(16).unwrap();
//!
//! assert_eq!(pz.transform().scale, 1.25);
//! assert_eq!(pz.element().style, "matrix(1.25, 0, 0, 1.25, -25, -25)");
//! ```
//!
//! The transform model itself lives in `panzoom_view2d`, gesture state
//! machines in `panzoom_event_state`, and tweens and kinetic motion in
//! `panzoom_timing`.

mod adapter;
mod animation;
mod element;
mod engine;
mod error;
mod events;
mod gesture;
mod host;
mod input;
mod options;
mod scheduler;
mod text_selection;

pub use adapter::{AdapterKind, GeometryAdapter, GraphicsAdapter, PlainAdapter};
pub use element::{Element, ElementKind};
pub use engine::PanZoom;
pub use error::{ConfigError, PanZoomError};
pub use events::{Emitter, EventKind, ListenerId, PanZoomEvent};
pub use host::{Disposition, Host, Listeners};
pub use input::{
    ClickInput, Key, KeyInput, KeyIntent, PointerInput, TouchInput, WheelInput,
};
pub use options::{
    DEFAULT_PINCH_SPEED, DEFAULT_ZOOM_DOUBLE_CLICK_SPEED, DEFAULT_ZOOM_SPEED, Hooks,
    PanZoomOptions, SmoothScroll,
};

pub use panzoom_timing::{Easing, KineticSettings};
pub use panzoom_view2d::{Bounds, Transform, ZoomLimits, scale_multiplier};
