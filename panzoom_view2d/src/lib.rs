// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panzoom_view2d --heading-base-level=0

//! Panzoom View 2D: the headless transform model behind pan/zoom.
//!
//! This crate owns the math of a single panned and zoomed element:
//! - [`Transform`]: translate x/y plus a uniform scale.
//! - [`ZoomLimits`] and [`scale_multiplier`]: how input deltas turn into
//!   scale ratios and how those ratios are clamped.
//! - [`Bounds`]: a containment rectangle the content may not fully leave.
//! - [`PanZoomView`]: the state plus constraints, with focal-point zoom,
//!   fitting and centering.
//!
//! It does **not** read layout or touch any element. Callers gather a
//! [`Scene`] (owner rect, content bbox, optional screen matrix) from their
//! element for each operation and apply the resulting [`Transform`]
//! themselves. The `panzoom` crate does exactly that.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use panzoom_view2d::{Bounds, PanZoomView, Scene, Transform};
//!
//! let scene = Scene::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Rect::new(0.0, 0.0, 400.0, 300.0),
//! );
//! let mut view = PanZoomView::new(Transform::IDENTITY);
//! view.set_bounds(Bounds::Container);
//!
//! // Zoom in 2x about the cursor.
//! view.zoom_by_ratio(Point::new(200.0, 150.0), 2.0, &scene).unwrap();
//! assert_eq!(view.transform().scale, 2.0);
//!
//! // Fit the content back into the owner.
//! view.autocenter(&scene);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and there is no rotation.
//! - The zoom ratio is clamped (not just the resulting scale) so that the
//!   focal point stays consistent with the applied scale.
//! - When the bounds move the content during a zoom step, that step keeps
//!   its old scale. The hard containment setup (padding `1`, minimum zoom
//!   `1`) is the only exception.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod error;
mod transform;
mod view;
mod zoom;

pub use bounds::{Bounds, DEFAULT_BOUNDS_PADDING, keep_inside};
pub use error::GeometryError;
pub use transform::Transform;
pub use view::{PanZoomView, Scene};
pub use zoom::{ClampedRatio, MAX_TICK_CHANGE, ZoomLimits, scale_multiplier, to_model_space};
