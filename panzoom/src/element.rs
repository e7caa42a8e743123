// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element a [`PanZoom`](crate::PanZoom) engine drives.

use kurbo::{Affine, Point, Rect, Size};

/// What sort of node an [`Element`] is. Decides the geometry adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A plain layout element; its owner is the parent element.
    Html,
    /// A root `<svg>` element. Handled like a plain element.
    SvgRoot,
    /// A graphics element inside an `<svg>`; its owner is that `<svg>`.
    SvgGraphics,
    /// Not attached to any document.
    Detached,
}

/// Layout reads and style writes on the panned element and its owner.
///
/// The owner is the container that receives input and defines the viewport.
/// All rectangles are in client (viewport) coordinates unless noted.
pub trait Element {
    /// The node kind.
    fn kind(&self) -> ElementKind;

    /// The element's own bounding client rectangle.
    fn client_rect(&self) -> Rect;

    /// The owner's bounding client rectangle.
    fn owner_client_rect(&self) -> Rect;

    /// Inner layout size (`clientWidth`, `clientHeight`).
    fn client_size(&self) -> Size;

    /// Bounding box in the element's local user units (`getBBox`).
    fn bbox(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.client_size())
    }

    /// The element's current transformation matrix, if it has one.
    fn ctm(&self) -> Option<Affine> {
        None
    }

    /// The owner's transformation matrix, if it has one.
    fn owner_ctm(&self) -> Option<Affine> {
        None
    }

    /// The owner's screen transformation matrix, if it has one.
    fn owner_screen_ctm(&self) -> Option<Affine> {
        None
    }

    /// Sets an inline style property on the element.
    fn set_style(&mut self, property: &str, value: &str);

    /// Sets an attribute on the element.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Sets an attribute on the owner.
    fn set_owner_attribute(&mut self, name: &str, value: &str);

    /// Removes an attribute from the owner.
    fn remove_owner_attribute(&mut self, name: &str);

    /// Scrolls the element back to its origin.
    fn reset_scroll(&mut self) {}
}
