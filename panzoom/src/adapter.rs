// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry adapters: how a [`Transform`] reaches an [`Element`].

use kurbo::{Affine, Point, Rect};
use panzoom_view2d::Transform;

use crate::element::{Element, ElementKind};
use crate::error::ConfigError;

/// Reads the geometry the engine needs and writes the transform back.
pub trait GeometryAdapter<E: Element + ?Sized> {
    /// The owner's layout rectangle.
    fn owner_rect(&self, element: &E) -> Rect {
        element.owner_client_rect()
    }

    /// The content's bounding box in local units.
    fn bbox(&self, element: &E) -> Rect;

    /// Matrix from owner-relative points to model space, when one applies.
    fn screen_ctm(&self, _element: &E) -> Option<Affine> {
        None
    }

    /// One-time setup when the engine is created.
    ///
    /// Makes the owner focusable when `focusable` is set.
    fn attach(&self, element: &mut E, focusable: bool) {
        if focusable {
            element.set_owner_attribute("tabindex", "0");
        }
    }

    /// Seeds `transform` from whatever transform the element already has.
    fn init_transform(&self, _element: &mut E, _transform: &mut Transform) {}

    /// Writes `transform` to the element.
    fn apply_transform(&self, element: &mut E, transform: Transform);
}

/// Adapter for plain layout elements, styled with a CSS `transform`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainAdapter;

impl<E: Element + ?Sized> GeometryAdapter<E> for PlainAdapter {
    fn bbox(&self, element: &E) -> Rect {
        Rect::from_origin_size(Point::ZERO, element.client_size())
    }

    fn attach(&self, element: &mut E, focusable: bool) {
        element.reset_scroll();
        if focusable {
            element.set_owner_attribute("tabindex", "0");
        }
    }

    fn apply_transform(&self, element: &mut E, t: Transform) {
        element.set_style("transform-origin", "0 0 0");
        element.set_style(
            "transform",
            &format!("matrix({}, 0, 0, {}, {}, {})", t.scale, t.scale, t.x, t.y),
        );
    }
}

/// Adapter for graphics elements inside an `<svg>`, written as an attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphicsAdapter;

impl<E: Element + ?Sized> GeometryAdapter<E> for GraphicsAdapter {
    fn bbox(&self, element: &E) -> Rect {
        element.bbox()
    }

    fn screen_ctm(&self, element: &E) -> Option<Affine> {
        element.owner_ctm().or_else(|| element.owner_screen_ctm())
    }

    fn init_transform(&self, element: &mut E, transform: &mut Transform) {
        *transform = Transform::from_affine(element.ctm().unwrap_or(Affine::IDENTITY));
        element.remove_owner_attribute("viewBox");
    }

    fn apply_transform(&self, element: &mut E, t: Transform) {
        element.set_attribute(
            "transform",
            &format!("matrix({} 0 0 {} {} {})", t.scale, t.scale, t.x, t.y),
        );
    }
}

/// Which adapter an engine uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    /// [`PlainAdapter`].
    #[default]
    Plain,
    /// [`GraphicsAdapter`].
    Graphics,
}

impl AdapterKind {
    /// Picks the adapter for an element kind.
    pub fn select(kind: ElementKind) -> Result<Self, ConfigError> {
        match kind {
            ElementKind::Html | ElementKind::SvgRoot => Ok(Self::Plain),
            ElementKind::SvgGraphics => Ok(Self::Graphics),
            ElementKind::Detached => Err(ConfigError::UnsupportedElement),
        }
    }
}

impl<E: Element + ?Sized> GeometryAdapter<E> for AdapterKind {
    fn owner_rect(&self, element: &E) -> Rect {
        match self {
            Self::Plain => PlainAdapter.owner_rect(element),
            Self::Graphics => GraphicsAdapter.owner_rect(element),
        }
    }

    fn bbox(&self, element: &E) -> Rect {
        match self {
            Self::Plain => PlainAdapter.bbox(element),
            Self::Graphics => GraphicsAdapter.bbox(element),
        }
    }

    fn screen_ctm(&self, element: &E) -> Option<Affine> {
        match self {
            Self::Plain => PlainAdapter.screen_ctm(element),
            Self::Graphics => GraphicsAdapter.screen_ctm(element),
        }
    }

    fn attach(&self, element: &mut E, focusable: bool) {
        match self {
            Self::Plain => PlainAdapter.attach(element, focusable),
            Self::Graphics => GraphicsAdapter.attach(element, focusable),
        }
    }

    fn init_transform(&self, element: &mut E, transform: &mut Transform) {
        match self {
            Self::Plain => PlainAdapter.init_transform(element, transform),
            Self::Graphics => GraphicsAdapter.init_transform(element, transform),
        }
    }

    fn apply_transform(&self, element: &mut E, transform: Transform) {
        match self {
            Self::Plain => PlainAdapter.apply_transform(element, transform),
            Self::Graphics => GraphicsAdapter.apply_transform(element, transform),
        }
    }
}
