// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Translate + uniform scale applied to the panned content.
///
/// A point `p` in the content's local units lands at
/// `p * scale + (x, y)` in the owner's client space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Horizontal translation in client units.
    pub x: f64,
    /// Vertical translation in client units.
    pub y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Transform {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a transform from its translation and scale.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Seeds a transform from an existing matrix, keeping only the
    /// horizontal scale and the translation terms.
    ///
    /// Rotation and skew terms are ignored.
    #[must_use]
    pub fn from_affine(affine: Affine) -> Self {
        let [a, _, _, _, e, f] = affine.as_coeffs();
        Self::new(e, f, a)
    }

    /// Returns the equivalent affine matrix.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::new([self.scale, 0.0, 0.0, self.scale, self.x, self.y])
    }

    /// Returns the translation as a point.
    #[must_use]
    pub fn translation(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves the translation by `delta`.
    pub fn translate_by(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Maps a point in content-local units into client space.
    #[must_use]
    pub fn client_point(&self, local: Point) -> Point {
        Point::new(
            local.x * self.scale + self.x,
            local.y * self.scale + self.y,
        )
    }

    /// Maps the content bounding box into client space.
    #[must_use]
    pub fn client_rect(&self, bbox: Rect) -> Rect {
        let top_left = self.client_point(bbox.origin());
        Rect::new(
            top_left.x,
            top_left.y,
            bbox.width() * self.scale + top_left.x,
            bbox.height() * self.scale + top_left.y,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
