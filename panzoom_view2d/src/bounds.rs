// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::Transform;

/// Default fraction of the owner size kept as padding for [`Bounds::Container`].
pub const DEFAULT_BOUNDS_PADDING: f64 = 0.05;

/// Region the transformed content is not allowed to leave entirely.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Bounds {
    /// Content may move anywhere.
    #[default]
    Unbounded,
    /// The owner container, shrunk by the bounds padding on every side.
    Container,
    /// An explicit rectangle in the content's client coordinate space.
    Rect(Rect),
}

impl Bounds {
    /// Returns `true` unless this is [`Bounds::Unbounded`].
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Self::Unbounded)
    }

    /// Returns `true` when an explicit rectangle has four finite edges.
    ///
    /// The other variants are always valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Rect(r) => {
                r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()
            }
            Self::Unbounded | Self::Container => true,
        }
    }

    /// Returns the allowed rectangle for an owner of the given size.
    ///
    /// `padding` is the fraction of the owner size removed from each side
    /// for [`Bounds::Container`].
    #[must_use]
    pub fn allowed_rect(&self, owner: Size, padding: f64) -> Option<Rect> {
        match self {
            Self::Unbounded => None,
            Self::Container => Some(Rect::new(
                owner.width * padding,
                owner.height * padding,
                owner.width * (1.0 - padding),
                owner.height * (1.0 - padding),
            )),
            Self::Rect(r) => Some(*r),
        }
    }
}

/// Slides `transform` so the content never leaves `allowed` entirely.
///
/// Each edge is handled on its own: the content's right edge may not be
/// left of the allowed left edge, its left edge may not be right of the
/// allowed right edge, and likewise vertically. Returns `true` when the
/// translation changed.
pub fn keep_inside(transform: &mut Transform, content_bbox: Rect, allowed: Rect) -> bool {
    let mut adjusted = false;
    let client = transform.client_rect(content_bbox);

    let diff = allowed.x0 - client.x1;
    if diff > 0.0 {
        transform.x += diff;
        adjusted = true;
    }
    let diff = allowed.x1 - client.x0;
    if diff < 0.0 {
        transform.x += diff;
        adjusted = true;
    }

    let diff = allowed.y0 - client.y1;
    if diff > 0.0 {
        transform.y += diff;
        adjusted = true;
    }
    let diff = allowed.y1 - client.y0;
    if diff < 0.0 {
        transform.y += diff;
        adjusted = true;
    }

    adjusted
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{Bounds, keep_inside};
    use crate::Transform;

    #[test]
    fn container_bounds_shrink_by_padding() {
        let allowed = Bounds::Container.allowed_rect(Size::new(200.0, 100.0), 0.05);
        assert_eq!(allowed, Some(Rect::new(10.0, 5.0, 190.0, 95.0)));
        assert_eq!(
            Bounds::Unbounded.allowed_rect(Size::new(200.0, 100.0), 0.05),
            None
        );
    }

    #[test]
    fn explicit_rect_must_be_finite() {
        assert!(Bounds::Rect(Rect::new(0.0, 0.0, 1.0, 1.0)).is_valid());
        assert!(!Bounds::Rect(Rect::new(0.0, f64::NAN, 1.0, 1.0)).is_valid());
        assert!(!Bounds::Rect(Rect::new(0.0, 0.0, f64::INFINITY, 1.0)).is_valid());
        assert!(Bounds::Container.is_valid());
    }

    #[test]
    fn content_pushed_off_the_left_is_pulled_back() {
        let bbox = Rect::new(0.0, 0.0, 50.0, 50.0);
        let allowed = Rect::new(10.0, 10.0, 90.0, 90.0);
        let mut t = Transform::new(-100.0, 20.0, 1.0);

        assert!(keep_inside(&mut t, bbox, allowed));
        // Right edge now touches the allowed left edge.
        assert_eq!(t.x, -40.0);
        assert_eq!(t.y, 20.0);
    }

    #[test]
    fn content_pushed_past_the_bottom_right_is_pulled_back() {
        let bbox = Rect::new(0.0, 0.0, 50.0, 50.0);
        let allowed = Rect::new(10.0, 10.0, 90.0, 90.0);
        let mut t = Transform::new(200.0, 300.0, 2.0);

        assert!(keep_inside(&mut t, bbox, allowed));
        assert_eq!(t.x, 90.0);
        assert_eq!(t.y, 90.0);
    }

    #[test]
    fn overlapping_content_is_left_alone() {
        let bbox = Rect::new(0.0, 0.0, 50.0, 50.0);
        let allowed = Rect::new(10.0, 10.0, 90.0, 90.0);
        let mut t = Transform::new(30.0, -20.0, 1.0);

        assert!(!keep_inside(&mut t, bbox, allowed));
        assert_eq!(t, Transform::new(30.0, -20.0, 1.0));
    }
}
