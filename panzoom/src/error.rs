// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use panzoom_view2d::GeometryError;

/// Error returned when options or setter arguments are unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A bounds rectangle or padding had a non-finite coordinate.
    InvalidBounds,
    /// A zoom, pinch or double-click speed was not a finite number.
    InvalidZoomSpeed,
    /// A transform origin coordinate was not a finite number.
    InvalidTransformOrigin,
    /// A zoom limit was NaN, or the minimum exceeded the maximum.
    InvalidZoomLimits,
    /// No geometry adapter handles this kind of element.
    UnsupportedElement,
    /// `initial_x`, `initial_y` or `initial_zoom` was not a finite number.
    InvalidInitialTransform,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds => f.write_str(
                "bounds are not valid: expected unbounded, container, \
                 or a rectangle with finite left, top, right and bottom",
            ),
            Self::InvalidZoomSpeed => f.write_str("zoom speed should be a finite number"),
            Self::InvalidTransformOrigin => f.write_str(
                "cannot parse transform origin. Some good examples:\n  \
                 \"center center\" can be achieved with {x: 0.5, y: 0.5}\n  \
                 \"top center\" can be achieved with {x: 0.5, y: 0}\n  \
                 \"bottom right\" can be achieved with {x: 1, y: 1}",
            ),
            Self::InvalidZoomLimits => {
                f.write_str("zoom limits must be numbers with min_zoom <= max_zoom")
            }
            Self::UnsupportedElement => {
                f.write_str("cannot create panzoom for the current type of element")
            }
            Self::InvalidInitialTransform => {
                f.write_str("initial x, y and zoom must be finite numbers")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned by runtime operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanZoomError {
    /// Zoom coordinates or ratio were NaN or infinite.
    NonFiniteZoom,
    /// A rectangle to show had non-finite extents.
    InvalidRectangle,
    /// The element to center on is not a graphics element inside a scene.
    NotInScene,
}

impl fmt::Display for PanZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteZoom => f.write_str("zoom requires valid numbers"),
            Self::InvalidRectangle => f.write_str("invalid rectangle"),
            Self::NotInScene => f.write_str("ui element is required to be within the scene"),
        }
    }
}

impl core::error::Error for PanZoomError {}

impl From<GeometryError> for PanZoomError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::NonFiniteZoom => Self::NonFiniteZoom,
            GeometryError::InvalidRectangle => Self::InvalidRectangle,
        }
    }
}
