// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by [`crate::PanZoomView`] operations given unusable input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A zoom focal point or ratio was NaN or infinite.
    NonFiniteZoom,
    /// A rectangle to fit had a non-finite width or height.
    InvalidRectangle,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteZoom => f.write_str("zoom requires valid numbers"),
            Self::InvalidRectangle => f.write_str("invalid rectangle: extents must be finite"),
        }
    }
}

impl core::error::Error for GeometryError {}
