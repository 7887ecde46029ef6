// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Vec2;

/// Shape of the crop overlay drawn by the rendering layer.
///
/// The engine itself always works with the rectangular crop box; a round
/// overlay is inscribed in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CropShape {
    /// Rectangular overlay.
    #[default]
    Rect,
    /// Elliptical overlay inscribed in the crop box.
    Round,
}

/// Configuration for a [`CropController`](crate::CropController).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropConfig {
    /// Target crop aspect ratio (width / height). Must be positive.
    pub aspect: f64,
    /// Smallest allowed zoom factor.
    pub min_zoom: f64,
    /// Largest allowed zoom factor.
    pub max_zoom: f64,
    /// Multiplier applied to wheel deltas.
    pub zoom_speed: f64,
    /// Keep the crop box inside the image while panning and zooming, and
    /// clamp the reported crop area to the image.
    pub restrict_position: bool,
    /// Overlay shape hint for the rendering layer.
    pub crop_shape: CropShape,
    /// Whether the rendering layer should draw rule-of-thirds grid lines.
    pub show_grid: bool,
    /// Pan position applied when the controller is created.
    pub initial_position: Vec2,
    /// Zoom applied when the controller is created.
    pub initial_zoom: f64,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            aspect: 4.0 / 3.0,
            min_zoom: 1.0,
            max_zoom: 3.0,
            zoom_speed: 1.0,
            restrict_position: true,
            crop_shape: CropShape::Rect,
            show_grid: true,
            initial_position: Vec2::ZERO,
            initial_zoom: 1.0,
        }
    }
}

impl CropConfig {
    /// Returns a copy of this configuration with a different aspect ratio.
    #[must_use]
    pub fn with_aspect(self, aspect: f64) -> Self {
        Self { aspect, ..self }
    }

    /// Returns a copy of this configuration with different zoom limits.
    #[must_use]
    pub fn with_zoom_limits(self, min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            min_zoom,
            max_zoom,
            ..self
        }
    }

    /// Checks that every value can produce well-defined geometry.
    ///
    /// Rejects non-positive or non-finite aspect ratios, zoom limits and zoom
    /// speeds, an inverted zoom range, and a non-finite initial position.
    /// `initial_zoom` only needs to be positive and finite; it is clamped into
    /// the zoom range when applied.
    pub fn validate(&self) -> Result<(), CropError> {
        if !is_positive(self.aspect) {
            return Err(CropError::InvalidAspect(self.aspect));
        }
        if !is_positive(self.min_zoom) || !is_positive(self.max_zoom) || self.max_zoom < self.min_zoom
        {
            return Err(CropError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !is_positive(self.zoom_speed) {
            return Err(CropError::InvalidZoomSpeed(self.zoom_speed));
        }
        if !is_positive(self.initial_zoom) {
            return Err(CropError::InvalidZoom(self.initial_zoom));
        }
        if !self.initial_position.is_finite() {
            return Err(CropError::InvalidPosition(self.initial_position));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Error returned when configuration or layout input would produce
/// ill-defined crop geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CropError {
    /// The aspect ratio is not a positive, finite number.
    InvalidAspect(f64),
    /// The zoom limits are not positive and finite, or `max < min`.
    InvalidZoomRange {
        /// Requested minimum zoom.
        min: f64,
        /// Requested maximum zoom.
        max: f64,
    },
    /// The wheel zoom speed is not a positive, finite number.
    InvalidZoomSpeed(f64),
    /// A zoom factor is not a positive, finite number.
    InvalidZoom(f64),
    /// A pan position has a non-finite component.
    InvalidPosition(Vec2),
    /// An image size has a non-positive or non-finite dimension.
    InvalidImageSize,
    /// The container rectangle is empty or non-finite.
    InvalidContainer,
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAspect(aspect) => {
                write!(f, "crop aspect must be positive and finite, got {aspect}")
            }
            Self::InvalidZoomRange { min, max } => {
                write!(f, "invalid zoom range {min}..={max}")
            }
            Self::InvalidZoomSpeed(speed) => {
                write!(f, "zoom speed must be positive and finite, got {speed}")
            }
            Self::InvalidZoom(zoom) => {
                write!(f, "zoom must be positive and finite, got {zoom}")
            }
            Self::InvalidPosition(pos) => {
                write!(f, "position must be finite, got ({}, {})", pos.x, pos.y)
            }
            Self::InvalidImageSize => {
                f.write_str("image dimensions must be positive and finite")
            }
            Self::InvalidContainer => {
                f.write_str("container rectangle must be non-empty and finite")
            }
        }
    }
}

impl core::error::Error for CropError {}
