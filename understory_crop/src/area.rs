// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of the live crop box into image-relative output rectangles.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Rect, Size, Vec2};

use crate::image::ImageSize;

/// An axis-aligned crop rectangle, top-left anchored.
///
/// Depending on context the units are either percent of the image or
/// natural image pixels; see [`CroppedArea`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropArea {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl CropArea {
    /// Creates a crop area from its origin and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Converts to a [`Rect`] in the same units.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// The crop output in both of its representations.
///
/// Both rectangles describe the same region of the source image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CroppedArea {
    /// Region as a percentage (`0..=100`) of the image dimensions.
    pub percentages: CropArea,
    /// Region in natural image pixels.
    pub pixels: CropArea,
}

/// Computes the region of the image currently framed by the crop box.
///
/// - `position` is the pan offset of the image center relative to the crop
///   box center, in view pixels.
/// - `image_size` supplies both the displayed size (used for the percentage
///   rectangle) and the natural size (used for the pixel rectangle).
/// - `crop_size` is the displayed crop box size, usually from
///   [`crop_size`](crate::crop_size).
/// - With `restrict_to_image`, percentages are clamped into `0..=100` and
///   pixels are rounded and clamped into the natural image bounds. Without it,
///   the area may extend past the image.
///
/// The pixel size is made exact for `aspect`: one dimension is taken from the
/// percentages and the other is derived from it by rounding, so the two never
/// round independently. The driving axis is the one the crop box fills when
/// the image is shown at zoom `1.0`.
///
/// ```rust
/// use kurbo::Vec2;
/// use understory_crop::{ImageSize, compute_cropped_area, crop_size};
///
/// let image = ImageSize::new(1000.0, 524.0, 3000.0, 1572.0);
/// let aspect = 4.0 / 3.0;
/// let crop = crop_size(image.width, image.height, aspect);
/// let area = compute_cropped_area(Vec2::ZERO, &image, crop, aspect, 1.0, true);
///
/// assert_eq!(area.percentages.height, 100.0);
/// assert_eq!(area.pixels.height, 1572.0);
/// assert_eq!(area.pixels.width, 2096.0);
/// ```
#[must_use]
pub fn compute_cropped_area(
    position: Vec2,
    image_size: &ImageSize,
    crop_size: Size,
    aspect: f64,
    zoom: f64,
    restrict_to_image: bool,
) -> CroppedArea {
    let limit = |max: f64, value: f64, round: bool| {
        if restrict_to_image {
            limit_area(max, value, round)
        } else {
            value
        }
    };

    let percentages = CropArea {
        x: limit(
            100.0,
            ((image_size.width - crop_size.width / zoom) / 2.0 - position.x / zoom)
                / image_size.width
                * 100.0,
            false,
        ),
        y: limit(
            100.0,
            ((image_size.height - crop_size.height / zoom) / 2.0 - position.y / zoom)
                / image_size.height
                * 100.0,
            false,
        ),
        width: limit(
            100.0,
            crop_size.width / image_size.width * 100.0 / zoom,
            false,
        ),
        height: limit(
            100.0,
            crop_size.height / image_size.height * 100.0 / zoom,
            false,
        ),
    };

    let width_px = limit(
        image_size.natural_width,
        percentages.width * image_size.natural_width / 100.0,
        true,
    );
    let height_px = limit(
        image_size.natural_height,
        percentages.height * image_size.natural_height / 100.0,
        true,
    );

    let size_px = if image_size.natural_width >= image_size.natural_height * aspect {
        Size::new((height_px * aspect).round(), height_px)
    } else {
        Size::new(width_px, (width_px / aspect).round())
    };

    // Origins use the final pixel size so the rectangle stays inside the image.
    let pixels = CropArea {
        x: limit(
            image_size.natural_width - size_px.width,
            percentages.x * image_size.natural_width / 100.0,
            true,
        ),
        y: limit(
            image_size.natural_height - size_px.height,
            percentages.y * image_size.natural_height / 100.0,
            true,
        ),
        width: size_px.width,
        height: size_px.height,
    };

    CroppedArea {
        percentages,
        pixels,
    }
}

/// Limits `value` to `0..=max`, optionally rounding first.
fn limit_area(max: f64, value: f64, round: bool) -> f64 {
    let v = if round { value.round() } else { value };
    v.max(0.0).min(max)
}
