// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure crop-box geometry: sizing the crop box and clamping the pan position.

use kurbo::{Point, Size, Vec2};

use crate::image::ImageSize;

/// Returns the displayed crop-box size for an image of `img_width` by
/// `img_height` pixels and a target `aspect` (width / height).
///
/// The crop box is as large as possible while fitting inside the image:
/// - When the image is relatively wide (`img_width >= img_height * aspect`),
///   the crop box takes the full image height.
/// - Otherwise it takes the full image width.
///
/// `aspect` must be positive and finite; [`CropConfig::validate`] enforces
/// this for values flowing through a [`CropController`].
///
/// [`CropConfig::validate`]: crate::CropConfig::validate
/// [`CropController`]: crate::CropController
///
/// ```rust
/// use understory_crop::crop_size;
///
/// let size = crop_size(1000.0, 524.0, 4.0 / 3.0);
/// assert_eq!(size.height, 524.0);
/// assert!((size.width - 698.666_666).abs() < 1e-3);
/// ```
#[must_use]
pub fn crop_size(img_width: f64, img_height: f64, aspect: f64) -> Size {
    if img_width >= img_height * aspect {
        Size::new(img_height * aspect, img_height)
    } else {
        Size::new(img_width, img_width / aspect)
    }
}

/// Clamps a candidate pan `position` so the crop box never exposes area
/// outside the image at the given `zoom`.
///
/// Each axis is handled independently with
/// `max = image_dim * zoom / 2 - crop_dim / 2` and the position is limited to
/// `[-max, max]`.
///
/// When the scaled image is smaller than the crop box along an axis, `max` is
/// negative and the result collapses to exactly `max` on that axis. This is
/// what pulls the image back when zooming out below the crop box's native fit.
#[must_use]
pub fn restrict_position(
    position: Vec2,
    image_size: &ImageSize,
    crop_size: Size,
    zoom: f64,
) -> Vec2 {
    Vec2::new(
        restrict_position_coord(position.x, image_size.width, crop_size.width, zoom),
        restrict_position_coord(position.y, image_size.height, crop_size.height, zoom),
    )
}

/// Returns the largest pan offset allowed along one axis.
#[must_use]
pub fn max_offset(image_dim: f64, crop_dim: f64, zoom: f64) -> f64 {
    (image_dim * zoom) / 2.0 - crop_dim / 2.0
}

fn restrict_position_coord(position: f64, image_dim: f64, crop_dim: f64, zoom: f64) -> f64 {
    let max = max_offset(image_dim, crop_dim, zoom);
    // Not `f64::clamp`: that panics when the bound inverts.
    position.max(-max).min(max)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance_between(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Point halfway between `a` and `b`.
#[must_use]
pub fn center_of(a: Point, b: Point) -> Point {
    a.midpoint(b)
}
