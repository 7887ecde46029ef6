// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Displayed and intrinsic image dimensions, and container-fit layout.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Size;

/// Displayed and intrinsic dimensions of the image being cropped.
///
/// `width`/`height` are the on-screen size of the image at zoom `1.0`;
/// `natural_width`/`natural_height` are the image's intrinsic pixel size and
/// are only used to project the crop output into source pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Displayed width in view pixels.
    pub width: f64,
    /// Displayed height in view pixels.
    pub height: f64,
    /// Intrinsic width in source pixels.
    pub natural_width: f64,
    /// Intrinsic height in source pixels.
    pub natural_height: f64,
}

impl ImageSize {
    /// Creates an image size from displayed and natural dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64, natural_width: f64, natural_height: f64) -> Self {
        Self {
            width,
            height,
            natural_width,
            natural_height,
        }
    }

    /// Lays out an image of `natural` size inside a `container`, scaling it
    /// uniformly so it fits entirely (the `contain` fit of most layout
    /// engines).
    ///
    /// ```rust
    /// use kurbo::Size;
    /// use understory_crop::ImageSize;
    ///
    /// let tall = ImageSize::contain(Size::new(1083.0, 1920.0), Size::new(1000.0, 600.0));
    /// assert_eq!(tall.height, 600.0);
    /// assert_eq!(tall.width, 338.4375);
    /// ```
    #[must_use]
    pub fn contain(natural: Size, container: Size) -> Self {
        let scale = (container.width / natural.width).min(container.height / natural.height);
        Self::new(
            natural.width * scale,
            natural.height * scale,
            natural.width,
            natural.height,
        )
    }

    /// Rounds the displayed size to whole view pixels.
    ///
    /// Hosts usually report element sizes as integers, and the crop box is
    /// sized from those reported values.
    #[must_use]
    pub fn snap_to_pixels(self) -> Self {
        Self {
            width: self.width.round(),
            height: self.height.round(),
            ..self
        }
    }

    /// Displayed size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Intrinsic size.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }

    /// Returns `true` when all four dimensions are finite and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [
            self.width,
            self.height,
            self.natural_width,
            self.natural_height,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    }
}
