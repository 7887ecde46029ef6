// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_crop --heading-base-level=0

//! Understory Crop: headless geometry and interaction for image crop widgets.
//!
//! An image is shown inside a fixed container with a crop box centered on top
//! of it. The user pans the image by dragging and zooms it with the wheel; the
//! crop box never moves. This crate owns the math behind that:
//! - Sizing the crop box for a target aspect ratio ([`crop_size`]).
//! - Clamping the pan position so the crop box always covers the image
//!   ([`restrict_position`]).
//! - Projecting the framed region into percentages and natural image pixels
//!   ([`compute_cropped_area`]).
//! - A small state machine that turns pointer and wheel input into pan/zoom
//!   updates, keeping the image point under the pointer fixed while zooming
//!   ([`CropController`]).
//!
//! It does **not** decode or crop bitmaps, draw anything, or listen to input
//! devices. Callers are expected to:
//! - Measure the container and the displayed image and pass them in as a
//!   [`kurbo::Rect`] and an [`ImageSize`].
//! - Forward pointer and wheel events in client coordinates.
//! - Apply [`CropTransform::to_affine`] to the image when rendering, and use
//!   [`CroppedArea::pixels`] to crop the source image.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_crop::{CropConfig, CropController, CropEvent, ImageSize};
//!
//! let mut completed = None;
//! let mut crop = CropController::with_observer(CropConfig::default(), |event: CropEvent| {
//!     if let CropEvent::CropComplete(area) = event {
//!         completed = Some(area);
//!     }
//! })
//! .unwrap();
//!
//! // A 4096x2145 photo laid out in a 1000x600 container.
//! let container = Rect::new(0.0, 0.0, 1000.0, 600.0);
//! let image = ImageSize::contain(Size::new(4096.0, 2145.0), container.size()).snap_to_pixels();
//! crop.set_container(container).unwrap();
//! crop.set_image(image).unwrap();
//!
//! // Zoom in around the top-left corner, then drag.
//! crop.wheel(-100.0, Point::new(0.0, 0.0));
//! crop.pointer_down(Point::new(500.0, 300.0));
//! crop.pointer_move(Point::new(450.0, 300.0));
//! crop.pointer_up();
//!
//! assert_eq!(crop.zoom(), 1.5);
//! assert_eq!(crop.position(), Vec2::new(200.0, 131.0));
//! drop(crop);
//! assert!(completed.is_some());
//! ```
//!
//! ## Coordinate model
//!
//! - The pan position is the offset of the image center from the crop box
//!   center, in view pixels. Both are centered in the container at rest.
//! - Zoom is a uniform scale about the image center.
//! - Pointer positions are client coordinates; wheel zoom anchors on the
//!   pointer's offset from the container center.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for configuration and output types.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod area;
mod config;
mod controller;
mod geometry;
mod image;
mod observer;

pub use area::{CropArea, CroppedArea, compute_cropped_area};
pub use config::{CropConfig, CropError, CropShape};
pub use controller::{CropController, CropTransform, InteractionState};
pub use geometry::{center_of, crop_size, distance_between, max_offset, restrict_position};
pub use image::ImageSize;
pub use observer::{CropEvent, CropObserver, NoopObserver};
