// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state machine: pointer drag and wheel zoom over a crop box.
//!
//! ## Usage
//!
//! 1) Create a [`CropController`] from a [`CropConfig`].
//! 2) Tell it where the container sits with [`CropController::set_container`]
//!    and what the image looks like with [`CropController::set_image`].
//! 3) Forward pointer and wheel input: [`CropController::pointer_down`],
//!    [`CropController::pointer_move`], [`CropController::pointer_up`] and
//!    [`CropController::wheel`].
//! 4) Render with [`CropController::transform`] and read the output from
//!    [`CropController::cropped_area`], or react to [`CropEvent`]s.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use understory_crop::{CropConfig, CropController, ImageSize};
//!
//! let mut crop = CropController::new(CropConfig::default()).unwrap();
//! crop.set_container(Rect::new(0.0, 0.0, 1000.0, 600.0)).unwrap();
//! crop.set_image(ImageSize::new(1000.0, 524.0, 3000.0, 1572.0)).unwrap();
//!
//! crop.pointer_down(Point::new(500.0, 300.0));
//! crop.pointer_move(Point::new(550.0, 300.0));
//! crop.pointer_up();
//! assert_eq!(crop.position(), Vec2::new(50.0, 0.0));
//!
//! // Zoom in with the pointer on the container center.
//! crop.wheel(-100.0, Point::new(500.0, 300.0));
//! assert_eq!(crop.zoom(), 1.5);
//! ```

use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::area::{CroppedArea, compute_cropped_area};
use crate::config::{CropConfig, CropError};
use crate::geometry::{crop_size, restrict_position};
use crate::image::ImageSize;
use crate::observer::{CropEvent, CropObserver, NoopObserver};

/// Wheel delta that changes zoom by `1.0` at a zoom speed of `1.0`.
const WHEEL_DELTA_PER_ZOOM: f64 = 200.0;

/// Committed pan/zoom state, as applied by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropTransform {
    /// Pan offset of the image center from the crop box center, in view pixels.
    pub position: Vec2,
    /// Uniform image scale.
    pub zoom: f64,
}

impl CropTransform {
    /// Image transform relative to the image center: scale, then translate.
    ///
    /// Equivalent to CSS `translate(x, y) scale(zoom)` with a centered
    /// transform origin.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.position) * Affine::scale(self.zoom)
    }
}

/// Pointer interaction state of a [`CropController`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Last pointer position seen; move deltas are taken from here.
        last_pointer: Point,
    },
}

#[derive(Clone, Copy, Debug)]
struct Layout {
    image: ImageSize,
    crop_size: Size,
}

/// Owns the live `(position, zoom)` of a crop widget and updates it from
/// pointer and wheel input.
///
/// Every mutation is passed through [`restrict_position`] (unless
/// [`CropConfig::restrict_position`] is off) before it is committed, so the
/// crop box keeps covering the image. Committed changes are reported to the
/// observer as [`CropEvent::TransformChanged`]; the end of a drag, a wheel
/// step and an image load also report [`CropEvent::CropComplete`].
///
/// Input that arrives before an image is known is ignored. Event handlers
/// never fail; configuration and layout setters validate their input and
/// leave the controller untouched on error.
pub struct CropController<O = NoopObserver> {
    config: CropConfig,
    container: Option<Rect>,
    layout: Option<Layout>,
    position: Vec2,
    zoom: f64,
    state: InteractionState,
    observer: O,
}

impl<O> fmt::Debug for CropController<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropController")
            .field("config", &self.config)
            .field("container", &self.container)
            .field("layout", &self.layout)
            .field("position", &self.position)
            .field("zoom", &self.zoom)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CropController {
    /// Creates a controller without an observer.
    pub fn new(config: CropConfig) -> Result<Self, CropError> {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: CropObserver> CropController<O> {
    /// Creates a controller that reports changes to `observer`.
    ///
    /// The initial zoom is clamped into the configured range. The initial
    /// position is restricted once an image is set.
    pub fn with_observer(config: CropConfig, observer: O) -> Result<Self, CropError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected crop configuration: {err}");
            return Err(err);
        }
        Ok(Self {
            config,
            container: None,
            layout: None,
            position: config.initial_position,
            zoom: config.initial_zoom.clamp(config.min_zoom, config.max_zoom),
            state: InteractionState::Idle,
            observer,
        })
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Committed pan position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Committed zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Committed `(position, zoom)` pair.
    #[must_use]
    pub fn transform(&self) -> CropTransform {
        CropTransform {
            position: self.position,
            zoom: self.zoom,
        }
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging { .. })
    }

    /// Container rectangle in client coordinates, if set.
    #[must_use]
    pub fn container(&self) -> Option<Rect> {
        self.container
    }

    /// Image size, if an image has been set.
    #[must_use]
    pub fn image_size(&self) -> Option<ImageSize> {
        self.layout.map(|l| l.image)
    }

    /// Displayed crop box size, if an image has been set.
    #[must_use]
    pub fn crop_size(&self) -> Option<Size> {
        self.layout.map(|l| l.crop_size)
    }

    /// Shared access to the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the controller and returns its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Crop output for the committed state, if an image has been set.
    #[must_use]
    pub fn cropped_area(&self) -> Option<CroppedArea> {
        let layout = self.layout?;
        Some(compute_cropped_area(
            self.position,
            &layout.image,
            layout.crop_size,
            self.config.aspect,
            self.zoom,
            self.config.restrict_position,
        ))
    }

    /// Reports [`CropEvent::CropComplete`] for the committed state.
    ///
    /// Does nothing before an image is set.
    pub fn emit_crop_complete(&mut self) {
        if let Some(area) = self.cropped_area() {
            self.observer.notify(CropEvent::CropComplete(area));
        }
    }

    /// Sets the container rectangle in client coordinates.
    ///
    /// Wheel zoom anchors on pointer offsets from the container center.
    pub fn set_container(&mut self, container: Rect) -> Result<(), CropError> {
        if !container.is_finite() || container.width() <= 0.0 || container.height() <= 0.0 {
            log::warn!("rejected crop container {container:?}");
            return Err(CropError::InvalidContainer);
        }
        if self.container != Some(container) {
            log::debug!("crop container set to {container:?}");
            self.container = Some(container);
        }
        Ok(())
    }

    /// Sets the image size after a load or a relayout.
    ///
    /// Recomputes the crop box, re-restricts the current position against the
    /// new bounds, and reports the resulting crop output.
    pub fn set_image(&mut self, image: ImageSize) -> Result<(), CropError> {
        if !image.is_valid() {
            log::warn!("rejected crop image size {image:?}");
            return Err(CropError::InvalidImageSize);
        }
        let crop_size = crop_size(image.width, image.height, self.config.aspect);
        log::debug!(
            "crop image {}x{} (natural {}x{}), crop box {}x{}",
            image.width,
            image.height,
            image.natural_width,
            image.natural_height,
            crop_size.width,
            crop_size.height
        );
        self.layout = Some(Layout { image, crop_size });
        self.commit(self.position, self.zoom);
        self.emit_crop_complete();
        Ok(())
    }

    /// Replaces the configuration, keeping the current position and zoom.
    ///
    /// The zoom is clamped into the new range, the crop box is recomputed for
    /// the new aspect, and the position is re-restricted. `initial_position`
    /// and `initial_zoom` are only used at construction.
    pub fn set_config(&mut self, config: CropConfig) -> Result<(), CropError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected crop configuration: {err}");
            return Err(err);
        }
        self.config = config;
        if let Some(layout) = &mut self.layout {
            layout.crop_size = crop_size(layout.image.width, layout.image.height, config.aspect);
        }
        let zoom = self.zoom.clamp(config.min_zoom, config.max_zoom);
        self.commit(self.position, zoom);
        Ok(())
    }

    /// Changes the crop aspect ratio.
    pub fn set_aspect(&mut self, aspect: f64) -> Result<(), CropError> {
        self.set_config(self.config.with_aspect(aspect))
    }

    /// Sets the pan position directly; the value is restricted before it is
    /// committed.
    pub fn set_position(&mut self, position: Vec2) -> Result<(), CropError> {
        if !position.is_finite() {
            log::warn!("rejected crop position {position:?}");
            return Err(CropError::InvalidPosition(position));
        }
        self.commit(position, self.zoom);
        Ok(())
    }

    /// Sets the zoom directly, clamped into the configured range.
    ///
    /// The position is not anchored to any point; it is only re-restricted at
    /// the new zoom.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), CropError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            log::warn!("rejected crop zoom {zoom}");
            return Err(CropError::InvalidZoom(zoom));
        }
        let zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        self.commit(self.position, zoom);
        Ok(())
    }

    /// Pointer pressed on the image surface: starts a drag.
    pub fn pointer_down(&mut self, pointer: Point) {
        if self.layout.is_none() || !pointer.is_finite() {
            log::trace!("crop pointer down ignored at {pointer:?}");
            return;
        }
        log::debug!("crop drag started at ({}, {})", pointer.x, pointer.y);
        self.state = InteractionState::Dragging {
            last_pointer: pointer,
        };
    }

    /// Pointer moved: pans by the delta since the previous pointer position
    /// while dragging.
    pub fn pointer_move(&mut self, pointer: Point) {
        let InteractionState::Dragging { last_pointer } = self.state else {
            return;
        };
        if !pointer.is_finite() {
            return;
        }
        let delta = pointer - last_pointer;
        self.state = InteractionState::Dragging {
            last_pointer: pointer,
        };
        self.commit(self.position + delta, self.zoom);
    }

    /// Pointer released: ends the drag and reports the crop output.
    pub fn pointer_up(&mut self) {
        self.end_drag();
    }

    /// Pointer left the container: ends the drag like [`Self::pointer_up`].
    pub fn pointer_leave(&mut self) {
        self.end_drag();
    }

    /// Wheel input at `pointer` (client coordinates): zooms around the
    /// pointer and reports the crop output.
    ///
    /// A negative `delta_y` zooms in. The drag state is left as is. A step
    /// that leaves position and zoom unchanged, such as zooming in further at
    /// `max_zoom`, reports nothing.
    ///
    /// The image point under the pointer stays put. With `offset` the pointer
    /// relative to the container center, that image point is
    /// `(offset - position) / zoom` before the change and must equal
    /// `(offset - new_position) / new_zoom` after it, which solves to
    /// `new_position = offset - (offset - position) * new_zoom / zoom`.
    /// Restriction is applied afterwards and may move the point.
    pub fn wheel(&mut self, delta_y: f64, pointer: Point) {
        let Some(container) = self.container else {
            log::trace!("crop wheel ignored without a container");
            return;
        };
        if self.layout.is_none() || !delta_y.is_finite() || !pointer.is_finite() {
            log::trace!("crop wheel ignored at {pointer:?}");
            return;
        }
        let offset = pointer - container.center();
        let new_zoom = (self.zoom - delta_y * self.config.zoom_speed / WHEEL_DELTA_PER_ZOOM)
            .clamp(self.config.min_zoom, self.config.max_zoom);
        let candidate = offset - (offset - self.position) * (new_zoom / self.zoom);
        if self.commit(candidate, new_zoom) {
            self.emit_crop_complete();
        }
    }

    fn end_drag(&mut self) {
        if !self.is_dragging() {
            return;
        }
        log::debug!(
            "crop drag ended at ({}, {})",
            self.position.x,
            self.position.y
        );
        self.state = InteractionState::Idle;
        self.emit_crop_complete();
    }

    /// Restricts `position` at `zoom`, stores both, and reports the change.
    ///
    /// Returns `false` if the committed state did not change.
    fn commit(&mut self, position: Vec2, zoom: f64) -> bool {
        let position = match self.layout {
            Some(layout) if self.config.restrict_position => {
                restrict_position(position, &layout.image, layout.crop_size, zoom)
            }
            _ => position,
        };
        if position == self.position && zoom == self.zoom {
            return false;
        }
        log::trace!(
            "crop commit position ({}, {}) zoom {zoom}",
            position.x,
            position.y
        );
        self.position = position;
        self.zoom = zoom;
        self.observer.notify(CropEvent::TransformChanged(self.transform()));
        true
    }
}
