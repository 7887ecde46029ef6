// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by a [`CropController`](crate::CropController).

use crate::area::CroppedArea;
use crate::controller::CropTransform;

/// A change reported to a [`CropObserver`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CropEvent {
    /// The committed `(position, zoom)` changed. Renderers apply this as the
    /// image transform.
    TransformChanged(CropTransform),
    /// An interaction settled; carries the crop output for the committed
    /// state.
    CropComplete(CroppedArea),
}

/// A callback sink for controller notifications.
///
/// The controller calls [`CropObserver::notify`] synchronously, after each
/// committed mutation and never with a partially updated state. Any
/// `FnMut(CropEvent)` closure is an observer.
pub trait CropObserver {
    /// Called once per emitted event.
    fn notify(&mut self, event: CropEvent);
}

impl<F> CropObserver for F
where
    F: FnMut(CropEvent),
{
    fn notify(&mut self, event: CropEvent) {
        self(event);
    }
}

/// Observer that ignores every event.
///
/// Use this when the caller polls [`CropController::transform`] and
/// [`CropController::cropped_area`] instead of reacting to notifications.
///
/// [`CropController::transform`]: crate::CropController::transform
/// [`CropController::cropped_area`]: crate::CropController::cropped_area
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl CropObserver for NoopObserver {
    fn notify(&mut self, _event: CropEvent) {}
}
