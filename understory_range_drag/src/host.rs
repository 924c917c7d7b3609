// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host side of the controller: geometry, value transforms, and change callbacks.

use alloc::vec::Vec;

use kurbo::Size;

/// How the `distance` passed to [`SliderHost::offset_values`] is measured.
///
/// Pointer drags only ever produce [`OffsetMode::Distance`]; other modes, such as the
/// step counts keyboard adjustment would use, may be added later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OffsetMode {
    /// `distance` is in value units.
    Distance,
}

/// Result of offsetting a single handle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandleOffset {
    /// The full value vector after the offset.
    pub values: Vec<f64>,
    /// The resulting value of the offset handle.
    pub value: f64,
}

/// Collaborators the controller calls back into while a gesture is active.
///
/// The host is passed to every event call rather than stored, so handlers always run
/// against the host's current logic without listeners being re-registered.
pub trait SliderHost {
    /// Current size of the slider container.
    ///
    /// Queried on every move so that resizes during a drag are honored. `None` skips the
    /// move.
    fn container_size(&self) -> Option<Size>;

    /// Quantizes a raw value to the nearest allowed value.
    ///
    /// Only used by whole-range drags; single-handle drags quantize inside
    /// [`offset_values`](Self::offset_values).
    fn format_value(&self, value: f64) -> f64;

    /// Moves the handle at `index` by `distance`, enforcing bounds, ordering against
    /// neighboring handles, and quantization.
    fn offset_values(
        &self,
        values: &[f64],
        distance: f64,
        index: usize,
        mode: OffsetMode,
    ) -> HandleOffset;

    /// Called for every committed intermediate change.
    fn trigger_change(&mut self, values: &[f64]);

    /// Called once at the end of each gesture.
    fn finish_change(&mut self);
}
