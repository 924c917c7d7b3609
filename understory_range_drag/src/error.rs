// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when a drag cannot start.

/// Reasons [`RangeDrag::start_drag`](crate::RangeDrag::start_drag) rejects a gesture.
///
/// A rejected start leaves the controller untouched and registers no listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// The external value vector is empty, so there is nothing to drag.
    #[error("cannot drag an empty value vector")]
    EmptyValues,
    /// The handle index does not address an element of the value vector.
    #[error("handle {index} is out of range for {len} values")]
    HandleOutOfRange {
        /// Requested handle index.
        index: usize,
        /// Number of values.
        len: usize,
    },
    /// The start event carried no pointer position (a touch event without touches).
    #[error("start event has no pointer position")]
    MissingPosition,
    /// A gesture is active and the restart policy is
    /// [`RestartPolicy::Ignore`](crate::RestartPolicy::Ignore).
    #[error("a drag gesture is already in progress")]
    GestureInProgress,
}
