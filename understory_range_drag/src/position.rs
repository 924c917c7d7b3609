// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input and page-position sampling.

use kurbo::Point;
use smallvec::SmallVec;

/// Raw pointer payload of an input event.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// A direct pointer (mouse or pen) at a page position.
    Mouse {
        /// Page-relative position.
        page: Point,
    },
    /// A multi-touch event carrying its active touches in order.
    Touch {
        /// Page-relative touch positions; only the first one is sampled.
        touches: SmallVec<[Point; 2]>,
    },
}

impl PointerInput {
    /// Page position of the pointer, or of the first touch.
    ///
    /// Returns `None` for a touch event with an empty touch list.
    #[must_use]
    pub fn page_position(&self) -> Option<Point> {
        match self {
            Self::Mouse { page } => Some(*page),
            Self::Touch { touches } => touches.first().copied(),
        }
    }
}

/// An input event delivered to the drag controller.
///
/// The two flags mirror the host toolkit's propagation controls. The controller sets
/// them; the host is expected to honor them after the call returns.
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent {
    /// Pointer payload.
    pub input: PointerInput,
    /// Set when the event should not propagate to ancestors.
    pub propagation_stopped: bool,
    /// Set when the host's default action should be skipped.
    pub default_prevented: bool,
}

impl InputEvent {
    /// Creates an event from a pointer payload with both flags cleared.
    #[must_use]
    pub const fn new(input: PointerInput) -> Self {
        Self {
            input,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// Creates a mouse event at `page`.
    #[must_use]
    pub const fn mouse(page: Point) -> Self {
        Self::new(PointerInput::Mouse { page })
    }

    /// Creates a touch event from its touch positions.
    #[must_use]
    pub fn touch(touches: impl IntoIterator<Item = Point>) -> Self {
        Self::new(PointerInput::Touch {
            touches: touches.into_iter().collect(),
        })
    }

    /// Page position of this event; see [`PointerInput::page_position`].
    #[must_use]
    pub fn page_position(&self) -> Option<Point> {
        self.input.page_position()
    }

    /// Marks the event as not propagating further.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Marks the host's default handling as skipped.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_reads_page_position() {
        let ev = InputEvent::mouse(Point::new(3.0, 4.0));
        assert_eq!(ev.page_position(), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn touch_uses_first_touch() {
        let ev = InputEvent::touch([Point::new(10.0, 20.0), Point::new(99.0, 99.0)]);
        assert_eq!(ev.page_position(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn empty_touch_list_has_no_position() {
        let ev = InputEvent::touch([Point::ZERO; 0]);
        assert_eq!(ev.page_position(), None);
    }

    #[test]
    fn flags_start_cleared() {
        let mut ev = InputEvent::mouse(Point::ZERO);
        assert!(!ev.propagation_stopped && !ev.default_prevented, "fresh event has no flags");
        ev.stop_propagation();
        ev.prevent_default();
        assert!(ev.propagation_stopped);
        assert!(ev.default_prevented);
    }
}
