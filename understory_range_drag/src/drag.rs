// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag gesture state machine.
//!
//! A [`RangeDrag`] is either idle or dragging one [`DragTarget`]. A gesture runs:
//!
//! 1. [`RangeDrag::start_drag`]: snapshot the external values, remember where the pointer
//!    went down, and subscribe to document-level move/end input.
//! 2. [`RangeDrag::pointer_move`], any number of times: turn the pointer delta since the
//!    start into an offset fraction and commit the resulting values.
//! 3. [`RangeDrag::pointer_end`]: unsubscribe, go idle, and call
//!    [`SliderHost::finish_change`].
//!
//! Every move is computed from the start snapshot and the current pointer position only,
//! so repeated or dropped moves never accumulate error.
//!
//! Between gestures, [`RangeDrag::sync`] keeps the cache in step with the values the host
//! owns, and [`RangeDrag::values`] reports the reconciled vector to render.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::{
    Bounds, DragConfig, DragError, HandleOffset, InputEvent, ListenerKind, ListenerRegistry,
    Listeners, RestartPolicy, SliderHost, ValueCache, offset_handle, reconcile, shift_range,
};

/// What a gesture drags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// A single handle, by index into the value vector.
    Handle(usize),
    /// The whole range: every handle moves by the same amount.
    Range,
}

#[derive(Clone, Copy, Debug)]
struct Gesture {
    target: DragTarget,
    start: Point,
}

/// Drag controller for one range slider.
///
/// The controller owns its [`ListenerRegistry`] so that dropping it removes any
/// registrations a live gesture still holds. Share one registry between several sliders by
/// giving each an `Rc<RefCell<_>>` clone.
pub struct RangeDrag<R: ListenerRegistry> {
    config: DragConfig,
    registry: R,
    listeners: Listeners<R::Handle>,
    // Render inputs, overwritten by every `sync` and read by the event path.
    external: Vec<f64>,
    bounds: Bounds,
    cache: ValueCache,
    gesture: Option<Gesture>,
}

impl<R: ListenerRegistry> RangeDrag<R> {
    /// Creates an idle controller with no values.
    ///
    /// Call [`sync`](Self::sync) before the first render.
    #[must_use]
    pub fn new(registry: R, config: DragConfig) -> Self {
        Self {
            config,
            registry,
            listeners: Listeners::new(),
            external: Vec::new(),
            bounds: Bounds::default(),
            cache: ValueCache::default(),
            gesture: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect from the next event.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }

    /// Returns the listener registry.
    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Returns the listener registry mutably.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Feeds the externally owned values and bounds for this render.
    ///
    /// While idle the cache is reset to `values`; during a gesture the cache is left alone
    /// and [`values`](Self::values) decides which of the two to report.
    pub fn sync(&mut self, values: &[f64], bounds: Bounds) {
        if self.external != values {
            self.external.clear();
            self.external.extend_from_slice(values);
        }
        self.bounds = bounds;
        if self.cache.reset_if_idle(values, self.gesture.is_none()) {
            log::trace!("range drag cache reset to {values:?}");
        }
    }

    /// The current drag target, or `None` while idle.
    #[must_use]
    pub fn dragging(&self) -> Option<DragTarget> {
        self.gesture.map(|g| g.target)
    }

    /// The dragged handle index, or `-1` while idle or dragging the whole range.
    #[must_use]
    pub fn drag_index(&self) -> isize {
        match self.dragging() {
            Some(DragTarget::Handle(index)) => isize::try_from(index).unwrap_or(isize::MAX),
            Some(DragTarget::Range) | None => -1,
        }
    }

    /// The live value of the dragged handle.
    ///
    /// Seeded when a handle drag starts and updated by every committed handle move; it
    /// keeps its last value after the gesture ends. Whole-range drags leave it `None`.
    #[must_use]
    pub fn dragging_value(&self) -> Option<f64> {
        self.cache.dragging_value()
    }

    /// The value cache.
    #[must_use]
    pub const fn cache(&self) -> &ValueCache {
        &self.cache
    }

    /// The values to render: the cache when it holds the same numbers as the external
    /// vector, otherwise the external vector.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        reconcile(&self.external, self.cache.values())
    }

    /// Starts a gesture on `target`.
    ///
    /// On success the event's propagation is stopped and the four document-level
    /// listeners are registered. If a gesture is already active, the configured
    /// [`RestartPolicy`] decides whether it is finished first or the new start is
    /// rejected.
    ///
    /// A rejected start changes nothing.
    pub fn start_drag<H: SliderHost + ?Sized>(
        &mut self,
        event: &mut InputEvent,
        target: DragTarget,
        host: &mut H,
    ) -> Result<(), DragError> {
        let len = self.external.len();
        if len == 0 {
            return Err(DragError::EmptyValues);
        }
        let dragging_value = match target {
            DragTarget::Handle(index) => Some(
                *self
                    .external
                    .get(index)
                    .ok_or(DragError::HandleOutOfRange { index, len })?,
            ),
            DragTarget::Range => None,
        };
        let start = event.page_position().ok_or(DragError::MissingPosition)?;

        if let Some(active) = self.gesture {
            match self.config.restart {
                RestartPolicy::Ignore => return Err(DragError::GestureInProgress),
                RestartPolicy::FinishPrevious => {
                    log::debug!("range drag restarted: finishing {:?}", active.target);
                    self.finish(host);
                }
            }
        }

        event.stop_propagation();
        self.cache.begin(&self.external, dragging_value);
        self.gesture = Some(Gesture { target, start });
        self.listeners.attach(&mut self.registry);
        log::debug!("range drag started: {target:?} at {start:?}");
        Ok(())
    }

    /// Handles a document-level move event.
    ///
    /// Returns `true` if new values were committed. Moves are skipped while idle, when the
    /// event has no position, or when the container geometry is unusable along the active
    /// axis.
    pub fn pointer_move<H: SliderHost + ?Sized>(
        &mut self,
        event: &mut InputEvent,
        host: &mut H,
    ) -> bool {
        let Some(gesture) = self.gesture else {
            return false;
        };
        event.prevent_default();
        let Some(position) = event.page_position() else {
            log::trace!("range drag move skipped: no pointer position");
            return false;
        };
        let Some(size) = host.container_size() else {
            log::trace!("range drag move skipped: no container geometry");
            return false;
        };
        let Some(fraction) = self
            .config
            .direction
            .offset_fraction(position - gesture.start, size)
        else {
            log::trace!("range drag move skipped: degenerate container {size:?}");
            return false;
        };
        self.update(gesture.target, fraction, host)
    }

    /// Handles a document-level end event.
    ///
    /// Returns `true` if a gesture ended.
    pub fn pointer_end<H: SliderHost + ?Sized>(
        &mut self,
        event: &mut InputEvent,
        host: &mut H,
    ) -> bool {
        if self.gesture.is_none() {
            return false;
        }
        event.prevent_default();
        self.finish(host);
        true
    }

    /// Routes an event received through a listener of `kind`.
    ///
    /// Returns `true` if the event moved values or ended the gesture.
    pub fn handle_event<H: SliderHost + ?Sized>(
        &mut self,
        kind: ListenerKind,
        event: &mut InputEvent,
        host: &mut H,
    ) -> bool {
        if kind.is_end() {
            self.pointer_end(event, host)
        } else {
            self.pointer_move(event, host)
        }
    }

    /// Ends the active gesture without an input event, for example when the host lost
    /// pointer capture.
    ///
    /// Behaves like [`pointer_end`](Self::pointer_end): the finish callback runs once.
    pub fn cancel<H: SliderHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.gesture.is_none() {
            return false;
        }
        log::debug!("range drag canceled");
        self.finish(host);
        true
    }

    /// Removes every live listener registration and goes idle without calling the finish
    /// callback. Runs automatically on drop.
    ///
    /// Returns the number of registrations removed.
    pub fn teardown(&mut self) -> usize {
        self.gesture = None;
        let removed = self.listeners.detach(&mut self.registry);
        if removed > 0 {
            log::debug!("range drag torn down with a live gesture");
        }
        removed
    }

    fn update<H: SliderHost + ?Sized>(
        &mut self,
        target: DragTarget,
        fraction: f64,
        host: &mut H,
    ) -> bool {
        let committed = match target {
            DragTarget::Range => {
                let next = shift_range(self.cache.origin(), fraction, self.bounds, |value| {
                    host.format_value(value)
                });
                self.cache.flush(next, None, host)
            }
            DragTarget::Handle(index) => {
                // The host transform may have reshaped the vector on an earlier move.
                if index >= self.cache.values().len() || index >= self.cache.origin().len() {
                    log::debug!("range drag move skipped: handle {index} no longer exists");
                    return false;
                }
                let HandleOffset { values, value } = offset_handle(
                    self.cache.values(),
                    self.cache.origin(),
                    index,
                    fraction,
                    self.bounds,
                    &*host,
                );
                self.cache.flush(values, Some(value), host)
            }
        };
        if committed {
            log::trace!("range drag committed {:?}", self.cache.values());
        }
        committed
    }

    fn finish<H: SliderHost + ?Sized>(&mut self, host: &mut H) {
        self.listeners.detach(&mut self.registry);
        if let Some(gesture) = self.gesture.take() {
            log::debug!("range drag finished: {:?}", gesture.target);
        }
        host.finish_change();
    }
}

impl<R: ListenerRegistry> Drop for RangeDrag<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<R: ListenerRegistry> fmt::Debug for RangeDrag<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeDrag")
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .field("external", &self.external)
            .field("bounds", &self.bounds)
            .field("cache", &self.cache)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}
