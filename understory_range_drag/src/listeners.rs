// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level listener registration for the lifetime of a gesture.
//!
//! A drag keeps receiving input after the pointer leaves the handle, so the controller
//! subscribes to the document-wide input stream when a gesture starts and unsubscribes
//! when it ends. That stream is shared by every slider on the page; the controller only
//! sees it through the [`ListenerRegistry`] capability it is given, and every
//! registration it adds is removed exactly once.
//!
//! ```
//! use understory_range_drag::{ListenerKind, ListenerRegistry, Listeners};
//!
//! #[derive(Default)]
//! struct Document {
//!     live: Vec<(u32, ListenerKind)>,
//!     next: u32,
//! }
//!
//! impl ListenerRegistry for Document {
//!     type Handle = u32;
//!     fn add_listener(&mut self, kind: ListenerKind) -> u32 {
//!         self.next += 1;
//!         self.live.push((self.next, kind));
//!         self.next
//!     }
//!     fn remove_listener(&mut self, handle: u32) {
//!         self.live.retain(|(id, _)| *id != handle);
//!     }
//! }
//!
//! let mut doc = Document::default();
//! let mut listeners = Listeners::new();
//! listeners.attach(&mut doc);
//! assert_eq!(doc.live.len(), 4);
//! assert_eq!(listeners.detach(&mut doc), 4);
//! assert!(doc.live.is_empty());
//! // Detaching twice removes nothing.
//! assert_eq!(listeners.detach(&mut doc), 0);
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;

use smallvec::SmallVec;

/// The document-level input subscriptions a gesture needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Mouse movement.
    MouseMove,
    /// Mouse button release.
    MouseUp,
    /// Touch movement.
    TouchMove,
    /// Touch release.
    TouchEnd,
}

impl ListenerKind {
    /// Every kind a gesture subscribes to, in registration order.
    pub const ALL: [Self; 4] = [Self::MouseUp, Self::MouseMove, Self::TouchEnd, Self::TouchMove];

    /// Whether events of this kind end the gesture.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::MouseUp | Self::TouchEnd)
    }
}

/// Registration interface of the shared input stream.
///
/// Hosts route an event of a registered kind to
/// [`RangeDrag::pointer_move`](crate::RangeDrag::pointer_move) or
/// [`RangeDrag::pointer_end`](crate::RangeDrag::pointer_end).
pub trait ListenerRegistry {
    /// Token identifying one registration.
    type Handle;

    /// Subscribes to `kind` and returns the token needed to unsubscribe.
    fn add_listener(&mut self, kind: ListenerKind) -> Self::Handle;

    /// Removes a registration previously returned by [`add_listener`](Self::add_listener).
    fn remove_listener(&mut self, handle: Self::Handle);
}

impl<R: ListenerRegistry + ?Sized> ListenerRegistry for &mut R {
    type Handle = R::Handle;

    fn add_listener(&mut self, kind: ListenerKind) -> Self::Handle {
        (**self).add_listener(kind)
    }

    fn remove_listener(&mut self, handle: Self::Handle) {
        (**self).remove_listener(handle);
    }
}

/// A registry shared between several sliders.
///
/// Adding and removing registrations borrows the cell mutably. A host that dispatches
/// document input from inside a borrow of the same registry must release that borrow
/// before calling [`RangeDrag::start_drag`], [`RangeDrag::pointer_end`],
/// [`RangeDrag::cancel`] or dropping the controller, or the call panics.
///
/// [`RangeDrag::start_drag`]: crate::RangeDrag::start_drag
/// [`RangeDrag::pointer_end`]: crate::RangeDrag::pointer_end
/// [`RangeDrag::cancel`]: crate::RangeDrag::cancel
impl<R: ListenerRegistry + ?Sized> ListenerRegistry for Rc<RefCell<R>> {
    type Handle = R::Handle;

    fn add_listener(&mut self, kind: ListenerKind) -> Self::Handle {
        self.borrow_mut().add_listener(kind)
    }

    fn remove_listener(&mut self, handle: Self::Handle) {
        self.borrow_mut().remove_listener(handle);
    }
}

/// The registrations owned by one gesture.
#[derive(Clone, Debug)]
pub struct Listeners<H> {
    handles: SmallVec<[H; 4]>,
}

impl<H> Listeners<H> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handles: SmallVec::new(),
        }
    }

    /// Whether any registration is live.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.handles.is_empty()
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether there are no live registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Registers one listener of every [`ListenerKind`].
    ///
    /// Any registrations still held are removed first, so a set never holds more than
    /// one gesture's worth.
    pub fn attach<R>(&mut self, registry: &mut R)
    where
        R: ListenerRegistry<Handle = H> + ?Sized,
    {
        self.detach(registry);
        for kind in ListenerKind::ALL {
            self.handles.push(registry.add_listener(kind));
        }
    }

    /// Removes every live registration and returns how many were removed.
    pub fn detach<R>(&mut self, registry: &mut R) -> usize
    where
        R: ListenerRegistry<Handle = H> + ?Sized,
    {
        let removed = self.handles.len();
        for handle in self.handles.drain(..) {
            registry.remove_listener(handle);
        }
        removed
    }
}

impl<H> Default for Listeners<H> {
    fn default() -> Self {
        Self::new()
    }
}
