// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_range_drag --heading-base-level=0

//! Understory Range Drag: the pointer drag controller for multi-handle range sliders.
//!
//! ## Overview
//!
//! This crate turns raw pointer and touch movement into value updates for a slider with
//! one or more handles. It enforces domain bounds, delegates handle ordering to a host
//! supplied transform, and reconciles its locally cached values with the values the host
//! owns across renders.
//!
//! It does not render anything and it does not know about any particular toolkit.
//! Host frameworks are responsible for:
//!
//! - Feeding the current values and [`Bounds`] into [`RangeDrag::sync`] on every render.
//! - Calling [`RangeDrag::start_drag`] when a handle (or the track, for a whole-range drag)
//!   is pressed.
//! - Routing document-level move/end input to [`RangeDrag::pointer_move`] and
//!   [`RangeDrag::pointer_end`] while the listeners the controller registered through its
//!   [`ListenerRegistry`] are alive.
//! - Implementing [`SliderHost`]: container geometry, quantization, the single-handle
//!   offset transform, and the change/finish callbacks.
//!
//! ## Components
//!
//! - [`PointerInput`] samples a page position from a mouse or touch event.
//! - [`ValueCache`] holds the working values, the origin snapshot taken at gesture start,
//!   and the live value of the dragged handle. [`ValueCache::flush`] suppresses
//!   notifications when nothing changed.
//! - [`shift_range`] and [`offset_handle`] map a normalized offset fraction to new values.
//! - [`reconcile`] picks between the cache and the external values with an order-invariant
//!   comparison.
//! - [`RangeDrag`] is the gesture state machine tying it all together.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_range_drag::{
//!     Bounds, DragConfig, DragTarget, HandleOffset, InputEvent, ListenerKind,
//!     ListenerRegistry, OffsetMode, RangeDrag, SliderHost,
//! };
//!
//! #[derive(Default)]
//! struct Bus(u32);
//!
//! impl ListenerRegistry for Bus {
//!     type Handle = ListenerKind;
//!     fn add_listener(&mut self, kind: ListenerKind) -> ListenerKind {
//!         self.0 += 1;
//!         kind
//!     }
//!     fn remove_listener(&mut self, _handle: ListenerKind) {
//!         self.0 -= 1;
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Host {
//!     changes: Vec<Vec<f64>>,
//! }
//!
//! impl SliderHost for Host {
//!     fn container_size(&self) -> Option<Size> {
//!         Some(Size::new(200.0, 20.0))
//!     }
//!     fn format_value(&self, value: f64) -> f64 {
//!         value.round()
//!     }
//!     fn offset_values(
//!         &self,
//!         values: &[f64],
//!         distance: f64,
//!         index: usize,
//!         _mode: OffsetMode,
//!     ) -> HandleOffset {
//!         let mut values = values.to_vec();
//!         values[index] = (values[index] + distance).clamp(0.0, 100.0);
//!         HandleOffset { value: values[index], values }
//!     }
//!     fn trigger_change(&mut self, values: &[f64]) {
//!         self.changes.push(values.to_vec());
//!     }
//!     fn finish_change(&mut self) {}
//! }
//!
//! let mut host = Host::default();
//! let mut drag = RangeDrag::new(Bus::default(), DragConfig::default());
//! drag.sync(&[20.0, 80.0], Bounds::new(0.0, 100.0));
//!
//! let mut down = InputEvent::mouse(Point::new(50.0, 10.0));
//! drag.start_drag(&mut down, DragTarget::Handle(1), &mut host).unwrap();
//!
//! // 20px of a 200px track is 10% of the 0..100 domain.
//! let mut moved = InputEvent::mouse(Point::new(70.0, 10.0));
//! drag.pointer_move(&mut moved, &mut host);
//! assert_eq!(host.changes, vec![vec![20.0, 90.0]]);
//! assert_eq!(drag.dragging_value(), Some(90.0));
//!
//! let mut up = InputEvent::mouse(Point::new(70.0, 10.0));
//! drag.pointer_end(&mut up, &mut host);
//! assert!(drag.dragging().is_none());
//! assert_eq!(drag.registry().0, 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod config;
mod drag;
mod error;
mod host;
mod listeners;
mod position;
mod reconcile;
mod resolve;

pub use cache::ValueCache;
pub use config::{Bounds, Direction, DragConfig, RestartPolicy};
pub use drag::{DragTarget, RangeDrag};
pub use error::DragError;
pub use host::{HandleOffset, OffsetMode, SliderHost};
pub use listeners::{ListenerKind, ListenerRegistry, Listeners};
pub use position::{InputEvent, PointerInput};
pub use reconcile::reconcile;
pub use resolve::{offset_handle, shift_range};
