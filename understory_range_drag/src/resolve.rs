// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset resolution: from a normalized offset fraction to the next value vector.
//!
//! Both helpers take the offset as a signed fraction of the container extent (not
//! clamped) and scale it by the domain span. They are pure; committing the result is the
//! caller's job.
//!
//! ```
//! use understory_range_drag::{Bounds, shift_range};
//!
//! // Dragging the whole range right by half the track only moves it as far as `max` allows.
//! let next = shift_range(&[20.0, 80.0], 0.5, Bounds::new(0.0, 100.0), |v| v);
//! assert_eq!(next, vec![40.0, 100.0]);
//! ```

use alloc::vec::Vec;

use crate::{Bounds, HandleOffset, OffsetMode, SliderHost};

/// Shifts every value of `origin` by the same quantized amount.
///
/// The raw offset is clamped so that neither the first nor the last value leaves `bounds`,
/// then the first value is quantized with `format` and the offset re-derived from it. Every
/// element moves by that one already-quantized amount, so spacing between handles is
/// preserved exactly.
///
/// Quantization never pushes a value out of `bounds`. When `format` rounds the shifted
/// range past a limit, the allowed value on the near side of the limit is used instead; if
/// `format` offers none, the range stops at the limit unquantized.
///
/// An empty `origin` yields an empty vector.
#[must_use]
pub fn shift_range(
    origin: &[f64],
    offset_percent: f64,
    bounds: Bounds,
    format: impl Fn(f64) -> f64,
) -> Vec<f64> {
    let (Some(&start), Some(&end)) = (origin.first(), origin.last()) else {
        return Vec::new();
    };
    let lo = bounds.min - start;
    let hi = bounds.max - end;
    // Lower limit first: with inverted bounds the upper limit wins.
    let offset = (offset_percent * bounds.span()).max(lo).min(hi);
    let quantized = format(start + offset) - start;
    let offset = if (lo..=hi).contains(&quantized) {
        quantized
    } else {
        // Rounded past a limit: mirror the overshoot to land on the allowed value on the
        // other side, and fall back to the limit itself if that fails too.
        let back = format(start + 2.0 * offset - quantized) - start;
        if (lo..=hi).contains(&back) {
            back
        } else {
            quantized.max(lo).min(hi)
        }
    };
    origin.iter().map(|value| value + offset).collect()
}

/// Moves the handle at `index` through the host's value transform.
///
/// The working vector is `current` with the element at `index` restored to its origin
/// value, so a speculative result from an earlier move is undone before the new offset is
/// applied. The host enforces ordering, bounds, and quantization.
///
/// `index` must be valid for both `current` and `origin`.
#[must_use]
pub fn offset_handle<H: SliderHost + ?Sized>(
    current: &[f64],
    origin: &[f64],
    index: usize,
    offset_percent: f64,
    bounds: Bounds,
    host: &H,
) -> HandleOffset {
    let distance = bounds.span() * offset_percent;
    let mut working = current.to_vec();
    working[index] = origin[index];
    host.offset_values(&working, distance, index, OffsetMode::Distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::RefCell;
    use kurbo::Size;

    const BOUNDS: Bounds = Bounds::new(0.0, 100.0);

    /// Snaps a non-negative `value` to the nearest multiple of `step`.
    fn snap(value: f64, step: f64) -> f64 {
        let rem = value % step;
        if rem * 2.0 >= step {
            value - rem + step
        } else {
            value - rem
        }
    }

    /// Host whose transform clamps the handle between its neighbors and records its input.
    #[derive(Default)]
    struct Clamping {
        seen: RefCell<Vec<(Vec<f64>, f64, usize, OffsetMode)>>,
    }

    impl SliderHost for Clamping {
        fn container_size(&self) -> Option<Size> {
            None
        }

        fn format_value(&self, value: f64) -> f64 {
            value
        }

        fn offset_values(
            &self,
            values: &[f64],
            distance: f64,
            index: usize,
            mode: OffsetMode,
        ) -> HandleOffset {
            self.seen
                .borrow_mut()
                .push((values.to_vec(), distance, index, mode));
            let lo = if index == 0 { BOUNDS.min } else { values[index - 1] };
            let hi = values.get(index + 1).copied().unwrap_or(BOUNDS.max);
            let mut values = values.to_vec();
            values[index] = (values[index] + distance).clamp(lo, hi);
            HandleOffset {
                value: values[index],
                values,
            }
        }

        fn trigger_change(&mut self, _: &[f64]) {}

        fn finish_change(&mut self) {}
    }

    #[test]
    fn range_shift_is_uniform() {
        let origin = [10.0, 25.0, 60.0];
        for percent in [-2.0, -0.375, -0.0625, 0.0, 0.125, 0.25, 0.5, 5.0] {
            let next = shift_range(&origin, percent, BOUNDS, |v| v);
            let delta = next[0] - origin[0];
            for (n, o) in next.iter().zip(&origin) {
                assert_eq!(n - o, delta, "shift must be uniform at {percent}");
            }
        }
    }

    #[test]
    fn range_shift_stays_in_bounds_for_extreme_offsets() {
        let origin = [20.0, 80.0];
        for percent in [-1e9, -3.0, -0.25, 0.25, 3.0, 1e9] {
            let next = shift_range(&origin, percent, BOUNDS, |v| v);
            assert!(next[0] >= BOUNDS.min, "first value below min at {percent}");
            assert!(next[1] <= BOUNDS.max, "last value above max at {percent}");
        }
    }

    #[test]
    fn range_shift_stays_in_bounds_when_quantization_rounds_outward() {
        let origin = [22.0, 79.0];
        for percent in [-1e9, -3.0, -0.25, 0.25, 0.9, 3.0, 1e9] {
            let next = shift_range(&origin, percent, BOUNDS, |v| snap(v, 5.0));
            assert!(next[0] >= BOUNDS.min, "first value below min at {percent}");
            assert!(next[1] <= BOUNDS.max, "last value above max at {percent}");
            assert_eq!(next[1] - next[0], 57.0, "spacing must survive at {percent}");
        }
        // 22 + 21 = 43 snaps up to 45, which would put 79 at 102; 40 is the step below.
        assert_eq!(shift_range(&origin, 0.9, BOUNDS, |v| snap(v, 5.0)), vec![40.0, 97.0]);
    }

    #[test]
    fn range_shift_stops_at_limit_without_an_allowed_value_inside() {
        // Every candidate for the first value snaps to 0, below `min`.
        let next = shift_range(&[3.0, 50.0], -1.0, Bounds::new(1.0, 100.0), |v| snap(v, 5.0));
        assert_eq!(next, vec![1.0, 48.0]);
    }

    #[test]
    fn range_shift_clamps_to_max() {
        assert_eq!(shift_range(&[20.0, 80.0], 0.5, BOUNDS, |v| v), vec![40.0, 100.0]);
        assert_eq!(shift_range(&[20.0, 80.0], -0.5, BOUNDS, |v| v), vec![0.0, 60.0]);
    }

    #[test]
    fn range_shift_quantizes_once_from_start() {
        let next = shift_range(&[21.0, 47.0], 0.034, BOUNDS, |v| snap(v, 5.0));
        // 21 + 3.4 = 24.4 snaps to 25, so every value moves by exactly 4.
        assert_eq!(next, vec![25.0, 51.0]);
    }

    #[test]
    fn range_shift_of_empty_is_empty() {
        assert!(shift_range(&[], 0.3, BOUNDS, |v| v).is_empty());
    }

    #[test]
    fn handle_offset_restores_origin_before_transform() {
        let host = Clamping::default();
        let result = offset_handle(&[35.0, 80.0], &[20.0, 80.0], 0, 0.1, BOUNDS, &host);
        assert_eq!(result.values, vec![30.0, 80.0]);
        assert_eq!(result.value, 30.0);
        let seen = host.seen.borrow();
        assert_eq!(seen[0], (vec![20.0, 80.0], 10.0, 0, OffsetMode::Distance));
    }

    #[test]
    fn handle_offset_respects_neighbors() {
        let host = Clamping::default();
        let result = offset_handle(&[20.0, 80.0], &[20.0, 80.0], 0, 0.9, BOUNDS, &host);
        assert_eq!(result.values, vec![80.0, 80.0]);
    }
}
