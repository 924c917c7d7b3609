// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Working copy of the slider values during a drag.

use alloc::vec::Vec;

use crate::SliderHost;

/// The controller's cached values.
///
/// - `cache` is the working vector a drag mutates; it tracks the external vector while idle.
/// - `origin` is the external vector as it was when the gesture started. All offsets are
///   computed against it, so moves never accumulate rounding.
/// - `dragging_value` is the live value of the handle under drag, for tooltips and the like.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueCache {
    cache: Vec<f64>,
    origin: Vec<f64>,
    dragging_value: Option<f64>,
}

impl ValueCache {
    /// Creates a cache that mirrors `values`.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        Self {
            cache: values.to_vec(),
            origin: values.to_vec(),
            dragging_value: None,
        }
    }

    /// The working vector.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.cache
    }

    /// The snapshot taken at gesture start.
    #[must_use]
    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    /// The live value of the dragged handle, if any.
    #[must_use]
    pub fn dragging_value(&self) -> Option<f64> {
        self.dragging_value
    }

    /// Snapshots `external` as the origin and working vector of a new gesture.
    pub fn begin(&mut self, external: &[f64], dragging_value: Option<f64>) {
        replace(&mut self.origin, external);
        replace(&mut self.cache, external);
        self.dragging_value = dragging_value;
    }

    /// Overwrites the working vector with `external` unless a gesture is active.
    ///
    /// Returns `true` if the working vector changed.
    pub fn reset_if_idle(&mut self, external: &[f64], idle: bool) -> bool {
        if !idle || self.cache == external {
            return false;
        }
        replace(&mut self.cache, external);
        true
    }

    /// Commits `next` if it differs from the working vector.
    ///
    /// On a change the working vector becomes `next`, the dragging value is updated when
    /// `next_value` is given, and the host's change callback receives `next`. When `next`
    /// is element-wise identical to the working vector nothing happens, which is what
    /// keeps moves that do not cross a quantization boundary silent.
    ///
    /// Returns `true` if a change was committed.
    pub fn flush<H: SliderHost + ?Sized>(
        &mut self,
        next: Vec<f64>,
        next_value: Option<f64>,
        host: &mut H,
    ) -> bool {
        // Lengths differ only if the host's transform reshaped the vector; treat it as a change.
        let changed = next.len() != self.cache.len()
            || self.cache.iter().zip(&next).any(|(current, next)| current != next);
        if !changed {
            return false;
        }
        if next_value.is_some() {
            self.dragging_value = next_value;
        }
        self.cache = next;
        host.trigger_change(&self.cache);
        true
    }
}

fn replace(target: &mut Vec<f64>, source: &[f64]) {
    target.clear();
    target.extend_from_slice(source);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandleOffset, OffsetMode};
    use alloc::vec;
    use kurbo::Size;

    #[derive(Default)]
    struct Recorder {
        changes: Vec<Vec<f64>>,
    }

    impl SliderHost for Recorder {
        fn container_size(&self) -> Option<Size> {
            None
        }

        fn format_value(&self, value: f64) -> f64 {
            value
        }

        fn offset_values(
            &self,
            values: &[f64],
            _: f64,
            index: usize,
            _: OffsetMode,
        ) -> HandleOffset {
            HandleOffset {
                values: values.to_vec(),
                value: values[index],
            }
        }

        fn trigger_change(&mut self, values: &[f64]) {
            self.changes.push(values.to_vec());
        }

        fn finish_change(&mut self) {}
    }

    #[test]
    fn flush_commits_and_notifies_on_change() {
        let mut cache = ValueCache::new(&[20.0, 80.0]);
        let mut host = Recorder::default();
        assert!(cache.flush(vec![40.0, 80.0], Some(40.0), &mut host));
        assert_eq!(cache.values(), &[40.0, 80.0]);
        assert_eq!(cache.dragging_value(), Some(40.0));
        assert_eq!(host.changes, vec![vec![40.0, 80.0]]);
    }

    #[test]
    fn flush_is_silent_when_nothing_changed() {
        let mut cache = ValueCache::new(&[20.0, 80.0]);
        let mut host = Recorder::default();
        assert!(!cache.flush(vec![20.0, 80.0], Some(99.0), &mut host));
        assert!(host.changes.is_empty(), "identical vector must not notify");
        assert_eq!(cache.dragging_value(), None);
    }

    #[test]
    fn flush_without_value_keeps_dragging_value() {
        let mut cache = ValueCache::new(&[20.0, 80.0]);
        cache.begin(&[20.0, 80.0], Some(20.0));
        let mut host = Recorder::default();
        assert!(cache.flush(vec![30.0, 90.0], None, &mut host));
        assert_eq!(cache.dragging_value(), Some(20.0));
    }

    #[test]
    fn flush_treats_length_change_as_change() {
        let mut cache = ValueCache::new(&[20.0, 80.0]);
        let mut host = Recorder::default();
        assert!(cache.flush(vec![20.0], None, &mut host));
        assert_eq!(host.changes.len(), 1);
    }

    #[test]
    fn reset_only_while_idle() {
        let mut cache = ValueCache::new(&[1.0, 2.0]);
        assert!(!cache.reset_if_idle(&[5.0, 6.0], false));
        assert_eq!(cache.values(), &[1.0, 2.0]);
        assert!(cache.reset_if_idle(&[5.0, 6.0], true));
        assert_eq!(cache.values(), &[5.0, 6.0]);
        assert!(!cache.reset_if_idle(&[5.0, 6.0], true));
    }

    #[test]
    fn begin_snapshots_origin_and_cache() {
        let mut cache = ValueCache::new(&[1.0, 2.0]);
        cache.begin(&[3.0, 4.0], Some(4.0));
        assert_eq!(cache.origin(), &[3.0, 4.0]);
        assert_eq!(cache.values(), &[3.0, 4.0]);
        assert_eq!(cache.dragging_value(), Some(4.0));
    }
}
