// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconciliation between the cached and the externally owned values.

use smallvec::SmallVec;

type Scratch = SmallVec<[f64; 4]>;

/// Returns `cache` if it holds the same multiset of numbers as `external`, otherwise
/// `external`.
///
/// The comparison ignores order. During a drag the cache may assign values to handles in
/// a different order than a freshly sorted external vector would; as long as both agree
/// on the set of values, the cache's assignment wins so the dragged handle keeps its
/// identity. Any disagreement means the cache is stale and the external vector is used.
///
/// ```
/// use understory_range_drag::reconcile;
///
/// let cache = [1.0, 3.0, 5.0];
/// assert_eq!(reconcile(&[1.0, 5.0, 3.0], &cache), &cache);
/// assert_eq!(reconcile(&[1.0, 5.0, 4.0], &cache), &[1.0, 5.0, 4.0]);
/// ```
#[must_use]
pub fn reconcile<'a>(external: &'a [f64], cache: &'a [f64]) -> &'a [f64] {
    if external.len() != cache.len() {
        return external;
    }
    let source = sorted(external);
    let target = sorted(cache);
    // `==` on floats, so a NaN anywhere defers to the external vector.
    if source.iter().zip(&target).all(|(a, b)| a == b) {
        cache
    } else {
        external
    }
}

fn sorted(values: &[f64]) -> Scratch {
    let mut out = Scratch::from_slice(values);
    out.sort_unstable_by(f64::total_cmp);
    out
}
