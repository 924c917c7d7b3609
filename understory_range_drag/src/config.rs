// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration: slider direction, restart policy, and domain bounds.

use kurbo::{Size, Vec2};

/// Orientation of the slider track.
///
/// Selects which pointer axis drives the offset and in which sense.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Minimum on the left; moving right increases values.
    #[default]
    Ltr,
    /// Minimum on the right; moving left increases values.
    Rtl,
    /// Minimum at the top; moving down increases values.
    Ttb,
    /// Minimum at the bottom; moving up increases values.
    Btt,
}

impl Direction {
    /// Maps a page-space pointer delta to a signed fraction of the container extent.
    ///
    /// Returns `None` when the extent along the active axis is zero, negative, or not
    /// finite, or when the resulting fraction is not finite.
    #[must_use]
    pub fn offset_fraction(self, delta: Vec2, container: Size) -> Option<f64> {
        let (delta, extent) = match self {
            Self::Ltr => (delta.x, container.width),
            Self::Rtl => (-delta.x, container.width),
            Self::Ttb => (delta.y, container.height),
            Self::Btt => (-delta.y, container.height),
        };
        if !(extent.is_finite() && extent > 0.0) {
            return None;
        }
        let fraction = delta / extent;
        fraction.is_finite().then_some(fraction)
    }
}

/// What to do when a drag starts while another gesture is still active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RestartPolicy {
    /// End the active gesture first (its listeners are removed and `finish_change` is
    /// called), then start the new one.
    #[default]
    FinishPrevious,
    /// Keep the active gesture and reject the new start with
    /// [`DragError::GestureInProgress`](crate::DragError::GestureInProgress).
    Ignore,
}

/// Configuration for a [`RangeDrag`](crate::RangeDrag) controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragConfig {
    /// Track orientation.
    pub direction: Direction,
    /// Behavior for a start while already dragging.
    pub restart: RestartPolicy,
}

impl DragConfig {
    /// Returns this configuration with `direction` replaced.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns this configuration with `restart` replaced.
    #[must_use]
    pub const fn with_restart(mut self, restart: RestartPolicy) -> Self {
        self.restart = restart;
        self
    }
}

/// Inclusive domain limits of the slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Lowest allowed value.
    pub min: f64,
    /// Highest allowed value.
    pub max: f64,
}

impl Bounds {
    /// Creates bounds covering `min..=max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length of the domain, `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_direction_picks_its_axis_and_sign() {
        let delta = Vec2::new(20.0, -10.0);
        let size = Size::new(200.0, 50.0);
        assert_eq!(Direction::Ltr.offset_fraction(delta, size), Some(0.1));
        assert_eq!(Direction::Rtl.offset_fraction(delta, size), Some(-0.1));
        assert_eq!(Direction::Ttb.offset_fraction(delta, size), Some(-0.2));
        assert_eq!(Direction::Btt.offset_fraction(delta, size), Some(0.2));
    }

    #[test]
    fn degenerate_extent_yields_none() {
        let delta = Vec2::new(5.0, 5.0);
        assert_eq!(Direction::Ltr.offset_fraction(delta, Size::new(0.0, 10.0)), None);
        assert_eq!(Direction::Ttb.offset_fraction(delta, Size::new(10.0, -1.0)), None);
        assert_eq!(
            Direction::Rtl.offset_fraction(delta, Size::new(f64::NAN, 10.0)),
            None
        );
    }

    #[test]
    fn span_is_max_minus_min() {
        assert_eq!(Bounds::new(-10.0, 30.0).span(), 40.0);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = DragConfig::default()
            .with_direction(Direction::Btt)
            .with_restart(RestartPolicy::Ignore);
        assert_eq!(config.direction, Direction::Btt);
        assert_eq!(config.restart, RestartPolicy::Ignore);
    }
}
