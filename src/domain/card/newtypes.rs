// SPDX-License-Identifier: MPL-2.0
//! Card newtypes.
//!
//! This module provides type-safe wrappers for the tunable values of the
//! swipe gesture, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Swipe Bounds
// =============================================================================

/// Swipe threshold bounds (distance units).
pub mod threshold_bounds {
    /// Minimum swipe threshold.
    pub const MIN: f32 = 10.0;
    /// Maximum swipe threshold.
    pub const MAX: f32 = 1000.0;
    /// Default swipe threshold.
    pub const DEFAULT: f32 = 100.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Horizontal displacement beyond which a release dismisses the card.
///
/// The comparison is strict: a displacement equal to the threshold snaps
/// back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(threshold_bounds::MIN, threshold_bounds::MAX))
    }

    /// Returns the raw distance value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if `dx` crosses the threshold in either direction.
    #[must_use]
    pub fn is_exceeded_by(self, dx: f32) -> bool {
        dx.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// RotationDivisor
// =============================================================================

/// Rotation divisor bounds.
pub mod rotation_bounds {
    /// Minimum divisor (strongest rotation).
    pub const MIN: f32 = 1.0;
    /// Maximum divisor (weakest rotation).
    pub const MAX: f32 = 500.0;
    /// Default divisor: one degree per 20 units of horizontal drag.
    pub const DEFAULT: f32 = 20.0;
}

/// Horizontal distance that produces one degree of card rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationDivisor(f32);

impl RotationDivisor {
    /// Creates a new divisor, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(rotation_bounds::MIN, rotation_bounds::MAX))
    }

    /// Returns the raw divisor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Converts a horizontal displacement into degrees of rotation.
    #[must_use]
    pub fn degrees_for(self, dx: f32) -> f32 {
        dx / self.0
    }
}

impl Default for RotationDivisor {
    fn default() -> Self {
        Self(rotation_bounds::DEFAULT)
    }
}

// =============================================================================
// DismissDistanceFactor
// =============================================================================

/// Dismiss distance factor bounds.
pub mod dismiss_bounds {
    /// Minimum factor; the card must at least travel past the threshold.
    pub const MIN: f32 = 1.5;
    /// Maximum factor.
    pub const MAX: f32 = 50.0;
    /// Default factor (600 units with the default threshold).
    pub const DEFAULT: f32 = 6.0;
}

/// Multiple of the threshold a dismissed card travels off-screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissDistanceFactor(f32);

impl DismissDistanceFactor {
    /// Creates a new factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(dismiss_bounds::MIN, dismiss_bounds::MAX))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the fling distance for the given threshold.
    #[must_use]
    pub fn distance_for(self, threshold: SwipeThreshold) -> f32 {
        threshold.value() * self.0
    }
}

impl Default for DismissDistanceFactor {
    fn default() -> Self {
        Self(dismiss_bounds::DEFAULT)
    }
}

// =============================================================================
// SpringDamping
// =============================================================================

/// Spring damping ratio bounds.
pub mod damping_bounds {
    /// Minimum damping ratio (very bouncy).
    pub const MIN: f32 = 0.1;
    /// Maximum damping ratio (critically damped).
    pub const MAX: f32 = 1.0;
    /// Default damping ratio.
    pub const DEFAULT: f32 = 0.6;
}

/// Damping ratio of the release animation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringDamping(f32);

impl SpringDamping {
    /// Creates a new damping ratio, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(damping_bounds::MIN, damping_bounds::MAX))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SpringDamping {
    fn default() -> Self {
        Self(damping_bounds::DEFAULT)
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Release animation duration bounds (milliseconds).
pub mod duration_bounds {
    /// Minimum duration in milliseconds.
    pub const MIN_MS: u64 = 50;
    /// Maximum duration in milliseconds.
    pub const MAX_MS: u64 = 5_000;
    /// Default duration in milliseconds.
    pub const DEFAULT_MS: u64 = 1_000;
}

/// Fixed duration of the dismiss and snap-back animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(duration_bounds::MIN_MS, duration_bounds::MAX_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
