// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The card values mirror the bounds declared by the domain newtypes in
//! [`crate::domain::card::newtypes`]; this module is what the config file and
//! the demo host read.
//!
//! # Categories
//!
//! - **Swipe**: Threshold, rotation and fling distance of the drag gesture
//! - **Animation**: Duration and damping of the release animations
//! - **Gesture**: Tap slop separating taps from pans
//! - **Window**: Demo host window and card geometry

use crate::domain::card::newtypes::{
    damping_bounds, dismiss_bounds, duration_bounds, rotation_bounds, threshold_bounds,
};

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Default horizontal displacement beyond which a release dismisses a card.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = threshold_bounds::DEFAULT;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = threshold_bounds::MIN;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = threshold_bounds::MAX;

/// Default horizontal distance per degree of rotation.
pub const DEFAULT_ROTATION_DIVISOR: f32 = rotation_bounds::DEFAULT;

/// Default fling distance as a multiple of the threshold.
pub const DEFAULT_DISMISS_DISTANCE_FACTOR: f32 = dismiss_bounds::DEFAULT;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of the dismiss and snap-back animations (milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = duration_bounds::DEFAULT_MS;

/// Default damping ratio of the release spring.
pub const DEFAULT_SPRING_DAMPING: f32 = damping_bounds::DEFAULT;

/// Interval between animation ticks (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Pointer travel (distance units) below which a press-release is a tap.
pub const TAP_SLOP: f32 = 10.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default demo window width.
pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;

/// Default demo window height.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;

/// Padding between the window edge and the card stack.
pub const DECK_PADDING: f32 = 16.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);
    assert!(DEFAULT_ROTATION_DIVISOR > 0.0);
    assert!(DEFAULT_DISMISS_DISTANCE_FACTOR > 1.0);
    assert!(DEFAULT_SPRING_DAMPING > 0.0);
    assert!(DEFAULT_SPRING_DAMPING <= 1.0);
    assert!(ANIMATION_TICK_MS > 0);
    assert!(TAP_SLOP > 0.0);
    assert!(TAP_SLOP < DEFAULT_SWIPE_THRESHOLD);
};
