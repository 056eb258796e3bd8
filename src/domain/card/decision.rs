// SPDX-License-Identifier: MPL-2.0
//! Release decision: dismiss the card or snap it back.

use super::newtypes::{DismissDistanceFactor, SwipeThreshold};
use super::transform::{CardTransform, Displacement};

/// Horizontal direction a dismissed card leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Direction matching the sign of `dx`. Zero counts as right.
    #[must_use]
    pub fn from_dx(dx: f32) -> Self {
        if dx < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Unit sign of the direction (-1 or 1).
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Outcome of releasing a dragged card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Fling the card off-screen and detach it.
    Dismiss(SwipeDirection),
    /// Animate back to the identity transform.
    SnapBack,
}

impl SwipeOutcome {
    /// Transform the release animation heads for, starting from `from`.
    ///
    /// Dismissal keeps the rotation and moves the card center to `distance`
    /// units sideways on screen, at the on-screen height it was released at.
    /// The translation lives in the rotated frame, so the screen target is
    /// rotated back into it.
    #[must_use]
    pub fn target(self, from: &CardTransform, distance: f32) -> CardTransform {
        match self {
            Self::Dismiss(direction) => {
                let (_, screen_y) = from.apply(0.0, 0.0);
                let screen_x = direction.sign() * distance;
                let (sin, cos) = from.rotation_radians().sin_cos();
                CardTransform {
                    rotation_degrees: from.rotation_degrees,
                    translation: Displacement::new(
                        screen_x * cos + screen_y * sin,
                        screen_y * cos - screen_x * sin,
                    ),
                }
            }
            Self::SnapBack => CardTransform::IDENTITY,
        }
    }
}

/// Decides the outcome of a release with horizontal displacement `dx`.
#[must_use]
pub fn resolve_release(dx: f32, threshold: SwipeThreshold) -> SwipeOutcome {
    if threshold.is_exceeded_by(dx) {
        SwipeOutcome::Dismiss(SwipeDirection::from_dx(dx))
    } else {
        SwipeOutcome::SnapBack
    }
}

/// Fling distance for a threshold and factor.
#[must_use]
pub fn dismiss_distance(threshold: SwipeThreshold, factor: DismissDistanceFactor) -> f32 {
    factor.distance_for(threshold)
}
