// SPDX-License-Identifier: MPL-2.0
//! Aggregated swipe tuning handed to each card.

use super::decision::dismiss_distance;
use super::newtypes::{
    AnimationDuration, DismissDistanceFactor, RotationDivisor, SpringDamping, SwipeThreshold,
};
use super::transform::TransformCalculator;

/// All tunables of the drag state machine, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeSettings {
    pub threshold: SwipeThreshold,
    pub rotation: RotationDivisor,
    pub dismiss_factor: DismissDistanceFactor,
    pub duration: AnimationDuration,
    pub damping: SpringDamping,
}

impl SwipeSettings {
    /// Calculator configured with this rotation divisor.
    #[must_use]
    pub fn calculator(&self) -> TransformCalculator {
        TransformCalculator::new(self.rotation)
    }

    /// How far a dismissed card travels sideways.
    #[must_use]
    pub fn dismiss_distance(&self) -> f32 {
        dismiss_distance(self.threshold, self.dismiss_factor)
    }
}
