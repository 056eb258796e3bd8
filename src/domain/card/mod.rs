// SPDX-License-Identifier: MPL-2.0
//! Card domain types.
//!
//! Value objects and pure functions describing how a dragged card moves and
//! when a release dismisses it.

pub mod decision;
pub mod newtypes;
pub mod settings;
pub mod transform;

// Re-export commonly used types
pub use decision::{dismiss_distance, resolve_release, SwipeDirection, SwipeOutcome};
pub use newtypes::{
    AnimationDuration, DismissDistanceFactor, RotationDivisor, SpringDamping, SwipeThreshold,
};
pub use settings::SwipeSettings;
pub use transform::{CardTransform, Displacement, TransformCalculator};
