// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state shared by card surfaces, kept apart from the card
//! component so it can be tested without a renderer.

pub mod animation;
pub mod drag;

// Re-export commonly used types for convenience
pub use animation::{AnimationGroup, SpringCurve, SwipeAnimation};
pub use drag::DragSession;
