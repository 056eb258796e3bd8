// SPDX-License-Identifier: MPL-2.0
//! Swipe-dismissible photo card.
//!
//! The card follows the pointer while dragged, rotating proportionally to
//! the horizontal displacement. On release it either flies off-screen and
//! asks the host to remove it, or springs back into place. Taps on the right
//! or left half step through the photos of its presentation model.

pub mod canvas;
pub mod component;
pub mod gesture;
pub mod indicator;
pub mod subcomponents;

pub use component::{Effect, Message, State};
pub use gesture::{Gesture, GestureRecognizer, PointerEvent};
pub use indicator::Indicator;
pub use subcomponents::swipe::Phase;
