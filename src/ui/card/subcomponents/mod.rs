// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the card.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The card's component.rs orchestrates them.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── swipe     - Drag state machine and release animations
//!     └── carousel  - Tap navigation, observer binding, indicator
//! ```

pub mod carousel;
pub mod swipe;
