// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The card follows the Elm-style "state down, messages up" pattern: its
//! state handles messages and reports effects for the host to perform.
//!
//! - [`card`] - The swipeable photo card component
//! - [`state`] - Reusable interaction state (drag session, release animations)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod card;
pub mod design_tokens;
pub mod state;
