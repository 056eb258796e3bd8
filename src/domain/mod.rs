// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core card interaction rules with ZERO external dependencies.
//!
//! This module contains pure value types and decision rules for the swipe
//! card. It has no dependencies on external crates (except `std`) so the
//! gesture math can be tested without a renderer.
//!
//! # Modules
//!
//! - [`card`]: Swipe value objects ([`SwipeThreshold`](card::SwipeThreshold),
//!   [`RotationDivisor`](card::RotationDivisor)), the stateless
//!   [`TransformCalculator`](card::TransformCalculator) and the release
//!   decision ([`resolve_release`](card::resolve_release)).

pub mod card;
