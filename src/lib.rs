// SPDX-License-Identifier: MPL-2.0
//! `iced_swipe` is a swipe-dismissible photo card for the Iced GUI framework.
//!
//! A card follows the pointer while dragged and either flies off the deck or
//! springs back on release. Taps step through the card's photos, which come
//! from an external presentation model the card observes. A small demo host
//! shows a deck of cards loaded from a TOML file.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod presentation;
pub mod ui;
