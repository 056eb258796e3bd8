// SPDX-License-Identifier: MPL-2.0
//! Card image sources and loading.
//!
//! Image references come from the presentation model as plain strings. They
//! are parsed into an [`ImageSource`] and loaded asynchronously into an
//! [`ImageData`] ready for rendering. Every failure is reported as an
//! [`ImageError`](crate::error::ImageError) value; callers decide to ignore it.

pub mod image;
pub mod source;

pub use image::{cover_region, decode_cover, load, load_image, ImageData};
pub use source::ImageSource;
