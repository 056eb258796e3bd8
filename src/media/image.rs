// SPDX-License-Identifier: MPL-2.0
//! Fetching and decoding of card images (PNG, JPEG, GIF, WebP, BMP).

use super::source::ImageSource;
use crate::error::ImageError;
use iced::widget::image;
use std::fmt;

#[derive(Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Centered `(x, y, width, height)` region of a `width` x `height` image
/// with the given aspect ratio, as large as possible.
///
/// Degenerate inputs return the full image.
#[must_use]
pub fn cover_region(width: u32, height: u32, aspect_ratio: f32) -> (u32, u32, u32, u32) {
    if width == 0 || height == 0 || !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        return (0, 0, width, height);
    }

    if width as f32 / height as f32 > aspect_ratio {
        // Wider - trim the sides
        let cropped = ((height as f32 * aspect_ratio).round() as u32).clamp(1, width);
        ((width - cropped) / 2, 0, cropped, height)
    } else {
        // Taller - trim top and bottom
        let cropped = ((width as f32 / aspect_ratio).round() as u32).clamp(1, height);
        (0, (height - cropped) / 2, width, cropped)
    }
}

/// Decodes encoded bytes and crops them to `aspect_ratio` so the image fills
/// a surface of that shape without overflowing it.
pub fn decode_cover(bytes: &[u8], aspect_ratio: f32) -> Result<ImageData, ImageError> {
    let decoded =
        image_rs::load_from_memory(bytes).map_err(|err| ImageError::Decode(err.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (x, y, width, height) = cover_region(rgba.width(), rgba.height(), aspect_ratio);
    let cropped = image_rs::imageops::crop_imm(&rgba, x, y, width, height).to_image();
    Ok(ImageData::from_rgba(width, height, cropped.into_raw()))
}

async fn fetch(source: &ImageSource) -> Result<Vec<u8>, ImageError> {
    match source {
        ImageSource::Remote(url) => {
            let response = reqwest::get(url.clone())
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|err| ImageError::Fetch(err.to_string()))?;
            let bytes = response
                .bytes()
                .await
                .map_err(|err| ImageError::Fetch(err.to_string()))?;
            Ok(bytes.to_vec())
        }
        ImageSource::Local(path) => tokio::fs::read(path)
            .await
            .map_err(|err| ImageError::Fetch(format!("{}: {}", path.display(), err))),
    }
}

/// Fetches an image and decodes it cropped to `aspect_ratio`. Decoding runs
/// on the blocking pool.
pub async fn load_image(source: ImageSource, aspect_ratio: f32) -> Result<ImageData, ImageError> {
    let bytes = fetch(&source).await?;
    tokio::task::spawn_blocking(move || decode_cover(&bytes, aspect_ratio))
        .await
        .map_err(|err| ImageError::Decode(err.to_string()))?
}

/// Parses `reference` and loads it.
pub async fn load(reference: String, aspect_ratio: f32) -> Result<ImageData, ImageError> {
    let source = ImageSource::parse(&reference)?;
    load_image(source, aspect_ratio).await
}
