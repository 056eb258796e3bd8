// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Deck(String),
    Image(ImageError),
}

/// Specific error types for card image loading.
///
/// None of these reach the gesture state machine: a failed load leaves the
/// card showing whatever it showed before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The image reference is not a usable URL or path.
    InvalidSource(String),

    /// Fetching the bytes failed (network or filesystem).
    Fetch(String),

    /// The bytes could not be decoded as an image.
    Decode(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::InvalidSource(source) => write!(f, "Invalid image source: {}", source),
            ImageError::Fetch(msg) => write!(f, "Fetch failed: {}", msg),
            ImageError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Deck(e) => write!(f, "Deck Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
