// SPDX-License-Identifier: MPL-2.0
//! Parsing of image references into loadable sources.

use crate::error::ImageError;
use url::Url;
use std::fmt;
use std::path::PathBuf;

/// Where the bytes of a card image come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// `http` or `https` URL.
    Remote(Url),
    /// `file://` URL or plain filesystem path.
    Local(PathBuf),
}

impl ImageSource {
    /// Parses an image reference.
    ///
    /// Strings without a scheme are treated as filesystem paths, as are
    /// single-letter schemes (Windows drive letters).
    pub fn parse(reference: &str) -> Result<Self, ImageError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ImageError::InvalidSource(reference.to_string()));
        }

        match Url::parse(reference) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Self::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::Local)
                    .map_err(|()| ImageError::InvalidSource(reference.to_string())),
                scheme if scheme.len() == 1 => Ok(Self::Local(PathBuf::from(reference))),
                _ => Err(ImageError::InvalidSource(reference.to_string())),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(Self::Local(PathBuf::from(reference)))
            }
            Err(_) => Err(ImageError::InvalidSource(reference.to_string())),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Remote(url) => write!(f, "{}", url),
            ImageSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_url_is_remote() {
        let source = ImageSource::parse("https://example.com/a.jpg").expect("valid");
        assert!(matches!(source, ImageSource::Remote(url) if url.host_str() == Some("example.com")));
    }

    #[test]
    fn relative_path_is_local() {
        let source = ImageSource::parse("photos/a.png").expect("valid");
        assert_eq!(source, ImageSource::Local(PathBuf::from("photos/a.png")));
    }

    #[cfg(unix)]
    #[test]
    fn file_url_is_local() {
        let source = ImageSource::parse("file:///tmp/a.png").expect("valid");
        assert_eq!(source, ImageSource::Local(PathBuf::from("/tmp/a.png")));
    }

    #[cfg(unix)]
    #[test]
    fn absolute_path_is_local() {
        let source = ImageSource::parse("/tmp/a.png").expect("valid");
        assert_eq!(source, ImageSource::Local(PathBuf::from("/tmp/a.png")));
    }

    #[test]
    fn unsupported_scheme_is_invalid() {
        let err = ImageSource::parse("ftp://example.com/a.jpg").expect_err("invalid");
        assert!(matches!(err, ImageError::InvalidSource(_)));
    }

    #[test]
    fn malformed_url_is_invalid() {
        assert!(ImageSource::parse("http://[::1").is_err());
        assert!(ImageSource::parse("   ").is_err());
    }
}
