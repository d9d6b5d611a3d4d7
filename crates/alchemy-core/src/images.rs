//! Image references and the download action
//!
//! A rendered image is either a remote URL (simulated renders, ad stock
//! images) or an inline `data:<mime>;base64,<payload>` URI built from the
//! service response.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Errors from decoding or saving an image
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Malformed data URI")]
    MalformedDataUri,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed with status {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ImageResult<T> = Result<T, ImageError>;

/// Parsed form of an image URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Remote(String),
    Inline { mime_type: String, data: String },
}

impl ImageRef {
    /// Inline reference from a media type and a base64 payload
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Inline {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Parse an image URL; anything that is not a base64 data URI is remote
    pub fn parse(url: &str) -> ImageResult<Self> {
        let Some(rest) = url.strip_prefix("data:") else {
            return Ok(Self::Remote(url.to_string()));
        };
        let (mime_type, data) = rest
            .split_once(";base64,")
            .ok_or(ImageError::MalformedDataUri)?;
        Ok(Self::inline(mime_type, data))
    }

    /// URL form, as stored in tool results
    pub fn to_url(&self) -> String {
        match self {
            ImageRef::Remote(url) => url.clone(),
            ImageRef::Inline { mime_type, data } => format!("data:{};base64,{}", mime_type, data),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, ImageRef::Inline { .. })
    }

    /// Raw bytes of an inline image; `None` for remote ones
    pub fn decode_inline(&self) -> ImageResult<Option<Vec<u8>>> {
        match self {
            ImageRef::Remote(_) => Ok(None),
            ImageRef::Inline { data, .. } => Ok(Some(STANDARD.decode(data.trim())?)),
        }
    }
}

/// Save the image behind `url` as `dir/file_name`
///
/// Inline images are decoded locally; remote ones are fetched.
pub async fn save_image(url: &str, dir: &Path, file_name: &str) -> ImageResult<PathBuf> {
    let image = ImageRef::parse(url)?;
    let bytes = match image.decode_inline()? {
        Some(bytes) => bytes,
        None => {
            let response = reqwest::get(url).await?;
            if !response.status().is_success() {
                return Err(ImageError::Status(response.status().as_u16()));
            }
            response.bytes().await?.to_vec()
        }
    };

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_remote_and_inline() {
        assert_eq!(
            ImageRef::parse("https://example.com/a.png").unwrap(),
            ImageRef::Remote("https://example.com/a.png".to_string())
        );

        let inline = ImageRef::parse("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(inline, ImageRef::inline("image/png", "aGVsbG8="));
        assert_eq!(inline.to_url(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(inline.decode_inline().unwrap(), Some(b"hello".to_vec()));
    }

    #[test]
    fn test_malformed_data_uri() {
        assert!(matches!(
            ImageRef::parse("data:image/png,plain"),
            Err(ImageError::MalformedDataUri)
        ));
        assert!(matches!(
            ImageRef::inline("image/png", "***").decode_inline(),
            Err(ImageError::Base64(_))
        ));
    }

    #[tokio::test]
    async fn test_save_inline_image() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out");
        let path = save_image("data:image/png;base64,aGVsbG8=", &target, "typography-HELLO.png")
            .await
            .unwrap();

        assert_eq!(path, target.join("typography-HELLO.png"));
        assert_eq!(std::fs::read(path).unwrap(), b"hello");
    }
}
