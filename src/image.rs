//! Decoding of the base64 image payload attached to a word.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image payload is empty")]
    Empty,
    #[error("invalid base64 image payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Container format, sniffed from the first bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
    Unknown,
}

impl ImageFormat {
    pub fn sniff(bytes: &[u8]) -> Self {
        match bytes {
            [0xFF, 0xD8, 0xFF, ..] => Self::Jpeg,
            [0x89, b'P', b'N', b'G', ..] => Self::Png,
            [b'G', b'I', b'F', b'8', ..] => Self::Gif,
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Self::WebP,
            _ => Self::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::WebP => "WebP",
            Self::Unknown => "image",
        }
    }
}

/// Decode a payload, tolerating a `data:` URL prefix and line breaks.
pub fn decode(payload: &str) -> Result<Vec<u8>, ImageError> {
    let body = match payload.split_once(";base64,") {
        Some((prefix, body)) if prefix.starts_with("data:") => body,
        _ => payload,
    };
    let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(ImageError::Empty);
    }
    Ok(STANDARD.decode(compact)?)
}

/// What the card's image panel has to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePreview {
    Missing,
    Broken,
    Decoded { format: ImageFormat, bytes: usize },
}

impl ImagePreview {
    pub fn from_payload(payload: Option<&str>) -> Self {
        let Some(payload) = payload else {
            return Self::Missing;
        };

        match decode(payload) {
            Ok(bytes) => Self::Decoded {
                format: ImageFormat::sniff(&bytes),
                bytes: bytes.len(),
            },
            Err(ImageError::Empty) => Self::Missing,
            Err(e) => {
                tracing::debug!(error = %e, "image payload could not be decoded");
                Self::Broken
            }
        }
    }

    /// One-line caption for the placeholder panel.
    pub fn caption(&self) -> String {
        match self {
            Self::Missing => "no image".to_string(),
            Self::Broken => "broken image".to_string(),
            Self::Decoded { format, bytes } => {
                format!("{} · {}", format.name(), human_size(*bytes))
            }
        }
    }
}

fn human_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 8 bytes: JPEG SOI marker followed by padding.
    const JPEG_STUB: &str = "/9j/4AAQSkY=";

    #[test]
    fn sniffs_known_formats() {
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::sniff(b"\x89PNG\r\n\x1a\n"), ImageFormat::Png);
        assert_eq!(ImageFormat::sniff(b"GIF89a"), ImageFormat::Gif);
        assert_eq!(ImageFormat::sniff(b"RIFF\0\0\0\0WEBPVP8 "), ImageFormat::WebP);
        assert_eq!(ImageFormat::sniff(b"hello"), ImageFormat::Unknown);
        assert_eq!(ImageFormat::sniff(&[]), ImageFormat::Unknown);
    }

    #[test]
    fn decodes_plain_payload() {
        let bytes = decode(JPEG_STUB).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(ImageFormat::sniff(&bytes), ImageFormat::Jpeg);
    }

    #[test]
    fn decodes_data_url_with_line_breaks() {
        let payload = "data:image/jpeg;base64,/9j/4AAQ\nSkY=";
        assert_eq!(decode(payload).unwrap().len(), 8);
    }

    #[test]
    fn empty_payload_is_an_error() {
        assert!(matches!(decode("  \n"), Err(ImageError::Empty)));
    }

    #[test]
    fn invalid_payload_is_an_error() {
        assert!(matches!(decode("not base64!"), Err(ImageError::Decode(_))));
    }

    #[test]
    fn preview_degrades_gracefully() {
        assert_eq!(ImagePreview::from_payload(None), ImagePreview::Missing);
        assert_eq!(ImagePreview::from_payload(Some("")), ImagePreview::Missing);
        assert_eq!(ImagePreview::from_payload(Some("%%%")), ImagePreview::Broken);
        assert_eq!(
            ImagePreview::from_payload(Some(JPEG_STUB)),
            ImagePreview::Decoded { format: ImageFormat::Jpeg, bytes: 8 }
        );
    }

    #[test]
    fn captions() {
        assert_eq!(ImagePreview::Missing.caption(), "no image");
        assert_eq!(ImagePreview::Broken.caption(), "broken image");
        let preview = ImagePreview::Decoded { format: ImageFormat::Png, bytes: 2048 };
        assert_eq!(preview.caption(), "PNG · 2.0 KiB");
        let preview = ImagePreview::Decoded { format: ImageFormat::Unknown, bytes: 12 };
        assert_eq!(preview.caption(), "image · 12 B");
    }
}
