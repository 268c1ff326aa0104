use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
}

impl ImageFormat {
    /// Resolve a format from a browser-style MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::WebP),
            "image/gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Get the canonical MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
            Self::Gif => "image/gif",
        }
    }

    /// Check whether the encoder for this format takes a quality setting
    pub fn supports_quality(&self) -> bool {
        matches!(self, Self::Jpeg)
    }

    /// Check whether this format can be produced by the native encoder
    pub fn encodable(&self) -> bool {
        !matches!(self, Self::Gif)
    }
}

/// Check if a MIME type belongs to the image family
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}
