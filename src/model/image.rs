//! Image block metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata of an uploaded image, as attached to an `image` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMeta {
    /// Public URL of the asset
    pub url: String,

    /// Alternative text for accessibility
    #[serde(default)]
    pub alternative_text: Option<String>,

    /// Original file name
    #[serde(default)]
    pub name: String,

    /// Caption
    #[serde(default)]
    pub caption: Option<String>,

    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,

    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,

    /// Responsive variants keyed by format name (thumbnail, small, ...)
    #[serde(default)]
    pub formats: Option<Value>,

    /// Storage hash
    #[serde(default)]
    pub hash: String,

    /// File extension including the dot
    #[serde(default)]
    pub ext: String,

    /// MIME type
    #[serde(default)]
    pub mime: String,

    /// Size in kilobytes
    #[serde(default)]
    pub size: Option<f64>,

    /// Preview URL
    #[serde(default)]
    pub preview_url: Option<String>,

    /// Upload provider name
    #[serde(default)]
    pub provider: String,

    /// Provider specific payload
    #[serde(default, rename = "provider_metadata")]
    pub provider_metadata: Option<Value>,

    /// Upload timestamp
    #[serde(default, skip_deserializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification timestamp
    #[serde(default, skip_deserializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ImageMeta {
    /// Create metadata holding only a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the alternative text.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alternative_text = Some(alt.into());
        self
    }

    /// Alternative text, treating an empty string as absent.
    pub fn alt(&self) -> Option<&str> {
        self.alternative_text
            .as_deref()
            .filter(|alt| !alt.is_empty())
    }

    /// Pixel dimensions, if both are known.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        Some((self.width?, self.height?))
    }

    /// Aspect ratio (width / height), if dimensions are known.
    pub fn aspect_ratio(&self) -> Option<f64> {
        let (w, h) = self.dimensions()?;
        if h == 0 {
            return None;
        }
        Some(f64::from(w) / f64::from(h))
    }
}
