//! Compression presets and their target profiles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named compression target selectable in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// General web use
    #[default]
    Website,
    /// Shopify product images
    Shopify,
    /// WordPress media library
    Wordpress,
    /// Print-quality output
    Printing,
}

/// Size and dimension targets attached to a preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetConfig {
    /// Output size ceiling in megabytes
    #[serde(rename = "maxSizeMB")]
    pub max_size_mb: f64,
    /// Longest-side ceiling in pixels
    #[serde(rename = "maxWidthOrHeight")]
    pub max_width_or_height: u32,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 4] = [
        Preset::Website,
        Preset::Shopify,
        Preset::Wordpress,
        Preset::Printing,
    ];

    /// Targets this preset compresses toward.
    pub fn config(&self) -> PresetConfig {
        match self {
            Self::Website => PresetConfig {
                max_size_mb: 0.5,
                max_width_or_height: 1200,
            },
            Self::Shopify => PresetConfig {
                max_size_mb: 1.0,
                max_width_or_height: 2048,
            },
            Self::Wordpress => PresetConfig {
                max_size_mb: 0.8,
                max_width_or_height: 1600,
            },
            Self::Printing => PresetConfig {
                max_size_mb: 3.0,
                max_width_or_height: 3000,
            },
        }
    }

    /// Capitalized name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Shopify => "Shopify",
            Self::Wordpress => "Wordpress",
            Self::Printing => "Printing",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl PresetConfig {
    /// Output size ceiling in bytes.
    pub fn max_size_bytes(&self) -> u64 {
        (self.max_size_mb * 1024.0 * 1024.0) as u64
    }
}
