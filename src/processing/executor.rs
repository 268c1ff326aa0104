//! Compression executor seam.
//!
//! The workflow delegates all pixel-level work through this trait so the
//! orchestration logic never depends on a concrete codec backend.

use std::sync::Arc;
use async_trait::async_trait;

use crate::core::{CandidateFile, CompressedImage, Preset};
use crate::utils::CompressorResult;

/// Progress callback handed to an executor for one file.
///
/// Receives values from 0 to 100. Every file in a batch shares one
/// destination, so reports from concurrent files overwrite each other.
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// Per-file options derived from the selected preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionOptions {
    /// Output size ceiling in megabytes
    pub max_size_mb: f64,
    /// Longest-side ceiling in pixels
    pub max_width_or_height: u32,
    /// Run pixel work off the async runtime
    pub use_background_worker: bool,
}

impl CompressionOptions {
    /// Options for one preset, with background execution turned on.
    pub fn for_preset(preset: Preset) -> Self {
        let config = preset.config();
        Self {
            max_size_mb: config.max_size_mb,
            max_width_or_height: config.max_width_or_height,
            use_background_worker: true,
        }
    }

    /// Output size ceiling in bytes.
    pub fn max_size_bytes(&self) -> u64 {
        (self.max_size_mb * 1024.0 * 1024.0) as u64
    }
}

/// Backend that turns a candidate file into a compressed payload.
///
/// Implementations must be safe to call concurrently; the workflow runs
/// one call per file in the batch at the same time.
#[async_trait]
pub trait CompressionExecutor: Send + Sync {
    /// Compress `file` toward the ceilings in `options`.
    ///
    /// # Arguments
    /// * `file` - Validated candidate with raw image bytes
    /// * `options` - Size and dimension ceilings from the active preset
    /// * `on_progress` - Callback for 0-100 progress reports
    ///
    /// # Returns
    /// The encoded payload with its final dimensions and MIME type.
    async fn compress(
        &self,
        file: &CandidateFile,
        options: &CompressionOptions,
        on_progress: ProgressFn,
    ) -> CompressorResult<CompressedImage>;
}
