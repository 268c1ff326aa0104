//! Native in-process compression backend.
//!
//! Each file is compressed inside a `tokio::task::spawn_blocking` call so the
//! async runtime is never blocked while pixels move. Decode and encode go
//! through the `image` crate; resampling goes through `fast_image_resize`.

use async_trait::async_trait;
use image::GenericImageView;
use tracing::debug;

use crate::core::{CandidateFile, CompressedImage};
use crate::processing::executor::{CompressionExecutor, CompressionOptions, ProgressFn};
use crate::utils::{CompressorError, CompressorResult, ImageFormat};

use super::{encode, resize};

/// Tuning knobs for the encode ladder.
#[derive(Debug, Clone, Copy)]
pub struct NativeExecutorConfig {
    /// Re-encode attempts allowed after the first before settling
    pub max_iterations: u32,
    /// Quality of the first JPEG attempt
    pub initial_quality: u8,
    /// Floor of the JPEG quality ladder
    pub min_quality: u8,
    /// Quality drop per ladder step
    pub quality_step: u8,
    /// Dimension multiplier once quality alone is exhausted
    pub scale_step: f64,
}

impl Default for NativeExecutorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            initial_quality: 85,
            min_quality: 40,
            quality_step: 10,
            scale_step: 0.9,
        }
    }
}

/// Executor that compresses entirely in process, with no external services.
#[derive(Debug, Default)]
pub struct NativeExecutor {
    config: NativeExecutorConfig,
}

impl NativeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NativeExecutorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CompressionExecutor for NativeExecutor {
    async fn compress(
        &self,
        file: &CandidateFile,
        options: &CompressionOptions,
        on_progress: ProgressFn,
    ) -> CompressorResult<CompressedImage> {
        if options.use_background_worker {
            let file = file.clone();
            let options = *options;
            let config = self.config;
            tokio::task::spawn_blocking(move || {
                compress_single(&file, &options, &config, &on_progress)
            })
            .await
            .map_err(|e| CompressorError::compression(format!("Compression task panicked: {e}")))?
        } else {
            compress_single(file, options, &self.config, &on_progress)
        }
    }
}

// ── Blocking compression (runs on tokio's blocking thread pool) ──────────────────────

/// Compresses one file synchronously.
///
/// Decodes, fits the image inside the dimension ceiling, then walks the
/// encode ladder toward the byte ceiling: JPEG drops quality first, the
/// lossless formats shrink dimensions, and both fall back to shrinking
/// once the quality floor is hit. Stops after `max_iterations` attempts
/// and settles for the last payload.
fn compress_single(
    file: &CandidateFile,
    options: &CompressionOptions,
    config: &NativeExecutorConfig,
    on_progress: &ProgressFn,
) -> CompressorResult<CompressedImage> {
    let decoded = image::load_from_memory(&file.bytes)
        .map_err(|e| CompressorError::format(format!("Failed to decode '{}': {e}", file.name)))?;
    on_progress(5);

    let (original_width, original_height) = decoded.dimensions();
    debug!(
        "Decoded '{}': {original_width}×{original_height}",
        file.name
    );

    let target = resolve_output_format(&file.mime_type);

    let (mut working, mut rescaled) =
        match resize::fit_within(&decoded, options.max_width_or_height)? {
            Some(resized) => (resized, true),
            None => (decoded, false),
        };
    on_progress(25);

    let max_bytes = options.max_size_bytes();
    let mut quality = config.initial_quality;
    let mut best = encode::encode_image_as(&working, target, quality)?;
    let mut attempts = 0u32;

    while best.len() as u64 > max_bytes && attempts < config.max_iterations {
        if target.supports_quality() && quality > config.min_quality {
            quality = quality.saturating_sub(config.quality_step).max(config.min_quality);
        } else {
            working = resize::scale_down(&working, config.scale_step)?;
            rescaled = true;
        }
        best = encode::encode_image_as(&working, target, quality)?;
        attempts += 1;
        on_progress((30 + 65 * attempts / config.max_iterations) as u8);
    }

    // No resize and no byte win: hand the original payload back untouched.
    if !rescaled && best.len() as u64 >= file.size() {
        debug!("'{}' is already compact, passing it through", file.name);
        on_progress(100);
        return Ok(CompressedImage {
            data: file.bytes.clone(),
            width: original_width,
            height: original_height,
            mime_type: file.mime_type.clone(),
        });
    }

    on_progress(100);
    let (width, height) = working.dimensions();
    debug!(
        "'{}' encoded as {target:?}: {} → {} bytes after {attempts} ladder step(s)",
        file.name,
        file.size(),
        best.len()
    );
    Ok(CompressedImage {
        data: best,
        width,
        height,
        mime_type: target.mime_type().to_string(),
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────────────

/// Keeps the input format when the native encoder can produce it, PNG otherwise.
fn resolve_output_format(mime: &str) -> ImageFormat {
    match ImageFormat::from_mime(mime) {
        Some(format) if format.encodable() => format,
        _ => ImageFormat::Png,
    }
}
