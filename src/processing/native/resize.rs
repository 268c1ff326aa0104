//! Aspect-preserving resize via fast_image_resize.
//!
//! Images are resampled through tightly packed RGBA8 buffers with a
//! Lanczos3 convolution. Upscaling never happens: an image already
//! within its ceiling is left untouched.

use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8x4;
use fir::{ResizeOptions, Resizer};
use image::{DynamicImage, GenericImageView, RgbaImage};
use tracing::debug;

use crate::utils::{CompressorError, CompressorResult};

/// Shrink `image` so its longest side is at most `max_dim`.
///
/// Returns `None` when the image is already within bounds, so callers
/// can keep the original decode untouched.
pub fn fit_within(image: &DynamicImage, max_dim: u32) -> CompressorResult<Option<DynamicImage>> {
    let (width, height) = image.dimensions();
    if width.max(height) <= max_dim {
        return Ok(None);
    }

    let (new_width, new_height) = if width >= height {
        (
            max_dim,
            ((height as u64 * max_dim as u64) / width as u64).max(1) as u32,
        )
    } else {
        (
            ((width as u64 * max_dim as u64) / height as u64).max(1) as u32,
            max_dim,
        )
    };

    debug!("Resizing {width}×{height} → {new_width}×{new_height}");
    resample(image, new_width, new_height).map(Some)
}

/// Shrink `image` by `factor` (0 < factor < 1), with a one pixel floor.
///
/// Used by the size ladder when lowering quality alone cannot reach the
/// byte ceiling. A factor that would not change the dimensions returns
/// the image as-is.
pub fn scale_down(image: &DynamicImage, factor: f64) -> CompressorResult<DynamicImage> {
    let (width, height) = image.dimensions();
    let new_width = ((width as f64 * factor) as u32).max(1);
    let new_height = ((height as f64 * factor) as u32).max(1);
    if new_width >= width && new_height >= height {
        return Ok(image.clone());
    }
    resample(image, new_width.min(width), new_height.min(height))
}

fn resample(image: &DynamicImage, new_width: u32, new_height: u32) -> CompressorResult<DynamicImage> {
    let (width, height) = image.dimensions();
    let rgba = image.to_rgba8();

    let src = TypedImageRef::<U8x4>::from_buffer(width, height, rgba.as_raw())
        .map_err(|e| CompressorError::compression(format!("Bad resize source buffer: {e}")))?;

    let mut dst_buf = vec![0u8; new_width as usize * new_height as usize * 4];
    {
        let mut dst = TypedImage::<U8x4>::from_buffer(new_width, new_height, dst_buf.as_mut_slice())
            .map_err(|e| CompressorError::compression(format!("Bad resize target buffer: {e}")))?;

        let opts = ResizeOptions::new()
            .resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::Lanczos3));
        Resizer::new()
            .resize_typed::<U8x4>(&src, &mut dst, &opts)
            .map_err(|e| CompressorError::compression(format!("Resize failed: {e}")))?;
    }

    let out = RgbaImage::from_raw(new_width, new_height, dst_buf)
        .ok_or_else(|| CompressorError::compression("Resize produced a malformed buffer"))?;
    Ok(DynamicImage::ImageRgba8(out))
}
