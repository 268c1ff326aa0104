//! Format-specific encoding via the `image` crate.

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::codecs::webp::WebPEncoder;

use crate::utils::{CompressorError, CompressorResult, ImageFormat};

/// Encode `image` as `format`, honoring `quality` for quality-tunable formats.
///
/// GIF input has no encoder here and falls back to PNG; callers resolve
/// the actual output format up front via [`ImageFormat::encodable`].
pub fn encode_image_as(
    image: &DynamicImage,
    format: ImageFormat,
    quality: u8,
) -> CompressorResult<Vec<u8>> {
    match format {
        ImageFormat::Jpeg => encode_jpeg(image, quality),
        ImageFormat::Png | ImageFormat::Gif => encode_png(image),
        ImageFormat::WebP => encode_webp(image),
    }
}

/// Encode as JPEG at the given quality (1-100). Alpha is flattened.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> CompressorResult<Vec<u8>> {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| CompressorError::format(format!("JPEG encode failed: {e}")))?;
    Ok(buf)
}

/// Encode as PNG at the strongest compression level.
pub fn encode_png(image: &DynamicImage) -> CompressorResult<Vec<u8>> {
    let rgba = DynamicImage::ImageRgba8(image.to_rgba8());
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive);
    rgba.write_with_encoder(encoder)
        .map_err(|e| CompressorError::format(format!("PNG encode failed: {e}")))?;
    Ok(buf)
}

/// Encode as lossless WebP.
pub fn encode_webp(image: &DynamicImage) -> CompressorResult<Vec<u8>> {
    let rgba = DynamicImage::ImageRgba8(image.to_rgba8());
    let mut buf = Vec::new();
    let encoder = WebPEncoder::new_lossless(&mut buf);
    rgba.write_with_encoder(encoder)
        .map_err(|e| CompressorError::format(format!("WebP encode failed: {e}")))?;
    Ok(buf)
}
