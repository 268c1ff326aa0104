//! Core types for dropped files, compression results, and history entries.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A file offered to the workflow by the presentation layer.
///
/// Mirrors what a browser-style drop event carries: a display name,
/// the MIME type reported for the payload, and the raw bytes.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    /// Display name, e.g. `photo.jpg`
    pub name: String,
    /// Reported MIME type, e.g. `image/jpeg`
    pub mime_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Payload size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Compressed payload produced by a compression executor.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    /// Encoded output bytes
    pub data: Vec<u8>,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// MIME type of the encoded output
    pub mime_type: String,
}

impl CompressedImage {
    /// Encoded size in bytes
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Result of compressing a single file.
///
/// Pairs the originating file metadata with the compressed payload and
/// the statistics the result list displays.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    /// Name of the originating file
    #[serde(rename = "originalName")]
    pub original_name: String,
    /// Input size in bytes
    #[serde(rename = "originalSize")]
    pub original_size: u64,
    /// Output size in bytes
    #[serde(rename = "compressedSize")]
    pub compressed_size: u64,
    /// Bytes saved (can be negative if the file grew)
    #[serde(rename = "savedBytes")]
    pub saved_bytes: i64,
    /// Compression ratio as a percentage
    #[serde(rename = "compressionRatio")]
    pub compression_ratio: f64,
    /// MIME type of the compressed payload
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Compressed payload, kept out of the serialized form
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl CompressionResult {
    /// Build a result from the originating file and the executor output.
    pub fn new(file: &CandidateFile, image: CompressedImage) -> Self {
        let CompressedImage {
            data, mime_type, ..
        } = image;
        let original_size = file.size();
        let compressed_size = data.len() as u64;
        let saved_bytes = original_size as i64 - compressed_size as i64;
        let compression_ratio = if original_size == 0 {
            0.0
        } else {
            (1.0 - compressed_size as f64 / original_size as f64) * 100.0
        };
        Self {
            original_name: file.name.clone(),
            original_size,
            compressed_size,
            saved_bytes,
            compression_ratio,
            mime_type,
            data,
        }
    }

    /// File name offered when the payload is downloaded.
    pub fn download_name(&self) -> String {
        format!("compressed_{}", self.original_name)
    }
}

/// One line of the persisted compression history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Name of the originating file
    #[serde(rename = "originalName")]
    pub original_name: String,
    /// Input size in bytes
    #[serde(rename = "originalSize")]
    pub original_size: u64,
    /// Output size in bytes
    #[serde(rename = "compressedSize")]
    pub compressed_size: u64,
    /// Completion time as milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Create an entry stamped with the current wall-clock time.
    pub fn new(original_name: impl Into<String>, original_size: u64, compressed_size: u64) -> Self {
        Self {
            original_name: original_name.into(),
            original_size,
            compressed_size,
            timestamp: now_ms(),
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// How a drop maps to work: first file only, or the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    /// Compress only the first offered file
    Single,
    /// Compress every offered file
    #[default]
    Bulk,
}
