//! Error types for the image compressor.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use serde::Serialize;
use thiserror::Error;

/// Validation errors for dropped files.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// MIME type is not an image type
    #[error("Not an image: {name} ({mime})")]
    NotAnImage { name: String, mime: String },
    /// File payload exceeds the size limit
    #[error("File too large: {name} is {size} bytes (limit {limit})")]
    TooLarge { name: String, size: u64, limit: u64 },
}

/// Main error type for the compressor.
///
/// All errors in the crate are converted to this type before being
/// returned to callers.
#[derive(Error, Debug, Serialize)]
pub enum CompressorError {
    /// Batch or file validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Image compression failed
    #[error("Compression error: {0}")]
    Compression(String),

    /// Unsupported or undecodable image payload
    #[error("Format error: {0}")]
    Format(String),

    /// History store read or write error
    #[error("Storage error: {0}")]
    Storage(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for compressor operations.
pub type CompressorResult<T> = Result<T, CompressorError>;

// Helper methods for error creation
impl CompressorError {
    pub fn compression<T: Into<String>>(msg: T) -> Self {
        Self::Compression(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn storage<T: Into<String>>(msg: T) -> Self {
        Self::Storage(msg.into())
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn not_an_image(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self::NotAnImage {
            name: name.into(),
            mime: mime.into(),
        }
    }

    pub fn too_large(name: impl Into<String>, size: u64, limit: u64) -> Self {
        Self::TooLarge {
            name: name.into(),
            size,
            limit,
        }
    }
}

// Convert std::io::Error to CompressorError
impl From<io::Error> for CompressorError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}
