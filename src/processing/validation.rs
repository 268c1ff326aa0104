//! Batch validation for dropped files.
//!
//! A batch is accepted whole or rejected whole: one bad file rejects
//! everything that was offered alongside it.

use tracing::debug;

use crate::core::CandidateFile;
use crate::utils::{CompressorResult, ValidationError, is_image_mime};

/// Largest accepted payload, in bytes (5 MB).
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Validate one candidate file.
///
/// A file is acceptable when its MIME type is in the `image/` family
/// and its payload does not exceed [`MAX_FILE_SIZE`]. A file exactly at
/// the limit is acceptable.
pub fn validate_file(file: &CandidateFile) -> CompressorResult<()> {
    if !is_image_mime(&file.mime_type) {
        return Err(ValidationError::not_an_image(&file.name, &file.mime_type).into());
    }
    if file.size() > MAX_FILE_SIZE {
        return Err(ValidationError::too_large(&file.name, file.size(), MAX_FILE_SIZE).into());
    }
    Ok(())
}

/// Validate every offered file, failing on the first unacceptable one.
///
/// Validation runs over the full offered batch before any truncation
/// for single mode, so a bad second file still rejects a single-mode drop.
pub fn validate_batch(files: &[CandidateFile]) -> CompressorResult<()> {
    for file in files {
        validate_file(file)?;
    }
    debug!("Validated {} candidate file(s)", files.len());
    Ok(())
}
