pub mod error;
pub mod fmt;
pub mod formats;

pub use error::{CompressorError, CompressorResult, ValidationError};
pub use fmt::format_size;
pub use formats::{ImageFormat, is_image_mime};
