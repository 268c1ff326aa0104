mod compressor;
mod executor;
mod native;
mod validation;

pub use compressor::{DropOutcome, ImageCompressor};
pub use executor::{CompressionExecutor, CompressionOptions, ProgressFn};
pub use native::{NativeExecutor, NativeExecutorConfig};
pub use validation::{MAX_FILE_SIZE, validate_batch, validate_file};
