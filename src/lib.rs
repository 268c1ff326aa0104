// Module declarations in dependency order
pub mod core;
pub mod history;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{
    CandidateFile, CompressedImage, CompressionResult, CompressorState, HistoryEntry,
    Notification, NotificationSink, Preset, PresetConfig, TracingSink, UploadMode,
};
pub use crate::history::{HISTORY_KEY, HistoryRecorder, JsonFileStore, KeyValueStore, MemoryStore};
pub use crate::processing::{
    CompressionExecutor, CompressionOptions, DropOutcome, ImageCompressor, MAX_FILE_SIZE,
    NativeExecutor, NativeExecutorConfig, ProgressFn,
};
pub use crate::utils::{
    CompressorError, CompressorResult, ImageFormat, ValidationError, format_size,
};
