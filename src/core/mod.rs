//! Core workflow types and shared state.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`CompressorState`]: Observable workflow state (in-flight flag, progress, results)
//! - [`CandidateFile`]: A file offered by the presentation layer
//! - [`CompressionResult`]: Result of compressing a single file
//! - [`HistoryEntry`]: One line of the persisted history log
//! - [`Preset`]: Named compression targets
//! - [`Notification`]: Outcome notifications and their delivery sink

mod notify;
mod presets;
mod state;
mod types;

pub use notify::{Notification, NotificationSink, TracingSink};
pub use presets::{Preset, PresetConfig};
pub use state::CompressorState;
pub use types::{CandidateFile, CompressedImage, CompressionResult, HistoryEntry, UploadMode};
