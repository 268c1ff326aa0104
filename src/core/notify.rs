//! User-facing notifications emitted by the workflow.

use std::fmt;
use tracing::{info, warn};

/// Outcome notification delivered to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A batch finished and every file compressed.
    Success { compressed: usize },
    /// The offered batch contained a non-image or oversized file.
    ValidationRejected,
    /// At least one file in the batch failed to compress.
    CompressionFailed,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { compressed } => {
                write!(f, "{compressed} images compressed successfully!")
            }
            Self::ValidationRejected => f.write_str("Only image files under 5MB are allowed"),
            Self::CompressionFailed => f.write_str("Compression failed. Please try again."),
        }
    }
}

/// Delivery channel for workflow notifications.
///
/// The presentation layer decides how a notification surfaces; the
/// workflow only reports that one happened.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, note: &Notification);
}

/// Sink that forwards notifications to the tracing subscriber.
///
/// Useful as a default when no interactive surface is attached.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, note: &Notification) {
        match note {
            Notification::Success { .. } => info!("{note}"),
            _ => warn!("{note}"),
        }
    }
}
