//! Shared workflow state observed by the presentation layer.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use tokio::sync::Mutex;
use crate::core::CompressionResult;

/// Observable state of the compression workflow.
///
/// Holds the in-flight flag that gates re-entry, the single progress
/// value shared by every file in the running batch, and the most
/// recently published batch of results.
#[derive(Default)]
pub struct CompressorState {
    compressing: AtomicBool,
    progress: AtomicU8,
    results: Mutex<Vec<CompressionResult>>,
}

impl CompressorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a batch is currently in flight.
    pub fn is_compressing(&self) -> bool {
        self.compressing.load(Ordering::Acquire)
    }

    /// Latest progress value, 0-100.
    ///
    /// Concurrent files write the same value; the latest report wins.
    pub fn progress(&self) -> u8 {
        self.progress.load(Ordering::Relaxed)
    }

    pub(crate) fn set_progress(&self, pct: u8) {
        self.progress.store(pct.min(100), Ordering::Relaxed);
    }

    /// Try to claim the in-flight flag. Returns false if a batch already runs.
    pub(crate) fn try_begin(&self) -> bool {
        let claimed = self
            .compressing
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok();
        if claimed {
            self.progress.store(0, Ordering::Relaxed);
        }
        claimed
    }

    /// Release the in-flight flag and reset progress. Runs on every exit path.
    pub(crate) fn finish(&self) {
        self.progress.store(0, Ordering::Relaxed);
        self.compressing.store(false, Ordering::Release);
    }

    /// Results of the last successfully completed batch, in input order.
    pub async fn results(&self) -> Vec<CompressionResult> {
        self.results.lock().await.clone()
    }

    /// Replace the published batch. Only called after a fully successful run.
    pub(crate) async fn publish(&self, batch: Vec<CompressionResult>) {
        *self.results.lock().await = batch;
    }
}
