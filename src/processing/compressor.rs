//! Compression workflow orchestration.
//!
//! Drives a dropped batch end to end: validation, preset resolution,
//! concurrent execution through the configured executor, per-file
//! history appends, and the final publish-or-roll-back decision.

use std::sync::Arc;
use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::core::{
    CandidateFile, CompressionResult, CompressorState, HistoryEntry, Notification,
    NotificationSink, Preset, UploadMode,
};
use crate::history::HistoryRecorder;
use crate::processing::executor::{CompressionExecutor, CompressionOptions, ProgressFn};
use crate::processing::validation::validate_batch;
use crate::utils::{CompressorError, CompressorResult, format_size};

/// What became of one drop.
#[derive(Debug)]
pub enum DropOutcome {
    /// Every file compressed; results are published on the shared state.
    Completed { compressed: usize },
    /// The batch was rejected up front or failed mid-flight.
    Rejected(CompressorError),
    /// A batch was already in flight; the drop was discarded.
    Ignored,
    /// Nothing was offered; no work, no notification.
    Empty,
}

/// Batch compression workflow.
///
/// One instance owns the observable state, the history log, and the
/// notification channel; drops are processed one batch at a time.
pub struct ImageCompressor {
    executor: Arc<dyn CompressionExecutor>,
    sink: Arc<dyn NotificationSink>,
    history: HistoryRecorder,
    state: Arc<CompressorState>,
}

impl ImageCompressor {
    pub fn new(
        executor: Arc<dyn CompressionExecutor>,
        sink: Arc<dyn NotificationSink>,
        history: HistoryRecorder,
    ) -> Self {
        Self {
            executor,
            sink,
            history,
            state: Arc::new(CompressorState::new()),
        }
    }

    /// Observable workflow state for the presentation layer.
    pub fn state(&self) -> Arc<CompressorState> {
        Arc::clone(&self.state)
    }

    /// Persisted history log.
    pub fn history(&self) -> &HistoryRecorder {
        &self.history
    }

    /// Process one drop of candidate files.
    ///
    /// The offered batch validates as a whole before anything runs. In
    /// single mode only the first file is compressed, but validation
    /// still covers everything that was offered. Files compress
    /// concurrently; one failure abandons the batch, rolls back its
    /// history appends, and leaves previously published results alone.
    ///
    /// # Arguments
    /// * `files` - Files from the drop, in presentation order
    /// * `preset` - Compression target for every file in the batch
    /// * `mode` - Whether the drop means one file or all of them
    pub async fn process_drop(
        &self,
        mut files: Vec<CandidateFile>,
        preset: Preset,
        mode: UploadMode,
    ) -> DropOutcome {
        if self.state.is_compressing() {
            debug!("Drop ignored: a batch is already in flight");
            return DropOutcome::Ignored;
        }

        if let Err(err) = validate_batch(&files) {
            warn!("Batch rejected: {err}");
            self.sink.notify(&Notification::ValidationRejected);
            return DropOutcome::Rejected(err);
        }

        if mode == UploadMode::Single {
            files.truncate(1);
        }
        if files.is_empty() {
            debug!("Empty drop, nothing to compress");
            return DropOutcome::Empty;
        }

        if !self.state.try_begin() {
            debug!("Drop ignored: lost the start race");
            return DropOutcome::Ignored;
        }

        info!(
            "Compressing {} file(s) with the {preset} preset in {mode:?} mode",
            files.len()
        );
        let options = CompressionOptions::for_preset(preset);
        let history_mark = self.history.len().await;

        let outcome = match self.run_batch(&files, &options).await {
            Ok(results) => {
                let compressed = results.len();
                let saved: i64 = results.iter().map(|r| r.saved_bytes).sum();
                info!(
                    "Batch complete: {compressed} file(s), {} saved",
                    format_size(saved.max(0) as u64)
                );
                self.state.publish(results).await;
                self.sink.notify(&Notification::Success { compressed });
                DropOutcome::Completed { compressed }
            }
            Err(err) => {
                warn!("Batch failed: {err}");
                if let Err(rollback_err) = self.history.truncate(history_mark).await {
                    warn!("History rollback failed: {rollback_err}");
                }
                self.sink.notify(&Notification::CompressionFailed);
                DropOutcome::Rejected(err)
            }
        };

        self.state.finish();
        outcome
    }

    /// Runs every file concurrently and fails fast on the first error.
    ///
    /// Results come back in input order regardless of completion order.
    async fn run_batch(
        &self,
        files: &[CandidateFile],
        options: &CompressionOptions,
    ) -> CompressorResult<Vec<CompressionResult>> {
        try_join_all(files.iter().map(|file| self.compress_file(file, options))).await
    }

    /// Compresses one file and appends its history entry on completion.
    async fn compress_file(
        &self,
        file: &CandidateFile,
        options: &CompressionOptions,
    ) -> CompressorResult<CompressionResult> {
        let image = self
            .executor
            .compress(file, options, self.progress_fn())
            .await?;

        self.history
            .record(HistoryEntry::new(&file.name, file.size(), image.size()))
            .await?;

        debug!(
            "'{}' compressed: {} → {}",
            file.name,
            format_size(file.size()),
            format_size(image.size())
        );
        Ok(CompressionResult::new(file, image))
    }

    /// Progress reports from every in-flight file land on the one shared value.
    fn progress_fn(&self) -> ProgressFn {
        let state = Arc::clone(&self.state);
        Arc::new(move |pct| state.set_progress(pct))
    }
}
