//! Persisted log of completed compressions.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::core::HistoryEntry;
use crate::history::store::KeyValueStore;
use crate::utils::{CompressorError, CompressorResult};

/// Store key holding the serialized history log.
pub const HISTORY_KEY: &str = "compressionHistory";

/// Append-only history log over a key-value store.
///
/// The log loads once at construction and is the source of truth from
/// then on; every append rewrites the full value under [`HISTORY_KEY`].
/// A stored value that does not parse as a history log is treated as
/// empty rather than surfaced as an error.
pub struct HistoryRecorder {
    store: Arc<dyn KeyValueStore>,
    log: Mutex<Vec<HistoryEntry>>,
}

impl HistoryRecorder {
    /// Load the history log from `store`.
    ///
    /// Store read failures surface as errors; a present but malformed
    /// value starts an empty log instead.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> CompressorResult<Self> {
        let log = match store.get(HISTORY_KEY).await? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => {
                    debug!("Loaded {} history entries", entries.len());
                    entries
                }
                Err(err) => {
                    warn!("Stored history is malformed, starting empty: {err}");
                    Vec::new()
                }
            },
        };
        Ok(Self {
            store,
            log: Mutex::new(log),
        })
    }

    /// Append one entry and persist the grown log.
    ///
    /// Appends happen in completion order when files finish
    /// concurrently. The entry stays in memory only if the store write
    /// succeeds.
    pub async fn record(&self, entry: HistoryEntry) -> CompressorResult<()> {
        let mut log = self.log.lock().await;
        log.push(entry);
        if let Err(err) = self.persist(&log).await {
            log.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Full log, oldest first.
    pub async fn entries(&self) -> Vec<HistoryEntry> {
        self.log.lock().await.clone()
    }

    /// The `count` newest entries, newest first.
    pub async fn recent(&self, count: usize) -> Vec<HistoryEntry> {
        self.log.lock().await.iter().rev().take(count).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.log.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.log.lock().await.is_empty()
    }

    /// Drop entries past `len` and persist the shrunken log.
    ///
    /// Used to unwind the appends of an abandoned batch.
    pub(crate) async fn truncate(&self, len: usize) -> CompressorResult<()> {
        let mut log = self.log.lock().await;
        if log.len() <= len {
            return Ok(());
        }
        debug!("Rolling history back from {} to {len} entries", log.len());
        log.truncate(len);
        self.persist(&log).await
    }

    async fn persist(&self, log: &[HistoryEntry]) -> CompressorResult<()> {
        let raw = serde_json::to_string(log)
            .map_err(|e| CompressorError::storage(format!("Failed to serialize history: {e}")))?;
        self.store.set(HISTORY_KEY, &raw).await
    }
}
