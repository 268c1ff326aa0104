//! Key-value stores backing the history log.
//!
//! The store contract is string-in, string-out; serialization of the
//! values it holds belongs to the caller. Two implementations ship: an
//! in-memory map for tests and ephemeral runs, and a JSON file store
//! for persistence across runs.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::utils::{CompressorError, CompressorResult};

/// String key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, or `None` when the key is absent.
    async fn get(&self, key: &str) -> CompressorResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> CompressorResult<()>;
}

/// Volatile in-memory store.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> CompressorResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CompressorResult<()> {
        self.entries.lock().await.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a single JSON object file, one property per key.
///
/// Reads always go to disk, so a second store pointed at the same path
/// sees earlier writes. The file and its parent directory are created
/// on first write.
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the backing file.
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_map(&self) -> CompressorResult<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&raw).map_err(|e| {
            CompressorError::storage(format!(
                "Store file {} is not valid JSON: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> CompressorResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CompressorResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = match self.read_map().await {
            Ok(map) => map,
            Err(err) => {
                warn!("Discarding unreadable store file on write: {err}");
                HashMap::new()
            }
        };
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(&map)
            .map_err(|e| CompressorError::storage(format!("Failed to serialize store: {e}")))?;
        fs::write(&self.path, raw).await?;
        debug!("Persisted {} key(s) to {}", map.len(), self.path.display());
        Ok(())
    }
}
