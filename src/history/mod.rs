//! Persisted compression history.

mod recorder;
mod store;

pub use recorder::{HISTORY_KEY, HistoryRecorder};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
