//! History log and store persistence tests.

mod common;

use std::sync::Arc;

use common::{FailingStore, init_tracing};
use image_compressor::{
    CompressorError, HISTORY_KEY, HistoryEntry, HistoryRecorder, JsonFileStore, KeyValueStore,
    MemoryStore,
};

#[tokio::test]
async fn an_empty_store_loads_an_empty_log() {
    init_tracing();
    let recorder = HistoryRecorder::load(Arc::new(MemoryStore::new())).await.unwrap();
    assert!(recorder.is_empty().await);
    assert!(recorder.entries().await.is_empty());
    assert!(recorder.recent(5).await.is_empty());
}

#[tokio::test]
async fn the_log_survives_a_reload_from_the_same_store() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());

    let recorder = HistoryRecorder::load(store.clone()).await.unwrap();
    recorder.record(HistoryEntry::new("a.jpg", 1000, 400)).await.unwrap();
    recorder.record(HistoryEntry::new("b.png", 2000, 900)).await.unwrap();
    let before = recorder.entries().await;

    let reloaded = HistoryRecorder::load(store).await.unwrap();
    assert_eq!(reloaded.entries().await, before);
    assert_eq!(reloaded.len().await, 2);
}

#[tokio::test]
async fn malformed_stored_history_loads_as_empty() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    store.set(HISTORY_KEY, "definitely not json").await.unwrap();

    let recorder = HistoryRecorder::load(store.clone()).await.unwrap();
    assert!(recorder.is_empty().await);

    // The next append overwrites the bad value with a clean log.
    recorder.record(HistoryEntry::new("fresh.jpg", 500, 100)).await.unwrap();
    let raw = store.get(HISTORY_KEY).await.unwrap().unwrap();
    let parsed: Vec<HistoryEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].original_name, "fresh.jpg");
}

#[tokio::test]
async fn a_wrong_shape_under_the_key_also_loads_as_empty() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    store.set(HISTORY_KEY, "{\"not\": \"a list\"}").await.unwrap();

    let recorder = HistoryRecorder::load(store).await.unwrap();
    assert!(recorder.is_empty().await);
}

#[tokio::test]
async fn recent_returns_the_newest_entries_first() {
    init_tracing();
    let recorder = HistoryRecorder::load(Arc::new(MemoryStore::new())).await.unwrap();
    for i in 0..7u64 {
        recorder
            .record(HistoryEntry::new(format!("file{i}.jpg"), 1000 + i, 100 + i))
            .await
            .unwrap();
    }

    let recent: Vec<_> = recorder
        .recent(5)
        .await
        .into_iter()
        .map(|e| e.original_name)
        .collect();
    assert_eq!(
        recent,
        ["file6.jpg", "file5.jpg", "file4.jpg", "file3.jpg", "file2.jpg"]
    );

    // Asking for more than exists returns everything, newest first.
    assert_eq!(recorder.recent(100).await.len(), 7);
}

#[tokio::test]
async fn stored_json_uses_the_presentation_key_names() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let recorder = HistoryRecorder::load(store.clone()).await.unwrap();
    recorder.record(HistoryEntry::new("pic.jpg", 4096, 1024)).await.unwrap();

    let raw = store.get(HISTORY_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];
    assert_eq!(first["originalName"], "pic.jpg");
    assert_eq!(first["originalSize"], 4096);
    assert_eq!(first["compressedSize"], 1024);
    assert!(first["timestamp"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn a_failed_persist_leaves_the_log_unchanged() {
    init_tracing();
    let recorder = HistoryRecorder::load(Arc::new(FailingStore::new())).await.unwrap();

    let err = recorder
        .record(HistoryEntry::new("doomed.jpg", 1000, 400))
        .await
        .unwrap_err();
    assert!(matches!(err, CompressorError::Storage(_)));

    // The entry never made it to the store, so it is not in the log either.
    assert!(recorder.is_empty().await);
}

#[tokio::test]
async fn json_file_store_persists_across_instances() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let first = JsonFileStore::new(&path);
    first.set("alpha", "one").await.unwrap();
    first.set("beta", "two").await.unwrap();

    let second = JsonFileStore::new(&path);
    assert_eq!(second.get("alpha").await.unwrap(), Some("one".to_string()));
    assert_eq!(second.get("beta").await.unwrap(), Some("two".to_string()));
    assert_eq!(second.get("missing").await.unwrap(), None);
}

#[tokio::test]
async fn json_file_store_reads_none_from_a_missing_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("never-written.json"));
    assert_eq!(store.get("anything").await.unwrap(), None);
}

#[tokio::test]
async fn json_file_store_creates_missing_parent_directories() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested/deeper/store.json"));
    store.set("key", "value").await.unwrap();
    assert_eq!(store.get("key").await.unwrap(), Some("value".to_string()));
}

#[tokio::test]
async fn a_recorder_over_the_file_store_survives_restarts() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let recorder = HistoryRecorder::load(Arc::new(JsonFileStore::new(&path))).await.unwrap();
        recorder.record(HistoryEntry::new("a.jpg", 900, 300)).await.unwrap();
        recorder.record(HistoryEntry::new("b.jpg", 800, 200)).await.unwrap();
    }

    let reloaded = HistoryRecorder::load(Arc::new(JsonFileStore::new(&path))).await.unwrap();
    let names: Vec<_> = reloaded
        .entries()
        .await
        .into_iter()
        .map(|e| e.original_name)
        .collect();
    assert_eq!(names, ["a.jpg", "b.jpg"]);
}
