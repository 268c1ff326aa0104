//! Shared doubles and helpers for the workflow tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use image_compressor::{
    CandidateFile, CompressedImage, CompressionExecutor, CompressionOptions, CompressorError,
    CompressorResult, HistoryRecorder, ImageCompressor, KeyValueStore, MemoryStore, Notification,
    NotificationSink, ProgressFn,
};

/// Per-file behavior for the scripted executor.
#[derive(Clone)]
pub enum Script {
    /// Succeed after a delay with an output payload of `size` bytes.
    Succeed { delay_ms: u64, size: usize },
    /// Fail after a delay.
    Fail { delay_ms: u64 },
}

/// Executor double driven by per-file scripts, keyed by file name.
///
/// Files without a script succeed immediately with a payload half the
/// input size. Options received per call are captured for assertions.
#[derive(Default)]
pub struct ScriptedExecutor {
    scripts: HashMap<String, Script>,
    captured: Mutex<Vec<CompressionOptions>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a script for the file named `name`.
    pub fn on(mut self, name: &str, script: Script) -> Self {
        self.scripts.insert(name.to_string(), script);
        self
    }

    /// Options received by `compress`, in call order.
    pub fn captured_options(&self) -> Vec<CompressionOptions> {
        self.captured.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompressionExecutor for ScriptedExecutor {
    async fn compress(
        &self,
        file: &CandidateFile,
        options: &CompressionOptions,
        on_progress: ProgressFn,
    ) -> CompressorResult<CompressedImage> {
        self.captured.lock().unwrap().push(*options);
        let script = self.scripts.get(&file.name).cloned().unwrap_or(Script::Succeed {
            delay_ms: 0,
            size: file.bytes.len().div_ceil(2),
        });
        match script {
            Script::Succeed { delay_ms, size } => {
                if delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                on_progress(50);
                on_progress(100);
                Ok(CompressedImage {
                    data: vec![0xCD; size],
                    width: 1,
                    height: 1,
                    mime_type: file.mime_type.clone(),
                })
            }
            Script::Fail { delay_ms } => {
                if delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                Err(CompressorError::compression(format!(
                    "scripted failure for '{}'",
                    file.name
                )))
            }
        }
    }
}

/// Sink that records every notification it receives.
#[derive(Default)]
pub struct RecordingSink {
    notes: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> Vec<Notification> {
        self.notes.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, note: &Notification) {
        self.notes.lock().unwrap().push(note.clone());
    }
}

/// Store whose writes always fail; reads behave like an empty store.
#[derive(Default)]
pub struct FailingStore;

impl FailingStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> CompressorResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> CompressorResult<()> {
        Err(CompressorError::storage("scripted store failure"))
    }
}

/// Candidate file with a JPEG MIME type; doubles never decode the bytes.
pub fn image_file(name: &str, size: usize) -> CandidateFile {
    CandidateFile::new(name, "image/jpeg", vec![0u8; size])
}

/// Workflow wired to doubles, plus handles kept for assertions.
pub struct TestRig {
    pub compressor: ImageCompressor,
    pub executor: Arc<ScriptedExecutor>,
    pub sink: Arc<RecordingSink>,
    pub store: Arc<MemoryStore>,
}

/// Assemble a workflow around a scripted executor and an empty store.
pub async fn rig(executor: ScriptedExecutor) -> TestRig {
    init_tracing();
    let executor = Arc::new(executor);
    let sink = Arc::new(RecordingSink::new());
    let store = Arc::new(MemoryStore::new());
    let history = HistoryRecorder::load(store.clone())
        .await
        .expect("history loads from an empty store");
    let compressor = ImageCompressor::new(executor.clone(), sink.clone(), history);
    TestRig {
        compressor,
        executor,
        sink,
        store,
    }
}

/// Install a compact debug-level subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .compact()
        .try_init();
}
