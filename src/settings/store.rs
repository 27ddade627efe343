//! Settings stores
//!
//! Key-value persistence behind a trait so embedders can plug their own
//! backend. Values are plain strings: a strategy name, or a font size
//! with a pixel-unit suffix. No retry policy lives here; store failures
//! propagate and the calling context decides what to do.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ReaderError, Result};

/// Trait for settings storage backends
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fetch the value for `key`, if present.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }
}

/// In-memory store for tests and embedders with external persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one JSON object per reader profile
///
/// Entries load once at `open`; every `set` rewrites the file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing entries when the file
    /// is present.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ReaderError::Store(format!("corrupt settings file: {}", e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        let bytes = serde_json::to_vec_pretty(&*entries)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
