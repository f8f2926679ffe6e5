//! Persisted key/value text storage
//!
//! A tiny string store used to keep UI values (such as the search text)
//! across sessions. Callers receive a `TextStore` instead of reaching
//! for a process-wide global, so tests can swap in `MemoryTextStore`.
//!
//! # Precedence
//!
//! 1. `$CWD/.hacker-stories.storage.toml` - Local storage (highest priority)
//! 2. `~/.config/hacker-stories/storage.toml` - Global storage (fallback)
//!
//! On save the file the store was opened from is rewritten.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::paths;

const STORAGE_VERSION: u32 = 1;

/// Read/write access to persisted string values
pub trait TextStore: Send {
    /// Stored value for `key`, or `default` when nothing (or an empty string) is stored
    fn get(&self, key: &str, default: &str) -> String;

    /// Store `value` under `key`, overwriting any prior value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Storage file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// On-disk layout of the storage file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageFile {
    meta: StorageMeta,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for StorageFile {
    fn default() -> Self {
        Self {
            meta: StorageMeta {
                last_modified: Utc::now(),
                version: STORAGE_VERSION,
            },
            values: BTreeMap::new(),
        }
    }
}

/// Text store persisted as a TOML file
#[derive(Debug, Clone)]
pub struct FileTextStore {
    path: PathBuf,
    file: StorageFile,
}

impl FileTextStore {
    /// Open the store with precedence: local > global
    pub fn load() -> Result<Self> {
        let path = if paths::has_local_storage() {
            paths::local_storage_path()?
        } else {
            paths::global_storage_path()?
        };
        Ok(Self::open(path))
    }

    /// Open the store backed by `path`
    ///
    /// A missing or unreadable file yields an empty store; the file is
    /// (re)created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = if path.exists() {
            match Self::read_file(&path) {
                Ok(file) => {
                    log::info!("Loaded storage from {:?}", path);
                    file
                }
                Err(e) => {
                    log::warn!("{:#}, starting with empty storage", e);
                    StorageFile::default()
                }
            }
        } else {
            log::info!("No storage file at {:?}, starting fresh", path);
            StorageFile::default()
        };

        Self { path, file }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> Result<StorageFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read storage file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse storage file: {:?}", path))
    }

    fn save(&mut self) -> Result<()> {
        self.file.meta.last_modified = Utc::now();

        let content = toml::to_string_pretty(&self.file).context("Failed to serialize storage")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write storage file: {:?}", self.path))?;

        log::debug!("Saved storage to {:?}", self.path);
        Ok(())
    }
}

impl TextStore for FileTextStore {
    fn get(&self, key: &str, default: &str) -> String {
        match self.file.values.get(key) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => default.to_string(),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.file.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory text store
///
/// Clones share the same values, so a test can keep one handle and hand
/// another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with the given values
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Arc::new(Mutex::new(values)),
        }
    }

    /// Raw stored value, without default handling
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }
}

impl TextStore for MemoryTextStore {
    fn get(&self, key: &str, default: &str) -> String {
        match self.raw(key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
