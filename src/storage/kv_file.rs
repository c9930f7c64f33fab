//! Flat string key/value store kept in a single JSON file.
//!
//! The file holds a JSON object whose values are plain strings; the entry
//! collection is stored as its serialized JSON text under `STORAGE_KEY`.

use crate::errors::AppResult;
use crate::models::WeekEntry;
use crate::storage::{STORAGE_KEY, StorageBackend};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct KvFileStore {
    path: PathBuf,
}

impl KvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw text stored under `key`, if any.
    pub fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    pub fn set_item(&self, key: &str, value: String) -> AppResult<()> {
        // An unreadable file is overwritten rather than blocking the write.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }

    fn read_map(&self) -> AppResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl StorageBackend for KvFileStore {
    fn name(&self) -> &'static str {
        "kv-file"
    }

    fn load(&self) -> AppResult<Option<Vec<WeekEntry>>> {
        match self.get_item(STORAGE_KEY)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn save(&self, entries: &[WeekEntry]) -> AppResult<()> {
        self.set_item(STORAGE_KEY, serde_json::to_string(entries)?)
    }

    fn request_persistence(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
