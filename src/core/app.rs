//! Application shell: owns the entry collection and keeps storage in sync.

use crate::config::Config;
use crate::core::state::AppState;
use crate::db::SqliteStore;
use crate::models::WeekEntry;
use crate::storage::{KvFileStore, StorageBackend, StorageChain};
use log::debug;

/// Primary SQLite store first, key/value file as fallback.
pub fn build_storage(cfg: &Config) -> StorageChain {
    let backends: Vec<Box<dyn StorageBackend>> = vec![
        Box::new(SqliteStore::new(cfg.database_path())),
        Box::new(KvFileStore::new(cfg.kv_store_path())),
    ];
    StorageChain::new(backends)
}

pub struct App {
    storage: StorageChain,
    state: AppState,
    saved_version: u64,
}

impl App {
    pub fn open(cfg: &Config) -> Self {
        Self::with_storage(build_storage(cfg))
    }

    /// Request durable storage, then load the collection. Never fails: at
    /// worst the collection starts empty.
    pub fn with_storage(storage: StorageChain) -> Self {
        storage.request_persistence();

        debug!("loading entries from {:?}", storage.backend_names());
        let state = AppState::new(storage.load());
        debug!("loaded {} entries", state.len());

        let saved_version = state.version();
        Self {
            storage,
            state,
            saved_version,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn entries(&self) -> &[WeekEntry] {
        self.state.entries()
    }

    pub fn add(&mut self, entry: WeekEntry) {
        self.state.add(entry);
    }

    /// Remove every entry equal to `entry`; returns how many went away.
    pub fn delete(&mut self, entry: &WeekEntry) -> usize {
        self.state.delete(entry)
    }

    pub fn replace(&mut self, entries: Vec<WeekEntry>) {
        self.state.replace(entries);
    }

    pub fn is_dirty(&self) -> bool {
        self.state.version() != self.saved_version
    }

    /// Persist the collection if it changed since the last save.
    /// Returns whether a save was attempted.
    pub fn commit(&mut self) -> bool {
        if !self.is_dirty() {
            return false;
        }

        self.storage.save(self.state.entries());
        self.saved_version = self.state.version();
        true
    }

    /// Append to the internal operation log (best effort).
    pub fn record(&self, operation: &str, target: &str, message: &str) {
        self.storage.record(operation, target, message);
    }
}
