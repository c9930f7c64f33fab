//! Durable storage for the entry collection.
//!
//! Storage is a ranked list of backends sharing one interface. Reads take
//! the first backend that has a collection stored; writes go to every
//! backend so the lower-ranked ones stay usable as a resilience copy.
//! Nothing in here returns an error to the caller: backend failures are
//! logged at warning level and the chain falls back or moves on.

pub mod kv_file;

use crate::errors::AppResult;
use crate::models::WeekEntry;
use log::{debug, warn};
use std::cell::Cell;

pub use kv_file::KvFileStore;

/// Logical key every backend stores the collection under.
pub const STORAGE_KEY: &str = "timetracker_weeks";

pub trait StorageBackend {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> AppResult<Option<Vec<WeekEntry>>>;

    fn save(&self, entries: &[WeekEntry]) -> AppResult<()>;

    /// Ask the backend for durable storage guarantees.
    fn request_persistence(&self) -> AppResult<()> {
        Ok(())
    }

    /// Append a line to the backend's operation history, if it keeps one.
    fn record(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

pub struct StorageChain {
    backends: Vec<Box<dyn StorageBackend>>,
    persistence_requested: Cell<bool>,
}

impl StorageChain {
    pub fn new(backends: Vec<Box<dyn StorageBackend>>) -> Self {
        Self {
            backends,
            persistence_requested: Cell::new(false),
        }
    }

    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// First stored collection in rank order, or an empty one.
    pub fn load(&self) -> Vec<WeekEntry> {
        for backend in &self.backends {
            match backend.load() {
                Ok(Some(entries)) => {
                    debug!("loaded {} entries from {}", entries.len(), backend.name());
                    return entries;
                }
                Ok(None) => debug!("{}: nothing stored under {}", backend.name(), STORAGE_KEY),
                Err(e) => warn!("{}: load failed, trying next backend: {}", backend.name(), e),
            }
        }

        Vec::new()
    }

    /// Write to every backend; a failing backend does not stop the others.
    pub fn save(&self, entries: &[WeekEntry]) {
        for backend in &self.backends {
            if let Err(e) = backend.save(entries) {
                warn!("{}: save failed: {}", backend.name(), e);
            }
        }
    }

    /// Best-effort, only the first call reaches the backends.
    pub fn request_persistence(&self) {
        if self.persistence_requested.replace(true) {
            return;
        }

        for backend in &self.backends {
            if let Err(e) = backend.request_persistence() {
                warn!("{}: persistent storage not granted: {}", backend.name(), e);
            }
        }
    }

    pub fn record(&self, operation: &str, target: &str, message: &str) {
        for backend in &self.backends {
            if let Err(e) = backend.record(operation, target, message) {
                warn!("{}: failed to write internal log: {}", backend.name(), e);
            }
        }
    }
}
