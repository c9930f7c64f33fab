//! SQLite-backed structured store (primary storage backend).

use crate::db::{initialize, log, migrate, queries};
use crate::errors::AppResult;
use crate::models::WeekEntry;
use crate::storage::{STORAGE_KEY, StorageBackend};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection with the schema in place.
    ///
    /// A fresh connection per operation keeps a locked or missing database
    /// a per-call failure that the storage chain can fall back from.
    pub fn open(&self) -> AppResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA synchronous = FULL;")?;
        migrate::run_pending_migrations(&conn)?;
        Ok(conn)
    }

    /// Helper to execute a closure with a mutable connection.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        let mut conn = self.open()?;
        func(&mut conn)
    }
}

impl StorageBackend for SqliteStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn load(&self) -> AppResult<Option<Vec<WeekEntry>>> {
        self.with_conn(|conn| queries::load_weeks(conn, STORAGE_KEY))
    }

    fn save(&self, entries: &[WeekEntry]) -> AppResult<()> {
        self.with_conn(|conn| queries::save_weeks(conn, STORAGE_KEY, entries))
    }

    fn request_persistence(&self) -> AppResult<()> {
        initialize::init_db(self)
    }

    fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.with_conn(|conn| log::ttlog(conn, operation, target, message))
    }
}
