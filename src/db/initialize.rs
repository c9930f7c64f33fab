use crate::db::pool::SqliteStore;
use crate::errors::AppResult;
use std::fs;

/// Make sure the database file and its directory exist with the schema
/// applied. Safe to call on an existing database.
pub fn init_db(store: &SqliteStore) -> AppResult<()> {
    if let Some(parent) = store.path().parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    store.open()?;
    Ok(())
}
