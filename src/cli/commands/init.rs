use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::storage::{KvFileStore, StorageBackend};
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite store with its schema
///  - the directory of the key/value fallback store
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rTimetracker…");

    if !cli.test {
        let path = cfg.save()?;
        println!("📄 Config file : {}", path.display());
    }

    let store = SqliteStore::new(cfg.database_path());
    init_db(&store)?;
    println!("🗄️  Database    : {}", store.path().display());

    let kv = KvFileStore::new(cfg.kv_store_path());
    kv.request_persistence()?;
    println!("🗂️  Fallback    : {}", kv.path().display());

    if let Err(e) = store.record("init", "", "Storage initialized") {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("rTimetracker initialization completed!");
    Ok(())
}
