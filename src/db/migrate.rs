use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table with the given name exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// `stores` marks which keys have a collection written, so that an empty
/// collection can be told apart from a key that was never saved.
fn create_stores_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS stores (
            key        TEXT PRIMARY KEY,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// One row per entry; `position` keeps the collection order.
fn create_weeks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS weeks (
            store_key    TEXT NOT NULL REFERENCES stores(key) ON DELETE CASCADE,
            position     INTEGER NOT NULL,
            year         INTEGER NOT NULL,
            week         INTEGER NOT NULL,
            hours_worked REAL NOT NULL,
            is_holiday   INTEGER NOT NULL DEFAULT 0 CHECK(is_holiday IN (0,1)),
            reduction    REAL NOT NULL DEFAULT 0,
            PRIMARY KEY (store_key, position)
        );

        CREATE INDEX IF NOT EXISTS idx_weeks_year_week ON weeks(year, week);
        "#,
    )?;
    Ok(())
}

/// Public entry point: create every missing table.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "stores")? {
        create_stores_table(conn)?;
    }

    if !table_exists(conn, "weeks")? {
        create_weeks_table(conn)?;
    }

    Ok(())
}
