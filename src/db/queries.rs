use crate::errors::AppResult;
use crate::models::WeekEntry;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Load the collection stored under `key`, in stored order.
/// `None` when nothing was ever saved under that key.
pub fn load_weeks(conn: &Connection, key: &str) -> AppResult<Option<Vec<WeekEntry>>> {
    let stored: Option<String> = conn
        .query_row("SELECT key FROM stores WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;

    if stored.is_none() {
        return Ok(None);
    }

    let mut stmt = conn.prepare(
        "SELECT year, week, hours_worked, is_holiday, reduction
         FROM weeks
         WHERE store_key = ?1
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([key], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(Some(out))
}

/// Replace the collection stored under `key` in a single transaction.
pub fn save_weeks(conn: &mut Connection, key: &str, entries: &[WeekEntry]) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO stores (key, updated_at) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET updated_at = excluded.updated_at",
        params![key, Local::now().to_rfc3339()],
    )?;
    tx.execute("DELETE FROM weeks WHERE store_key = ?1", [key])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO weeks (store_key, position, year, week, hours_worked, is_holiday, reduction)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;

        for (position, e) in entries.iter().enumerate() {
            stmt.execute(params![
                key,
                position as i64,
                e.year,
                e.week,
                e.hours_worked,
                e.is_holiday,
                e.reduction
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}

pub fn map_row(row: &Row) -> Result<WeekEntry> {
    Ok(WeekEntry {
        year: row.get("year")?,
        week: row.get("week")?,
        hours_worked: row.get("hours_worked")?,
        is_holiday: row.get("is_holiday")?,
        reduction: row.get("reduction")?,
    })
}
