//! JSON backup files: the importable export format.

use crate::errors::{AppError, AppResult};
use crate::models::WeekEntry;
use crate::utils::date::iso_date;
use chrono::NaiveDate;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// `timetracker-backup-YYYY-MM-DD.json`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("timetracker-backup-{}.json", iso_date(date))
}

/// Pretty-printed (2-space indent) JSON array of the entries.
pub fn to_backup_json(entries: &[WeekEntry]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Write a dated backup into `dir` and return its path.
pub fn export_to_file(entries: &[WeekEntry], dir: &Path, date: NaiveDate) -> AppResult<PathBuf> {
    let path = dir.join(backup_file_name(date));
    write_backup(entries, &path)?;
    Ok(path)
}

pub fn write_backup(entries: &[WeekEntry], path: &Path) -> AppResult<()> {
    std::fs::write(path, to_backup_json(entries)?)?;
    Ok(())
}

/// Parse backup text.
///
/// Malformed JSON is a parse error; any top-level value other than an array
/// is rejected as an invalid data format.
pub fn parse_backup(text: &str) -> AppResult<Vec<WeekEntry>> {
    let value: Value = serde_json::from_str(text)?;

    if !value.is_array() {
        return Err(AppError::InvalidDataFormat);
    }

    Ok(serde_json::from_value(value)?)
}

/// Read a backup file. Zip archives written by `export --compress` are
/// unpacked first; they are recognised by content, not by extension.
pub fn import_from_file(path: &Path) -> AppResult<Vec<WeekEntry>> {
    let text = if crate::export::archive::is_archive(path)? {
        crate::export::archive::read_first_file(path)?
    } else {
        std::fs::read_to_string(path)?
    };

    parse_backup(&text)
}
