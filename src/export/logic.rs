// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, archive, csv, json, notify_export_success};
use crate::models::WeekEntry;
use crate::utils::date::iso_date;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Export options as given on the command line.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Explicit output file; otherwise a dated name inside `dir`.
    pub file: Option<PathBuf>,
    pub dir: PathBuf,
    pub force: bool,
    pub compress: bool,
    pub date: NaiveDate,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the entries and return the final path (the `.zip` when
    /// compressed).
    pub fn export(entries: &[WeekEntry], req: &ExportRequest) -> AppResult<PathBuf> {
        let target = match &req.file {
            Some(f) => f.clone(),
            None => req.dir.join(default_file_name(req.format, req.date)),
        };

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        // `--compress` onto an explicit `.zip` name: the raw export goes to a
        // sibling first and the archive takes the requested name.
        let raw_path = if req.compress && archive::has_zip_extension(&target) {
            target.with_extension(req.format.as_str())
        } else {
            target
        };

        ensure_writable(&raw_path, req.force)?;

        let written = match (req.format, &req.file) {
            (ExportFormat::Json, None) => json::export_to_file(entries, &req.dir, req.date)?,
            (ExportFormat::Json, Some(_)) => {
                json::write_backup(entries, &raw_path)?;
                raw_path
            }
            (ExportFormat::Csv, _) => {
                csv::write_csv(&raw_path, entries)?;
                raw_path
            }
        };

        let final_path = if req.compress {
            compress_checked(&written, req.force)?
        } else {
            written
        };

        notify_export_success(&req.format.as_str().to_uppercase(), &final_path);
        Ok(final_path)
    }
}

fn default_file_name(format: ExportFormat, date: NaiveDate) -> String {
    match format {
        ExportFormat::Json => json::backup_file_name(date),
        ExportFormat::Csv => format!("timetracker-report-{}.csv", iso_date(date)),
    }
}

fn compress_checked(path: &Path, force: bool) -> AppResult<PathBuf> {
    ensure_writable(&path.with_extension("zip"), force)?;
    archive::compress(path)
}
