// src/export/mod.rs

pub mod archive;
mod csv;
mod fs_utils;
pub mod json;
pub mod logic;
mod model;

pub use json::{backup_file_name, export_to_file, import_from_file, parse_backup};
pub use logic::ExportLogic;
pub use model::WeekReportRow;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Importable backup
    Json,
    /// Report with computed target and overtime, not importable
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
