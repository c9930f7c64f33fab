use crate::errors::AppResult;
use crate::export::model::WeekReportRow;
use crate::models::WeekEntry;
use std::path::Path;

/// Write the report rows (header included via serde).
pub fn write_csv(path: &Path, entries: &[WeekEntry]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for entry in entries {
        wtr.serialize(WeekReportRow::from(entry))?;
    }

    wtr.flush()?;
    Ok(())
}
