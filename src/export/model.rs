// src/export/model.rs

use crate::core::calculator::{target_hours, week_overtime};
use crate::models::WeekEntry;
use serde::Serialize;

/// Flat report row: the stored entry plus its computed figures.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WeekReportRow {
    pub year: i32,
    pub week: u32,
    pub target: f64,
    pub hours_worked: f64,
    pub reduction: f64,
    pub holiday: bool,
    pub overtime: f64,
}

impl From<&WeekEntry> for WeekReportRow {
    fn from(e: &WeekEntry) -> Self {
        Self {
            year: e.year,
            week: e.week,
            target: target_hours(e.is_holiday),
            hours_worked: e.hours_worked,
            reduction: e.reduction,
            holiday: e.is_holiday,
            overtime: week_overtime(e),
        }
    }
}
