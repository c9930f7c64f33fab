use crate::core::calculator::expected::target_hours;
use crate::models::WeekEntry;

/// Surplus (positive) or deficit (negative) hours of a single week.
pub fn week_overtime(entry: &WeekEntry) -> f64 {
    entry.hours_worked - target_hours(entry.is_holiday) - entry.reduction
}

/// Running overtime balance over the whole collection.
pub fn total_overtime(entries: &[WeekEntry]) -> f64 {
    entries
        .iter()
        .fold(0.0, |sum, entry| sum + week_overtime(entry))
}
