//! Input side of a new week entry: default slot suggestion and submit rules.

use crate::errors::{AppError, AppResult};
use crate::models::WeekEntry;
use crate::utils::date::{current_iso_week, current_year};
use chrono::NaiveDate;

/// Last week number before the suggestion rolls into the next year.
pub const ROLLOVER_WEEK: u32 = 52;

/// Suggest the (year, week) slot for the next entry.
///
/// With no entries this is today's calendar year and ISO week. Otherwise it
/// is the week after the latest recorded (year, week); anything past week 52
/// becomes week 1 of the following year, even in 53-week years.
pub fn next_week(entries: &[WeekEntry], today: NaiveDate) -> (i32, u32) {
    let Some((year, week)) = entries.iter().map(WeekEntry::slot).max() else {
        return (current_year(today), current_iso_week(today));
    };

    let next = week + 1;
    if next > ROLLOVER_WEEK {
        (year + 1, 1)
    } else {
        (year, next)
    }
}

/// Fields of the "record a week" form.
///
/// Hours and reduction are kept as raw text until submit, the same way a
/// user types them.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekForm {
    pub year: i32,
    pub week: u32,
    pub hours_worked: String,
    pub is_holiday: bool,
    pub reduction: String,
}

impl WeekForm {
    /// A blank form positioned on the suggested next slot.
    pub fn open(entries: &[WeekEntry], today: NaiveDate) -> Self {
        let (year, week) = next_week(entries, today);
        Self {
            year,
            week,
            hours_worked: String::new(),
            is_holiday: false,
            reduction: "0".to_string(),
        }
    }

    /// Build the entry from the current fields.
    ///
    /// `entries` is the collection the entry will be added to; on success
    /// the form is cleared and advanced to the slot after the new entry.
    pub fn submit(&mut self, entries: &[WeekEntry], today: NaiveDate) -> AppResult<WeekEntry> {
        let hours_worked = parse_hours(&self.hours_worked)?;

        let entry = WeekEntry::new(
            self.year,
            self.week,
            hours_worked,
            self.is_holiday,
            coerce_reduction(&self.reduction),
        );

        let mut updated = entries.to_vec();
        updated.push(entry.clone());
        *self = WeekForm::open(&updated, today);

        Ok(entry)
    }
}

/// Hours are mandatory; `0` is a valid value, an empty field is not.
pub fn parse_hours(raw: &str) -> AppResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::MissingHours);
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::InvalidHours(trimmed.to_string())),
    }
}

/// Anything that is not a finite number counts as no reduction.
pub fn coerce_reduction(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
