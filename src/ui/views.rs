//! Read-only views derived from the entry collection.

use crate::core::calculator::{target_hours, total_overtime, week_overtime};
use crate::errors::{AppError, AppResult};
use crate::models::WeekEntry;
use crate::utils::colors::{colorize_optional, colorize_overtime};
use crate::utils::formatting::{hours, signed_hours, week_label};
use crate::utils::table::{Column, Table};
use std::cmp::Reverse;

/// Most recent week first. Entries on the same (year, week) keep their
/// insertion order.
pub fn sorted_for_display(entries: &[WeekEntry]) -> Vec<&WeekEntry> {
    let mut sorted: Vec<&WeekEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| Reverse(e.slot()));
    sorted
}

/// The entry shown on 1-based row `row` of the week list.
pub fn entry_at_row(entries: &[WeekEntry], row: usize) -> AppResult<WeekEntry> {
    row.checked_sub(1)
        .and_then(|i| sorted_for_display(entries).get(i).map(|e| (*e).clone()))
        .ok_or(AppError::InvalidRow(row))
}

pub fn render_week_list(entries: &[WeekEntry]) -> String {
    if entries.is_empty() {
        return "No weeks recorded yet.\n".to_string();
    }

    render_rows(sorted_for_display(entries).into_iter().enumerate())
}

/// Week list restricted to `year` and/or `week`. Rows keep the numbers they
/// have in the full list, so they stay valid for `del --row`.
pub fn render_filtered_week_list(
    entries: &[WeekEntry],
    year: Option<i32>,
    week: Option<u32>,
) -> String {
    let rows: Vec<(usize, &WeekEntry)> = sorted_for_display(entries)
        .into_iter()
        .enumerate()
        .filter(|(_, e)| year.is_none_or(|y| e.year == y) && week.is_none_or(|w| e.week == w))
        .collect();

    if rows.is_empty() {
        return format!("No weeks recorded for {}.\n", filter_label(year, week));
    }

    render_rows(rows.into_iter())
}

fn filter_label(year: Option<i32>, week: Option<u32>) -> String {
    match (year, week) {
        (Some(y), Some(w)) => week_label(y, w),
        (Some(y), None) => y.to_string(),
        (None, Some(w)) => format!("KW{w:02}"),
        (None, None) => "any week".to_string(),
    }
}

fn render_rows<'a>(rows: impl Iterator<Item = (usize, &'a WeekEntry)>) -> String {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Year"),
        Column::right("Week"),
        Column::right("Target"),
        Column::right("Worked"),
        Column::right("Reduction"),
        Column::right("Overtime"),
    ]);

    for (i, entry) in rows {
        let overtime = week_overtime(entry);
        let target = hours(target_hours(entry.is_holiday));

        table.add_row(vec![
            (i + 1).to_string(),
            entry.year.to_string(),
            entry.week.to_string(),
            if entry.is_holiday {
                format!("{target} (holiday)")
            } else {
                target
            },
            hours(entry.hours_worked),
            colorize_optional(&hours(entry.reduction)),
            colorize_overtime(&signed_hours(overtime), overtime),
        ]);
    }

    table.render()
}

/// Running balance line, e.g. `Overtime balance: +3h`.
pub fn render_summary(entries: &[WeekEntry]) -> String {
    let total = total_overtime(entries);
    format!(
        "Overtime balance: {}",
        colorize_overtime(&signed_hours(total), total)
    )
}
