use rtimetracker::core::AppState;
use rtimetracker::models::WeekEntry;
use rtimetracker::ui::views::{
    entry_at_row, render_filtered_week_list, render_summary, render_week_list, sorted_for_display,
};
use rtimetracker::utils::table::strip_ansi;

mod common;
use common::sample_entries;

#[test]
fn test_add_allows_duplicate_slots() {
    let mut state = AppState::default();
    state.add(WeekEntry::new(2024, 5, 40.0, false, 0.0));
    state.add(WeekEntry::new(2024, 5, 44.0, false, 0.0));
    assert_eq!(state.len(), 2);
    assert_eq!(state.version(), 2);
}

#[test]
fn test_delete_removes_all_structural_matches() {
    let dup = WeekEntry::new(2024, 5, 40.0, false, 0.0);
    let other = WeekEntry::new(2024, 5, 40.0, false, 1.0);
    let mut state = AppState::new(vec![dup.clone(), other.clone(), dup.clone()]);

    let removed = state.delete(&dup);
    assert_eq!(removed, 2);
    assert_eq!(state.entries(), &[other]);
    assert_eq!(state.version(), 1);
}

#[test]
fn test_delete_without_match_keeps_version() {
    let mut state = AppState::new(sample_entries());
    let removed = state.delete(&WeekEntry::new(1999, 1, 1.0, false, 0.0));
    assert_eq!(removed, 0);
    assert_eq!(state.version(), 0);
    assert_eq!(state.len(), 3);
}

#[test]
fn test_replace_swaps_collection() {
    let mut state = AppState::new(sample_entries());
    state.replace(vec![WeekEntry::new(2020, 1, 41.0, false, 0.0)]);
    assert_eq!(state.len(), 1);
    assert_eq!(state.version(), 1);
}

#[test]
fn test_display_order_is_most_recent_first_and_stable() {
    let a = WeekEntry::new(2024, 3, 40.0, false, 0.0);
    let b = WeekEntry::new(2025, 1, 41.0, false, 0.0);
    let c = WeekEntry::new(2024, 3, 45.0, false, 0.0);
    let d = WeekEntry::new(2024, 20, 39.0, true, 0.0);
    let entries = vec![a.clone(), b.clone(), c.clone(), d.clone()];

    let sorted: Vec<WeekEntry> = sorted_for_display(&entries).into_iter().cloned().collect();
    assert_eq!(sorted, vec![b, d, a, c]);
}

#[test]
fn test_entry_at_row() {
    let entries = sample_entries();
    assert_eq!(entry_at_row(&entries, 1).unwrap(), entries[2]);
    assert_eq!(entry_at_row(&entries, 3).unwrap(), entries[0]);
    assert!(entry_at_row(&entries, 0).is_err());
    assert!(entry_at_row(&entries, 4).is_err());
}

#[test]
fn test_render_week_list() {
    let out = strip_ansi(&render_week_list(&sample_entries()));
    let lines: Vec<&str> = out.lines().collect();

    // header + rule + 3 rows
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("Overtime"));
    assert!(lines[2].contains("40h (holiday)"));
    assert!(lines[2].contains("+2h"));
    assert!(lines[3].contains("-3h"));
    assert!(lines[4].contains("+4h"));

    assert_eq!(render_week_list(&[]), "No weeks recorded yet.\n");
}

#[test]
fn test_filtered_week_list_keeps_row_numbers() {
    let entries = sample_entries();

    let out = strip_ansi(&render_filtered_week_list(&entries, Some(2024), Some(11)));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].trim_start().starts_with("2 "));
    assert!(lines[2].contains("-3h"));
    assert_eq!(entry_at_row(&entries, 2).unwrap(), entries[1]);

    let year_only = strip_ansi(&render_filtered_week_list(&entries, Some(2024), None));
    assert_eq!(year_only.lines().count(), 5);

    assert_eq!(
        render_filtered_week_list(&entries, Some(2024), Some(7)),
        "No weeks recorded for 2024/KW07.\n"
    );
    assert_eq!(
        render_filtered_week_list(&entries, Some(2023), None),
        "No weeks recorded for 2023.\n"
    );
}

#[test]
fn test_render_summary_sign() {
    assert_eq!(
        strip_ansi(&render_summary(&sample_entries())),
        "Overtime balance: +3h"
    );
    assert_eq!(strip_ansi(&render_summary(&[])), "Overtime balance: +0h");

    let deficit = vec![WeekEntry::new(2024, 1, 38.5, false, 0.0)];
    assert_eq!(
        strip_ansi(&render_summary(&deficit)),
        "Overtime balance: -2.5h"
    );
}
