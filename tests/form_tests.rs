use chrono::NaiveDate;
use rtimetracker::core::form::{WeekForm, coerce_reduction, next_week, parse_hours};
use rtimetracker::errors::AppError;
use rtimetracker::models::WeekEntry;
use rtimetracker::utils::date::{current_iso_week, current_year};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

fn entry(year: i32, week: u32) -> WeekEntry {
    WeekEntry::new(year, week, 41.0, false, 0.0)
}

#[test]
fn test_next_week_without_entries_is_today() {
    let day = today();
    assert_eq!(next_week(&[], day), (current_year(day), current_iso_week(day)));
    assert_eq!(next_week(&[], day), (2024, 10));
}

#[test]
fn test_next_week_increments_latest() {
    let entries = vec![entry(2024, 3), entry(2024, 10), entry(2023, 40)];
    assert_eq!(next_week(&entries, today()), (2024, 11));
}

#[test]
fn test_next_week_prefers_year_over_week() {
    let entries = vec![entry(2023, 50), entry(2024, 2)];
    assert_eq!(next_week(&entries, today()), (2024, 3));
}

#[test]
fn test_next_week_rolls_over_after_52() {
    let entries = vec![entry(2024, 51), entry(2024, 52)];
    assert_eq!(next_week(&entries, today()), (2025, 1));

    // 53-week years still roll over after 52
    let entries = vec![entry(2020, 53)];
    assert_eq!(next_week(&entries, today()), (2021, 1));
}

#[test]
fn test_open_uses_suggestion_and_defaults() {
    let form = WeekForm::open(&[entry(2024, 10)], today());
    assert_eq!((form.year, form.week), (2024, 11));
    assert!(form.hours_worked.is_empty());
    assert!(!form.is_holiday);
    assert_eq!(form.reduction, "0");
}

#[test]
fn test_submit_requires_hours_but_accepts_zero() {
    let mut form = WeekForm::open(&[], today());
    assert!(matches!(form.submit(&[], today()), Err(AppError::MissingHours)));

    form.hours_worked = "   ".into();
    assert!(matches!(form.submit(&[], today()), Err(AppError::MissingHours)));

    form.hours_worked = "0".into();
    let e = form.submit(&[], today()).unwrap();
    assert_eq!(e.hours_worked, 0.0);
}

#[test]
fn test_submit_rejects_non_numeric_hours() {
    let mut form = WeekForm::open(&[], today());
    form.hours_worked = "lots".into();
    assert!(matches!(
        form.submit(&[], today()),
        Err(AppError::InvalidHours(_))
    ));
    // a rejected submit leaves the form as it was
    assert_eq!(form.hours_worked, "lots");
}

#[test]
fn test_submit_builds_entry_and_resets_form() {
    let existing = vec![entry(2024, 10)];
    let mut form = WeekForm::open(&existing, today());
    form.hours_worked = "43.5".into();
    form.is_holiday = true;
    form.reduction = "2".into();

    let e = form.submit(&existing, today()).unwrap();
    assert_eq!(e, WeekEntry::new(2024, 11, 43.5, true, 2.0));

    assert_eq!((form.year, form.week), (2024, 12));
    assert!(form.hours_worked.is_empty());
    assert!(!form.is_holiday);
    assert_eq!(form.reduction, "0");
}

#[test]
fn test_reduction_coercion() {
    assert_eq!(coerce_reduction("1.5"), 1.5);
    assert_eq!(coerce_reduction(""), 0.0);
    assert_eq!(coerce_reduction("abc"), 0.0);
    assert_eq!(coerce_reduction("NaN"), 0.0);
}

#[test]
fn test_parse_hours() {
    assert_eq!(parse_hours(" 40 ").unwrap(), 40.0);
    assert!(matches!(parse_hours(""), Err(AppError::MissingHours)));
    assert!(matches!(parse_hours("inf"), Err(AppError::InvalidHours(_))));
}
