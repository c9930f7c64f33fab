/// Contractual hours for a regular week.
pub const NORMAL_WEEK_HOURS: f64 = 41.0;

/// Contractual hours for a school-holiday week.
pub const HOLIDAY_WEEK_HOURS: f64 = 40.0;

/// Expected hours for a week, depending on whether it is a holiday week.
pub fn target_hours(is_holiday: bool) -> f64 {
    if is_holiday {
        HOLIDAY_WEEK_HOURS
    } else {
        NORMAL_WEEK_HOURS
    }
}
