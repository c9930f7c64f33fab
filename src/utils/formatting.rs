//! Formatting utilities used for CLI and export outputs.

/// Hours as typed by a user: `41h`, `38.5h`, `-2.5h`.
///
/// Whole values print without decimals; negative zero prints as `0h`.
pub fn hours(value: f64) -> String {
    let v = if value == 0.0 { 0.0 } else { value };
    format!("{v}h")
}

/// Like [`hours`], with a leading `+` for zero and positive values.
pub fn signed_hours(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", hours(value))
    } else {
        hours(value)
    }
}

/// `2024/KW07`
pub fn week_label(year: i32, week: u32) -> String {
    format!("{year}/KW{week:02}")
}
