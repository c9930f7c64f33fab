/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Overtime color: zero and above → green, below zero → red.
pub fn color_for_overtime(hours: f64) -> &'static str {
    if hours >= 0.0 { GREEN } else { RED }
}

/// Wrap `value` in the overtime color.
pub fn colorize_overtime(value: &str, hours: f64) -> String {
    format!("{}{value}{RESET}", color_for_overtime(hours))
}

/// Grey out zero-like cells (e.g. no reduction).
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "0h" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
