//! Overtime arithmetic: weekly target, per-week surplus and running balance.

pub mod expected;
pub mod surplus;

pub use expected::{HOLIDAY_WEEK_HOURS, NORMAL_WEEK_HOURS, target_hours};
pub use surplus::{total_overtime, week_overtime};
