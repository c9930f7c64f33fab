use serde::{Deserialize, Deserializer, Serialize};

/// One recorded working week.
///
/// Entries carry no identifier: two entries are the same entry when all
/// five fields are equal, which is what `PartialEq` compares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekEntry {
    pub year: i32,
    pub week: u32,
    pub hours_worked: f64,
    pub is_holiday: bool,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub reduction: f64,
}

impl WeekEntry {
    pub fn new(year: i32, week: u32, hours_worked: f64, is_holiday: bool, reduction: f64) -> Self {
        Self {
            year,
            week,
            hours_worked,
            is_holiday,
            reduction,
        }
    }

    /// (year, week) pair used for ordering and next-week suggestions.
    pub fn slot(&self) -> (i32, u32) {
        (self.year, self.week)
    }
}

/// A stored `"reduction": null` counts as no reduction.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
