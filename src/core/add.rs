use crate::core::app::App;
use crate::core::form::WeekForm;
use crate::errors::AppResult;
use crate::models::WeekEntry;
use crate::ui::messages::{info, success};
use crate::utils::formatting::{hours, week_label};
use chrono::NaiveDate;

/// Values for a new entry as they arrive from the command line.
#[derive(Debug, Clone, Default)]
pub struct AddInput {
    pub hours: String,
    pub year: Option<i32>,
    pub week: Option<u32>,
    pub holiday: bool,
    pub reduction: Option<String>,
}

pub struct AddLogic;

impl AddLogic {
    /// Fill the form (suggested slot unless overridden), submit it and
    /// append the entry.
    pub fn apply(app: &mut App, input: &AddInput, today: NaiveDate) -> AppResult<WeekEntry> {
        let mut form = WeekForm::open(app.entries(), today);

        if let Some(y) = input.year {
            form.year = y;
        }
        if let Some(w) = input.week {
            form.week = w;
        }
        form.hours_worked = input.hours.clone();
        form.is_holiday = input.holiday;
        if let Some(r) = &input.reduction {
            form.reduction = r.clone();
        }

        let entry = form.submit(app.entries(), today)?;
        app.add(entry.clone());
        app.commit();

        let label = week_label(entry.year, entry.week);
        app.record(
            "add",
            &label,
            &format!(
                "worked={} holiday={} reduction={}",
                entry.hours_worked, entry.is_holiday, entry.reduction
            ),
        );

        success(format!(
            "Recorded {} for {}.",
            hours(entry.hours_worked),
            label
        ));
        info(format!(
            "Next suggested week: {}",
            week_label(form.year, form.week)
        ));

        Ok(entry)
    }
}
