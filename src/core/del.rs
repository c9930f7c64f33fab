use crate::core::app::App;
use crate::models::WeekEntry;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::week_label;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove every entry equal to `entry`. Returns the removed count;
    /// zero is reported to the user but is not an error.
    pub fn apply(app: &mut App, entry: &WeekEntry) -> usize {
        let label = week_label(entry.year, entry.week);
        let removed = app.delete(entry);

        if removed == 0 {
            warning(format!("No entry matching {} found.", label));
            return 0;
        }

        app.commit();
        app.record("del", &label, &format!("removed {} matching entries", removed));
        success(format!("Deleted {} entry(ies) for {}.", removed, label));

        removed
    }
}
