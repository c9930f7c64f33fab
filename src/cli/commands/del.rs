use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::models::WeekEntry;
use crate::ui::views::entry_at_row;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        year,
        week,
        hours,
        holiday,
        reduction,
        row,
    } = cmd
    {
        let mut app = App::open(cfg);

        // clap guarantees year/week/hours whenever --row is absent
        let entry = match (row, year, week, hours) {
            (Some(r), _, _, _) => entry_at_row(app.entries(), *r)?,
            (None, Some(y), Some(w), Some(h)) => {
                WeekEntry::new(*y, *w, *h, *holiday, reduction.unwrap_or(0.0))
            }
            _ => return Ok(()),
        };

        DeleteLogic::apply(&mut app, &entry);
    }

    Ok(())
}
