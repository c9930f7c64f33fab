use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::core::add::{AddInput, AddLogic};
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Record a new week.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        hours,
        year,
        week,
        holiday,
        reduction,
        date: date_arg,
    } = cmd
    {
        let today = date::parse_optional_date(date_arg.as_ref()).map_err(AppError::InvalidDate)?;

        let input = AddInput {
            hours: hours.clone(),
            year: *year,
            week: *week,
            holiday: *holiday,
            reduction: reduction.clone(),
        };

        let mut app = App::open(cfg);
        AddLogic::apply(&mut app, &input, today)?;
    }

    Ok(())
}
