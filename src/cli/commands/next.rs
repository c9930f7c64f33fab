use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::core::form::next_week;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::week_label;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Next { date: date_arg } = cmd {
        let today = date::parse_optional_date(date_arg.as_ref()).map_err(AppError::InvalidDate)?;

        let app = App::open(cfg);
        let (year, week) = next_week(app.entries(), today);
        info(format!("Next suggested week: {}", week_label(year, week)));
    }

    Ok(())
}
