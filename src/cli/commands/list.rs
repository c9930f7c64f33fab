use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::views::{render_filtered_week_list, render_summary, render_week_list};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { year, week } = cmd {
        let app = App::open(cfg);

        println!("{}\n", render_summary(app.entries()));

        if year.is_none() && week.is_none() {
            header(format!("Recorded weeks ({})", app.entries().len()));
            print!("{}", render_week_list(app.entries()));
        } else {
            header("Selected weeks");
            print!("{}", render_filtered_week_list(app.entries(), *year, *week));
        }
    }

    Ok(())
}
