use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::views::render_summary;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary = cmd {
        let app = App::open(cfg);
        println!("{}", render_summary(app.entries()));
    }

    Ok(())
}
