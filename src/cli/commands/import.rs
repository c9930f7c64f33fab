use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        let mut app = App::open(cfg);
        let path = expand_tilde(file);

        ImportLogic::apply(&mut app, &path, |prompt| *yes || ask_confirmation(prompt))?;
    }

    Ok(())
}
