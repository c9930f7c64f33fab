use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        compress,
        force,
    } = cmd
    {
        let app = App::open(cfg);

        let req = ExportRequest {
            format: *format,
            file: file.as_deref().map(expand_tilde),
            dir: cfg.export_dir_path(),
            force: *force,
            compress: *compress,
            date: date::today(),
        };

        let path = ExportLogic::export(app.entries(), &req)?;
        app.record(
            "export",
            &path.to_string_lossy(),
            &format!("{} entries as {}", app.entries().len(), format.as_str()),
        );
    }

    Ok(())
}
