//! rTimetracker library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (calculator, storage, views) for reuse and tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Next { .. } => cli::commands::next::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
    }
}

/// Route `log` output to stderr; `RUST_LOG` wins over the configured level.
fn init_logging(cfg: &Config) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cfg.log_level.as_str()),
    )
    .format_timestamp(None)
    .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once; a broken file falls back to defaults
    let loaded = Config::try_load();
    let cfg = match &loaded {
        Ok(c) => c.clone(),
        Err(_) => Config::default(),
    }
    .with_overrides(cli.db.as_deref(), cli.store.as_deref());

    // 3️⃣ logging, with the level from config
    init_logging(&cfg);
    if let Err(e) = loaded {
        log::warn!("ignoring configuration file: {}", e);
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
